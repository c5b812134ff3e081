//! Token kinds and token values produced by the lexer.

use std::fmt;

use crate::lex_error::LexError;

/// Closed set of token kinds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// `{`
    BlockOpen,
    /// `}`
    BlockClose,
    /// `@NAME` control directive; the text excludes the `@`.
    Control,
    /// One word of a `#` header line.
    Title,
    /// Upper-case led identifier, e.g. `TASK` or `HARD_DEADLINE`.
    Ident,
    /// Lower-case led name, e.g. `t0_1`.
    Name,
    /// Signed decimal literal, e.g. `-5.2`.
    Number,
    /// Terminal lexical failure; always the last token of a stream.
    Error,
}

impl TokenKind {
    /// Human-readable name for diagnostics and logs.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::BlockOpen => "block open",
            TokenKind::BlockClose => "block close",
            TokenKind::Control => "control",
            TokenKind::Title => "title",
            TokenKind::Ident => "identifier",
            TokenKind::Name => "name",
            TokenKind::Number => "number",
            TokenKind::Error => "error",
        }
    }

    /// Fixed lexeme for kinds that always carry the same text.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::BlockOpen => Some("{"),
            TokenKind::BlockClose => Some("}"),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexeme.
///
/// Tokens are plain values: two tokens are equal when their kind, text, and
/// error payload are equal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    error: Option<LexError>,
}

impl Token {
    /// Creates a non-error token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        debug_assert!(kind != TokenKind::Error, "use Token::error for errors");
        Self {
            kind,
            text: text.into(),
            error: None,
        }
    }

    /// Creates the terminal error token; its text is the rendered cause.
    pub fn error(cause: LexError) -> Self {
        Self {
            kind: TokenKind::Error,
            text: cause.to_string(),
            error: Some(cause),
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The failure cause, present only on [`TokenKind::Error`] tokens.
    #[inline]
    pub fn cause(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// Splits an error token into its cause; other tokens come back unchanged.
    pub fn into_result(self) -> Result<Token, LexError> {
        match self.error {
            Some(cause) => Err(cause),
            None => Ok(self),
        }
    }
}

/// Renders the token the way it appeared in the source.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Control => write!(f, "@{}", self.text),
            TokenKind::Error => write!(f, "error: {}", self.text),
            _ => f.write_str(&self.text),
        }
    }
}

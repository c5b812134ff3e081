//! Lexer error taxonomy.
//!
//! `EndOfInput` is not a user-visible failure: every state maps it to a
//! clean end of the token stream. The remaining variants are wrapped into a
//! single terminal [`TokenKind::Error`](crate::TokenKind::Error) token.

use std::fmt;
use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Why the lexer stopped.
#[derive(Clone, Debug, Error)]
pub enum LexError {
    /// The source is exhausted.
    #[error("end of input")]
    EndOfInput,

    /// The underlying reader failed. Shared so tokens carrying it stay `Clone`.
    #[error(transparent)]
    Io(Arc<io::Error>),

    /// A required byte did not match.
    #[error("got '{}' instead of {expected}", .found.escape_ascii())]
    UnexpectedByte { expected: Expected, found: u8 },

    /// No dispatch rule matches the byte.
    #[error("unknown token starting from '{}'", .0.escape_ascii())]
    UnknownTokenStart(u8),
}

impl LexError {
    /// Returns `true` for the clean termination signal.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, LexError::EndOfInput)
    }
}

impl From<io::Error> for LexError {
    fn from(err: io::Error) -> Self {
        LexError::Io(Arc::new(err))
    }
}

/// `Io` errors compare by [`io::ErrorKind`]; `io::Error` itself has no equality.
impl PartialEq for LexError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LexError::EndOfInput, LexError::EndOfInput) => true,
            (LexError::Io(a), LexError::Io(b)) => a.kind() == b.kind(),
            (
                LexError::UnexpectedByte {
                    expected: e1,
                    found: f1,
                },
                LexError::UnexpectedByte {
                    expected: e2,
                    found: f2,
                },
            ) => e1 == e2 && f1 == f2,
            (LexError::UnknownTokenStart(a), LexError::UnknownTokenStart(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for LexError {}

/// What a state required when it met an [`LexError::UnexpectedByte`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Expected {
    /// A specific literal byte.
    Byte(u8),
    /// Any decimal digit.
    Digit,
    /// The first byte of an identifier.
    Identifier,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Byte(byte) => write!(f, "'{}'", byte.escape_ascii()),
            Expected::Digit => f.write_str("a digit"),
            Expected::Identifier => f.write_str("an identifier"),
        }
    }
}

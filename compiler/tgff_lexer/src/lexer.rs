//! Tokenizing state machine and the pull-based [`Lexer`] iterator.
//!
//! # Design
//!
//! The machine is a closed [`State`] enum. `Dispatch` skips whitespace,
//! peeks one byte, and picks a specialized state; that state consumes its
//! lexeme and emits at most one token before handing control back. Each
//! call to [`Iterator::next`] runs steps until a token is ready, so the
//! machine never advances ahead of the consumer.
//!
//! `EndOfInput` raised anywhere is a clean stop. Any other failure moves to
//! `Error`, which emits one error token and halts.

use std::io::{BufRead, BufReader, Read};
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::char_class::{
    is_alpha, is_digit, is_idently, is_line_space, is_namely, is_newline, is_numberly, is_sign,
    is_whitespace, starts_name, BLOCK_CLOSER, BLOCK_OPENER, COMMENT_MARK, CONTROL_MARK, POINT,
    RULER_MARK,
};
use crate::lex_error::{Expected, LexError};
use crate::options::LexerOptions;
use crate::source::ByteSource;
use crate::token::{Token, TokenKind};

/// Machine states.
#[derive(Clone, Debug, Eq, PartialEq)]
enum State {
    Dispatch,
    Control,
    Comment,
    /// Loops over one header line, one title per step.
    Header,
    BlockOpen,
    BlockClose,
    Number,
    Ident,
    Name,
    Error(LexError),
    Terminal,
}

/// Outcome of running one state.
#[derive(Debug, PartialEq)]
struct Step {
    token: Option<Token>,
    next: State,
}

impl Step {
    fn to(next: State) -> Self {
        Self { token: None, next }
    }

    fn emit(token: Token, next: State) -> Self {
        Self {
            token: Some(token),
            next,
        }
    }
}

impl State {
    /// Runs this state once against `src`.
    fn run<R: BufRead>(self, src: &mut ByteSource<R>) -> Step {
        let result = match self {
            State::Dispatch => dispatch(src),
            State::Control => control(src),
            State::Comment => comment(src),
            State::Header => header(src),
            State::BlockOpen => block(src, BLOCK_OPENER, TokenKind::BlockOpen),
            State::BlockClose => block(src, BLOCK_CLOSER, TokenKind::BlockClose),
            State::Number => number(src),
            State::Ident => word(src, read_ident, TokenKind::Ident, State::Dispatch),
            State::Name => word(src, read_name, TokenKind::Name, State::Dispatch),
            State::Error(cause) => return Step::emit(Token::error(cause), State::Terminal),
            State::Terminal => return Step::to(State::Terminal),
        };
        result.unwrap_or_else(end_or_error)
    }
}

fn end_or_error(err: LexError) -> Step {
    if err.is_end_of_input() {
        Step::to(State::Terminal)
    } else {
        Step::to(State::Error(err))
    }
}

/// Emits the pending lexeme as a `kind` token.
fn emit<R: BufRead>(src: &mut ByteSource<R>, kind: TokenKind, next: State) -> Step {
    Step::emit(Token::new(kind, src.take_lexeme()), next)
}

fn read_ident<R: BufRead>(src: &mut ByteSource<R>) -> Result<usize, LexError> {
    src.read_while(|pos, byte| {
        if pos == 0 {
            is_idently(byte)
        } else {
            is_namely(byte)
        }
    })
}

fn read_name<R: BufRead>(src: &mut ByteSource<R>) -> Result<usize, LexError> {
    src.read_while(|pos, byte| {
        if pos == 0 {
            is_alpha(byte)
        } else {
            is_namely(byte)
        }
    })
}

fn dispatch<R: BufRead>(src: &mut ByteSource<R>) -> Result<Step, LexError> {
    src.skip_while(is_whitespace)?;
    let next = match src.peek()? {
        CONTROL_MARK => State::Control,
        COMMENT_MARK => State::Comment,
        BLOCK_OPENER => State::BlockOpen,
        BLOCK_CLOSER => State::BlockClose,
        byte if is_numberly(byte) => State::Number,
        byte if is_idently(byte) => State::Ident,
        byte if starts_name(byte) => State::Name,
        byte => State::Error(LexError::UnknownTokenStart(byte)),
    };
    trace!(next = ?next, "dispatch");
    Ok(Step::to(next))
}

/// Consumes a brace; the token text is the kind's fixed lexeme.
fn block<R: BufRead>(
    src: &mut ByteSource<R>,
    mark: u8,
    kind: TokenKind,
) -> Result<Step, LexError> {
    src.require_byte(mark)?;
    let text = kind.lexeme().unwrap_or_default();
    Ok(Step::emit(Token::new(kind, text), State::Dispatch))
}

fn control<R: BufRead>(src: &mut ByteSource<R>) -> Result<Step, LexError> {
    src.require_byte(CONTROL_MARK)?;
    if read_ident(src)? == 0 {
        let found = src.peek()?;
        return Err(LexError::UnexpectedByte {
            expected: Expected::Identifier,
            found,
        });
    }
    Ok(emit(src, TokenKind::Control, State::Dispatch))
}

fn comment<R: BufRead>(src: &mut ByteSource<R>) -> Result<Step, LexError> {
    src.require_byte(COMMENT_MARK)?;
    if src.peek()? == RULER_MARK {
        src.skip_line()?;
        Ok(Step::to(State::Dispatch))
    } else {
        Ok(Step::to(State::Header))
    }
}

fn header<R: BufRead>(src: &mut ByteSource<R>) -> Result<Step, LexError> {
    src.skip_while(is_line_space)?;
    if is_newline(src.peek()?) {
        return Ok(Step::to(State::Dispatch));
    }
    word(src, read_name, TokenKind::Title, State::Header)
}

/// Reads one word with `read` and emits it, or fails on the byte that could
/// not start it.
fn word<R: BufRead>(
    src: &mut ByteSource<R>,
    read: fn(&mut ByteSource<R>) -> Result<usize, LexError>,
    kind: TokenKind,
    next: State,
) -> Result<Step, LexError> {
    if read(src)? == 0 {
        return Err(LexError::UnknownTokenStart(src.peek()?));
    }
    Ok(emit(src, kind, next))
}

fn number<R: BufRead>(src: &mut ByteSource<R>) -> Result<Step, LexError> {
    src.read_while(|pos, byte| pos == 0 && is_sign(byte))?;

    let found = src.peek()?;
    if !is_digit(found) {
        return Err(LexError::UnexpectedByte {
            expected: Expected::Digit,
            found,
        });
    }
    src.read_while(|_, byte| is_digit(byte))?;

    match src.peek() {
        Ok(POINT) => fraction(src)?,
        Ok(_) | Err(LexError::EndOfInput) => {}
        Err(err) => return Err(err),
    }
    Ok(emit(src, TokenKind::Number, State::Dispatch))
}

/// Takes `.` plus digits, or pushes the `.` back when no digit follows.
fn fraction<R: BufRead>(src: &mut ByteSource<R>) -> Result<(), LexError> {
    let point = src.read_byte()?;
    match src.peek() {
        Ok(byte) if is_digit(byte) => {
            src.accept(point);
            src.read_while(|_, byte| is_digit(byte))?;
        }
        Ok(_) | Err(LexError::EndOfInput) => src.unread(),
        Err(err) => return Err(err),
    }
    Ok(())
}

/// Streaming TGFF lexer.
///
/// Yields tokens in source order. The stream ends after clean end of input
/// or after a single [`TokenKind::Error`] token. The reader is dropped as
/// soon as the machine stops, and with the lexer if it is dropped earlier.
///
/// ```
/// use tgff_lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("@HYPERPERIOD 300".as_bytes())
///     .map(|token| token.kind())
///     .collect();
/// assert_eq!(kinds, [TokenKind::Control, TokenKind::Number]);
/// ```
#[derive(Debug)]
pub struct Lexer<R> {
    /// `None` once the machine has stopped.
    source: Option<ByteSource<R>>,
    state: State,
}

impl<R: Read> Lexer<BufReader<R>> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, LexerOptions::default())
    }

    pub fn with_options(reader: R, options: LexerOptions) -> Self {
        let reader = BufReader::with_capacity(options.read_capacity.max(1), reader);
        Self::start(ByteSource::with_capacity(reader, options.lexeme_capacity))
    }
}

impl<R: BufRead> Lexer<R> {
    /// Lexes a reader that is already buffered, such as `&[u8]`.
    pub fn from_buffered(reader: R) -> Self {
        Self::start(ByteSource::new(reader))
    }

    fn start(source: ByteSource<R>) -> Self {
        Self {
            source: Some(source),
            state: State::Dispatch,
        }
    }

    /// Returns `true` once the stream has ended and the reader is released.
    pub fn is_terminated(&self) -> bool {
        self.source.is_none()
    }

    fn close(&mut self, failed: bool) {
        if self.source.take().is_some() {
            debug!(failed, "lexer closed");
        }
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let source = self.source.as_mut()?;
            let state = std::mem::replace(&mut self.state, State::Terminal);
            let Step { token, next } = state.run(source);

            if next == State::Terminal {
                self.close(token.as_ref().is_some_and(Token::is_error));
            }
            self.state = next;

            if let Some(token) = token {
                trace!(kind = %token.kind(), text = token.text(), "emit");
                return Some(token);
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Lexer<R> {}

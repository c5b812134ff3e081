//! Buffered byte source with a one-slot pushback.
//!
//! The source also owns the accumulation buffer for the pending lexeme.
//! Every `read_*` primitive appends to it and every `skip_*` primitive
//! leaves it untouched; [`ByteSource::take_lexeme`] hands the lexeme out and
//! clears it, so the buffer never holds more than one unemitted lexeme.
//!
//! # Pushback
//!
//! Only the most recently read byte can be returned with
//! [`ByteSource::unread`], and only once. The lexer never needs more than one
//! byte of lookahead beyond [`ByteSource::peek`].

use std::io::{BufRead, ErrorKind};

use crate::char_class::is_newline;
use crate::lex_error::{Expected, LexError};

/// Initial capacity of the lexeme buffer.
pub const DEFAULT_LEXEME_CAPACITY: usize = 42;

/// Forward-only byte reader over any [`BufRead`].
#[derive(Debug)]
pub struct ByteSource<R> {
    reader: R,
    /// Byte returned by `unread`, served before the reader.
    pushback: Option<u8>,
    /// Most recently read byte, eligible for `unread`.
    last: Option<u8>,
    lexeme: Vec<u8>,
}

impl<R: BufRead> ByteSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_LEXEME_CAPACITY)
    }

    pub fn with_capacity(reader: R, lexeme_capacity: usize) -> Self {
        Self {
            reader,
            pushback: None,
            last: None,
            lexeme: Vec::with_capacity(lexeme_capacity),
        }
    }

    /// First buffered byte of the reader, retrying interrupted reads.
    fn first_buffered(&mut self) -> Result<Option<u8>, LexError> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Next byte without consuming it.
    pub fn peek(&mut self) -> Result<u8, LexError> {
        if let Some(byte) = self.pushback {
            return Ok(byte);
        }
        self.first_buffered()?.ok_or(LexError::EndOfInput)
    }

    /// Consumes and returns the next byte.
    pub fn read_byte(&mut self) -> Result<u8, LexError> {
        let byte = match self.pushback.take() {
            Some(byte) => byte,
            None => {
                let byte = self.peek()?;
                self.reader.consume(1);
                byte
            }
        };
        self.last = Some(byte);
        Ok(byte)
    }

    /// Pushes the most recently read byte back. A second call without an
    /// intervening read does nothing.
    pub fn unread(&mut self) {
        if let Some(byte) = self.last.take() {
            self.pushback = Some(byte);
        }
    }

    /// Appends bytes to the lexeme while `accept(position, byte)` holds,
    /// where `position` is the byte's index within the lexeme.
    ///
    /// Stops before the first rejected byte or at end of input, which is not
    /// an error here. Returns how many bytes were read.
    pub fn read_while<F>(&mut self, mut accept: F) -> Result<usize, LexError>
    where
        F: FnMut(usize, u8) -> bool,
    {
        let start = self.lexeme.len();
        loop {
            let byte = match self.peek() {
                Ok(byte) => byte,
                Err(LexError::EndOfInput) => break,
                Err(err) => return Err(err),
            };
            if !accept(self.lexeme.len(), byte) {
                break;
            }
            self.read_byte()?;
            self.lexeme.push(byte);
        }
        Ok(self.lexeme.len() - start)
    }

    /// Discards bytes while `skip` holds, leaving the pending lexeme intact.
    pub fn skip_while<F>(&mut self, skip: F) -> Result<usize, LexError>
    where
        F: Fn(u8) -> bool,
    {
        let mark = self.lexeme.len();
        let result = self.read_while(|_, byte| skip(byte));
        self.lexeme.truncate(mark);
        result
    }

    /// Consumes one byte that must equal `expected`.
    pub fn require_byte(&mut self, expected: u8) -> Result<u8, LexError> {
        let found = self.read_byte()?;
        if found == expected {
            Ok(found)
        } else {
            Err(LexError::UnexpectedByte {
                expected: Expected::Byte(expected),
                found,
            })
        }
    }

    /// Discards everything up to and including the next `\n` or `\r`, or to
    /// end of input. The `\n` of a `\r\n` pair is left for the caller.
    pub fn skip_line(&mut self) -> Result<(), LexError> {
        if let Some(byte) = self.pushback.take() {
            self.last = Some(byte);
            if is_newline(byte) {
                return Ok(());
            }
        }
        loop {
            let (consumed, last) = match self.reader.fill_buf() {
                Ok([]) => return Ok(()),
                Ok(buf) => {
                    let consumed =
                        memchr::memchr2(b'\n', b'\r', buf).map_or(buf.len(), |at| at + 1);
                    (consumed, buf[consumed - 1])
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            self.reader.consume(consumed);
            self.last = Some(last);
            if is_newline(last) {
                return Ok(());
            }
        }
    }

    /// Appends an already consumed byte to the lexeme.
    #[inline]
    pub fn accept(&mut self, byte: u8) {
        self.lexeme.push(byte);
    }

    /// The pending lexeme.
    #[inline]
    pub fn lexeme(&self) -> &[u8] {
        &self.lexeme
    }

    /// Hands out the pending lexeme and clears the buffer.
    ///
    /// Lexemes are built from ASCII classes, so the lossy conversion never
    /// replaces anything.
    pub fn take_lexeme(&mut self) -> String {
        let text = String::from_utf8_lossy(&self.lexeme).into_owned();
        self.lexeme.clear();
        text
    }
}

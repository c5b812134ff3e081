//! Lexer configuration.

use crate::source::DEFAULT_LEXEME_CAPACITY;

/// Default capacity of the `BufReader` wrapped around plain readers.
pub const DEFAULT_READ_CAPACITY: usize = 8 * 1024;

/// Buffer sizes used when constructing a [`Lexer`](crate::Lexer).
///
/// ```
/// use tgff_lexer::LexerOptions;
///
/// let options = LexerOptions::default().read_capacity(64 * 1024);
/// assert_eq!(options.lexeme_capacity, 42);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LexerOptions {
    /// Initial capacity of the pending-lexeme buffer. It grows on demand.
    pub lexeme_capacity: usize,
    /// Capacity of the read buffer; ignored by
    /// [`Lexer::from_buffered`](crate::Lexer::from_buffered).
    pub read_capacity: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            lexeme_capacity: DEFAULT_LEXEME_CAPACITY,
            read_capacity: DEFAULT_READ_CAPACITY,
        }
    }
}

impl LexerOptions {
    #[must_use]
    pub fn lexeme_capacity(mut self, capacity: usize) -> Self {
        self.lexeme_capacity = capacity;
        self
    }

    /// Zero is replaced by one so the reader always makes progress.
    #[must_use]
    pub fn read_capacity(mut self, capacity: usize) -> Self {
        self.read_capacity = capacity.max(1);
        self
    }
}

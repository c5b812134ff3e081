//! Streaming lexer for TGFF task graph descriptions.
//!
//! TGFF files are line oriented: `@` control directives, `{ }` blocks,
//! upper-case identifiers, lower-case names, decimal numbers, and `#`
//! comment lines. A `#-` line is discarded; any other `#` line is a header
//! whose words become [`TokenKind::Title`] tokens.
//!
//! ```text
//! @TASK_GRAPH 0 {
//!     PERIOD 300
//!     TASK t0_0 TYPE 2
//! }
//! #------------------
//! @PE 0 {
//! # price area
//!   75.2 0.05
//! }
//! ```
//!
//! The lexer is a pull-based iterator: nothing is read until a token is
//! requested, and the reader is released when the stream ends or the
//! [`Lexer`] is dropped. Grammar checking belongs to the consumer.
//!
//! ```
//! use tgff_lexer::{tokenize_str, TokenKind};
//!
//! let tokens = tokenize_str("@PE 0 {\n# price area\n 75.2 0.05\n}").unwrap();
//! assert_eq!(tokens[0].text(), "PE");
//! assert_eq!(tokens[3].kind(), TokenKind::Title);
//! ```

pub mod char_class;
mod lex_error;
mod lexer;
mod options;
pub mod source;
mod token;

use std::io::Read;

pub use lex_error::{Expected, LexError};
pub use lexer::Lexer;
pub use options::{LexerOptions, DEFAULT_READ_CAPACITY};
pub use token::{Token, TokenKind};

/// Lexes `reader` to completion.
///
/// An [`TokenKind::Error`] token is turned into its cause, so on success the
/// returned tokens never contain one.
pub fn tokenize<R: Read>(reader: R) -> Result<Vec<Token>, LexError> {
    Lexer::new(reader).map(Token::into_result).collect()
}

/// Lexes an in-memory document.
pub fn tokenize_str(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::from_buffered(source.as_bytes())
        .map(Token::into_result)
        .collect()
}

/// Routes lexer logs to the test harness when `RUST_LOG` is set, e.g.
/// `RUST_LOG=tgff_lexer=trace cargo test` to see every state change and token.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return;
    };
    // Only the first test to get here installs the global subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_test_writer().with_target(true))
        .try_init();
}

//! Byte classes recognized by the TGFF lexer.
//!
//! TGFF is plain ASCII. Keywords (`TASK_GRAPH`, `HARD_DEADLINE`, ...) start
//! with an upper-case letter, instance names (`t0_1`, `a0_0`) with a
//! lower-case one, and both continue with letters, digits, or `_`. Bytes at
//! or above `0x80` belong to no class.

/// Opens a brace-delimited block.
pub const BLOCK_OPENER: u8 = b'{';
/// Closes a brace-delimited block.
pub const BLOCK_CLOSER: u8 = b'}';
/// Starts a comment or header line.
pub const COMMENT_MARK: u8 = b'#';
/// Starts a control directive.
pub const CONTROL_MARK: u8 = b'@';
/// Follows [`COMMENT_MARK`] on lines that are discarded entirely.
pub const RULER_MARK: u8 = b'-';
/// Separates the integral and fractional parts of a number.
pub const POINT: u8 = b'.';

/// Space, tab, line feed, or carriage return.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Space or tab.
#[inline]
pub const fn is_line_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

/// Line feed or carriage return.
#[inline]
pub const fn is_newline(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r')
}

#[inline]
pub const fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

#[inline]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

#[inline]
pub const fn is_sign(byte: u8) -> bool {
    matches!(byte, b'+' | b'-')
}

#[inline]
pub const fn is_point(byte: u8) -> bool {
    byte == POINT
}

/// Legal first byte of a control directive or an identifier.
#[inline]
pub const fn is_idently(byte: u8) -> bool {
    byte.is_ascii_uppercase()
}

/// Legal non-initial byte of an identifier, name, or title.
#[inline]
pub const fn is_namely(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Legal first byte of a number: a sign or a digit.
#[inline]
pub const fn is_numberly(byte: u8) -> bool {
    is_sign(byte) || is_digit(byte)
}

/// Legal first byte of a name: a letter that cannot start an identifier.
#[inline]
pub const fn starts_name(byte: u8) -> bool {
    is_alpha(byte) && !is_idently(byte)
}

//! Line Framing Parser
//!
//! TCP is a byte stream: one read may carry half a command or several
//! commands at once. `LineParser` finds complete `\n`-terminated lines in
//! an accumulation buffer and turns each into a [`Command`].
//!
//! ## Usage Pattern
//!
//! ```text
//! buffer: "SET a 1\nGET a\nDEL"
//!          └──────┘└────┘└──┘
//!           line 1  line 2  incomplete, wait for more data
//! ```
//!
//! The parser reports how many bytes it consumed so the caller can advance
//! its buffer.

use super::types::Command;
use thiserror::Error;

/// Default limit on a pending line (64 KB)
pub const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024;

/// Errors that can occur while framing lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No newline found within the allowed line length
    #[error("line too long: {len} bytes without a newline (max: {max})")]
    LineTooLong { len: usize, max: usize },
}

/// Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Splits a byte buffer into command lines.
#[derive(Debug, Clone)]
pub struct LineParser {
    max_line_length: usize,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    pub fn new() -> Self {
        Self::with_max_line_length(DEFAULT_MAX_LINE_LENGTH)
    }

    pub fn with_max_line_length(max_line_length: usize) -> Self {
        Self { max_line_length }
    }

    /// Attempts to parse one command line from the front of `buf`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some((command, consumed)))` - a full line, `consumed` includes the `\n`
    /// - `Ok(None)` - no complete line yet
    /// - `Err(e)` - the pending line exceeds the length limit
    pub fn parse(&self, buf: &[u8]) -> ParseResult<Option<(Command, usize)>> {
        match buf.iter().position(|&b| b == b'\n') {
            Some(pos) if pos > self.max_line_length => Err(ParseError::LineTooLong {
                len: pos,
                max: self.max_line_length,
            }),
            Some(pos) => Ok(Some((Command::from_bytes(&buf[..pos]), pos + 1))),
            None if buf.len() > self.max_line_length => Err(ParseError::LineTooLong {
                len: buf.len(),
                max: self.max_line_length,
            }),
            None => Ok(None),
        }
    }
}

/// Convenience function to parse a single line with default limits.
pub fn parse_line(buf: &[u8]) -> ParseResult<Option<(Command, usize)>> {
    LineParser::new().parse(buf)
}

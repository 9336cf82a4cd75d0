//! Line Protocol Implementation
//!
//! The wire protocol is plain text: a command is a line of
//! space-separated tokens, a reply is a line of text.
//!
//! ## Modules
//!
//! - `types`: `Command`, `Verb` and `Reply`
//! - `parser`: line framing over a stream buffer
//!
//! ## Example
//!
//! ```
//! use linekv::protocol::{parse_line, Reply, Verb};
//!
//! let (command, consumed) = parse_line(b"GET name\n").unwrap().unwrap();
//! assert_eq!(command.verb, Verb::Get);
//! assert_eq!(consumed, 9);
//!
//! assert_eq!(Reply::Nil.serialize(), b"(nil)\n");
//! ```

pub mod parser;
pub mod types;

pub use parser::{parse_line, LineParser, ParseError, ParseResult, DEFAULT_MAX_LINE_LENGTH};
pub use types::{Command, Reply, Verb};

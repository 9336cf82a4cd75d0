//! Command and Reply Types
//!
//! This module defines the values exchanged over the wire.
//! A client sends one command per line; the server answers with one
//! textual reply terminated by `\n`.
//!
//! ## Reply Formats
//!
//! | Reply      | Wire text                     |
//! |------------|-------------------------------|
//! | `Ok`       | `OK\n`                        |
//! | `Value`    | `<value>\n`                   |
//! | `Nil`      | `(nil)\n`                     |
//! | `Integer`  | `:<n>\n`                      |
//! | `Keys`     | `*<k1>\n<k2>\n...<kn>\n`      |
//! | `Error`    | `ERR <message>\n`             |

use std::fmt;

/// Terminator appended to every reply
pub const REPLY_TERMINATOR: u8 = b'\n';

/// The verb of a command.
///
/// Verbs are matched case-sensitively: `set` is an unknown command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Set,
    Get,
    Del,
    Exists,
    Keys,
    /// Anything else, kept verbatim for the error reply
    Unknown(String),
}

impl Verb {
    /// Resolves a verb token.
    pub fn from_token(token: &str) -> Self {
        match token {
            "SET" => Verb::Set,
            "GET" => Verb::Get,
            "DEL" => Verb::Del,
            "EXISTS" => Verb::Exists,
            "KEYS" => Verb::Keys,
            other => Verb::Unknown(other.to_string()),
        }
    }

    /// Returns the verb as the client typed it.
    pub fn as_str(&self) -> &str {
        match self {
            Verb::Set => "SET",
            Verb::Get => "GET",
            Verb::Del => "DEL",
            Verb::Exists => "EXISTS",
            Verb::Keys => "KEYS",
            Verb::Unknown(token) => token.as_str(),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    pub args: Vec<String>,
}

impl Command {
    /// Parses one command line.
    ///
    /// Surrounding whitespace (including a trailing `\r\n`) is trimmed and
    /// the remainder is split on single spaces, so `SET a  b` carries an
    /// empty argument. An empty line yields an empty unknown verb.
    ///
    /// # Example
    /// ```
    /// use linekv::protocol::{Command, Verb};
    /// let cmd = Command::parse("SET name Ariz\r\n");
    /// assert_eq!(cmd.verb, Verb::Set);
    /// assert_eq!(cmd.args, vec!["name", "Ariz"]);
    /// ```
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.trim().split(' ');
        let verb = Verb::from_token(tokens.next().unwrap_or_default());
        let args = tokens.map(str::to_string).collect();
        Self { verb, args }
    }

    /// Parses a command from raw bytes, replacing invalid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }
}

/// A reply sent back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Successful write
    Ok,
    /// A stored value
    Value(String),
    /// Lookup of an absent key
    Nil,
    /// A count of keys
    Integer(u64),
    /// Keys matching a pattern
    Keys(Vec<String>),
    /// A command-level error; the text already starts with `ERR`
    Error(String),
}

impl Reply {
    /// Creates an error reply.
    ///
    /// # Example
    /// ```
    /// use linekv::protocol::Reply;
    /// let err = Reply::error("ERR unknown command 'FOO'");
    /// assert_eq!(err.to_string(), "ERR unknown command 'FOO'");
    /// ```
    pub fn error(msg: impl Into<String>) -> Self {
        Reply::Error(msg.into())
    }

    /// The arity error for `verb`, which is reported in lowercase.
    pub fn wrong_arity(verb: &Verb) -> Self {
        Reply::Error(format!(
            "ERR wrong number of arguments for '{}' command",
            verb.as_str().to_lowercase()
        ))
    }

    /// The error for an unrecognised verb.
    pub fn unknown_command(verb: &Verb) -> Self {
        Reply::Error(format!("ERR unknown command '{}'", verb))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    /// Serializes the reply, including its terminator.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = self.to_string().into_bytes();
        buf.push(REPLY_TERMINATOR);
        buf
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => f.write_str("OK"),
            Reply::Value(v) => f.write_str(v),
            Reply::Nil => f.write_str("(nil)"),
            Reply::Integer(n) => write!(f, ":{}", n),
            Reply::Keys(keys) => write!(f, "*{}", keys.join("\n")),
            Reply::Error(msg) => f.write_str(msg),
        }
    }
}

//! Command Handler Module
//!
//! This module executes parsed commands against the store and builds the
//! reply for each one.
//!
//! ## Supported Commands
//!
//! - `SET key value` - Set a key
//! - `GET key` - Get a key's value
//! - `DEL key [key ...]` - Delete keys
//! - `EXISTS key [key ...]` - Count existing keys
//! - `KEYS pattern` - List keys (`*` or an exact key)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CommandHandler                          │
//! │                                                             │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐     │
//! │  │   Command   │───>│  dispatch() │───>│  cmd_*()    │     │
//! │  └─────────────┘    └─────────────┘    └─────────────┘     │
//! │                                               │             │
//! │                                               ▼             │
//! │                                             Store           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use crate::protocol::{Command, Reply, Verb};
use crate::storage::{KeyPattern, Store};
use std::sync::Arc;

/// Executes commands against the shared store.
#[derive(Debug, Clone)]
pub struct CommandHandler {
    /// The shared store
    storage: Arc<Store>,
}

impl CommandHandler {
    /// Creates a new command handler with the given store.
    pub fn new(storage: Arc<Store>) -> Self {
        Self { storage }
    }

    /// Executes a command and returns the reply.
    ///
    /// Command errors (arity, unknown verb) come back as
    /// [`Reply::Error`]; they never fail the connection.
    pub fn execute(&self, command: Command) -> Reply {
        let Command { verb, args } = command;

        match verb {
            Verb::Set => self.cmd_set(&verb, args),
            Verb::Get => self.cmd_get(&verb, &args),
            Verb::Del => self.cmd_del(&verb, &args),
            Verb::Exists => self.cmd_exists(&verb, &args),
            Verb::Keys => self.cmd_keys(&verb, &args),
            Verb::Unknown(_) => Reply::unknown_command(&verb),
        }
    }

    /// Parses and executes a single command line.
    pub fn execute_line(&self, line: &str) -> Reply {
        self.execute(Command::parse(line))
    }

    /// SET key value
    fn cmd_set(&self, verb: &Verb, args: Vec<String>) -> Reply {
        let [key, value]: [String; 2] = match args.try_into() {
            Ok(pair) => pair,
            Err(_) => return Reply::wrong_arity(verb),
        };

        self.storage.set(key, value);
        Reply::Ok
    }

    /// GET key
    fn cmd_get(&self, verb: &Verb, args: &[String]) -> Reply {
        let [key] = args else {
            return Reply::wrong_arity(verb);
        };

        match self.storage.get(key) {
            Some(value) => Reply::Value(value),
            None => Reply::Nil,
        }
    }

    /// DEL key [key ...]
    fn cmd_del(&self, verb: &Verb, args: &[String]) -> Reply {
        if args.is_empty() {
            return Reply::wrong_arity(verb);
        }

        Reply::Integer(self.storage.delete_many(args))
    }

    /// EXISTS key [key ...]
    fn cmd_exists(&self, verb: &Verb, args: &[String]) -> Reply {
        if args.is_empty() {
            return Reply::wrong_arity(verb);
        }

        Reply::Integer(self.storage.exists_many(args))
    }

    /// KEYS pattern
    fn cmd_keys(&self, verb: &Verb, args: &[String]) -> Reply {
        let [pattern] = args else {
            return Reply::wrong_arity(verb);
        };

        Reply::Keys(self.storage.keys(&KeyPattern::from(pattern.as_str())))
    }
}

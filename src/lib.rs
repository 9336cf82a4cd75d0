//! # linekv - A Small In-Memory Key-Value Store
//!
//! linekv keeps a string-to-string map in memory and serves it over a
//! plain-text, line-based TCP protocol. Any number of clients can connect
//! at once; every command runs atomically against the shared map.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                               linekv                                │
//! │                                                                     │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐              │
//! │  │ TCP Server  │───>│ Connection  │───>│  Command    │              │
//! │  │ (Listener)  │    │  Handler    │    │  Handler    │              │
//! │  └─────────────┘    └──────┬──────┘    └──────┬──────┘              │
//! │                            │                  │                     │
//! │                            ▼                  ▼                     │
//! │                     ┌─────────────┐    ┌─────────────────────────┐  │
//! │                     │ Line Parser │    │         Store           │  │
//! │                     └─────────────┘    │ RwLock<HashMap<..>>     │  │
//! │                                        └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use linekv::config::Framing;
//! use linekv::connection::ConnectionStats;
//! use linekv::server::accept_loop;
//! use linekv::storage::Store;
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let storage = Arc::new(Store::new());
//!     let stats = Arc::new(ConnectionStats::new());
//!     let listener = TcpListener::bind("0.0.0.0:6379").await?;
//!
//!     accept_loop(listener, storage, Framing::Line, stats).await;
//!     Ok(())
//! }
//! ```
//!
//! ## Supported Commands
//!
//! - `SET key value` -> `OK`
//! - `GET key` -> value or `(nil)`
//! - `DEL key [key ...]` -> `:<deleted>`
//! - `EXISTS key [key ...]` -> `:<present>`
//! - `KEYS pattern` -> `*` followed by the matching keys, one per line
//!
//! Verbs are case-sensitive. Anything else gets
//! `ERR unknown command '<verb>'`; a wrong argument count gets
//! `ERR wrong number of arguments for '<verb>' command`.
//!
//! ## Module Overview
//!
//! - [`protocol`]: command/reply types and line framing
//! - [`storage`]: the shared store and KEYS patterns
//! - [`commands`]: command dispatch and execution
//! - [`connection`]: per-client read/execute/reply loop
//! - [`server`]: accept loop
//! - [`config`]: command-line configuration

pub mod commands;
pub mod config;
pub mod connection;
pub mod protocol;
pub mod server;
pub mod storage;

// Re-export commonly used types for convenience
pub use commands::CommandHandler;
pub use config::{CliAction, Config, ConfigError, Framing};
pub use connection::{handle_connection, ConnectionStats};
pub use protocol::{Command, LineParser, ParseError, Reply, Verb};
pub use storage::{KeyPattern, Store, StoreStats};

/// The default port
pub const DEFAULT_PORT: u16 = 6379;

/// The default host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Version of linekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Command Handler Module
//!
//! This module implements the command processing layer.
//! It receives parsed commands, executes them against the store,
//! and returns the reply to write back.
//!
//! ## Architecture
//!
//! ```text
//! Client Line
//!       │
//!       ▼
//! ┌─────────────────┐
//! │  Line Parser    │  (protocol module)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CommandHandler  │  (this module)
//! │                 │
//! │  - Dispatch     │
//! │  - Validate     │
//! │  - Execute      │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Store       │  (storage module)
//! └─────────────────┘
//! ```
//!
//! Verbs are matched case-sensitively: `SET`, `GET`, `DEL`, `EXISTS`, `KEYS`.

pub mod handler;

pub use handler::CommandHandler;

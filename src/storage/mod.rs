//! Storage Module
//!
//! This module provides the shared, thread-safe string-to-string store and
//! the key patterns understood by `KEYS`.
//!
//! ## Features
//!
//! - **Single RwLock**: concurrent readers, exclusive writers
//! - **Atomic commands**: each operation takes the lock once, so multi-key
//!   DEL and EXISTS never interleave with other commands
//! - **Statistics**: per-operation counters
//!
//! ## Example
//!
//! ```
//! use linekv::storage::{KeyPattern, Store};
//! use std::sync::Arc;
//!
//! let store = Arc::new(Store::new());
//! store.set("a".to_string(), "1".to_string());
//! store.set("b".to_string(), "2".to_string());
//!
//! assert_eq!(store.exists_many(&["a", "b", "c"]), 2);
//! assert_eq!(store.keys(&KeyPattern::new("a")), vec!["a".to_string()]);
//! ```

pub mod engine;
pub mod pattern;

pub use engine::{Store, StoreStats};
pub use pattern::KeyPattern;

//! Thread-Safe Key-Value Store
//!
//! This module implements the shared store every connection operates on:
//! a `HashMap<String, String>` behind a single `RwLock`.
//!
//! ## Concurrency Model
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                    Store                      │
//! │   ┌───────────────────────────────────────┐   │
//! │   │  RwLock<HashMap<String, String>>      │   │
//! │   │                                       │   │
//! │   │  read:  GET, EXISTS, KEYS             │   │
//! │   │  write: SET, DEL                      │   │
//! │   └───────────────────────────────────────┘   │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Every public operation acquires the lock exactly once. Multi-key
//! operations (`delete_many`, `exists_many`) hold it across all of their
//! keys, so no other command can interleave with them.

use super::pattern::KeyPattern;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The key-value store shared by all client connections.
///
/// # Thread Safety
///
/// Wrap it in an `Arc` and hand a clone to each connection task.
///
/// # Example
///
/// ```
/// use linekv::storage::{KeyPattern, Store};
///
/// let store = Store::new();
/// store.set("name".to_string(), "Ariz".to_string());
/// assert_eq!(store.get("name"), Some("Ariz".to_string()));
///
/// assert_eq!(store.keys(&KeyPattern::All), vec!["name".to_string()]);
/// assert_eq!(store.delete_many(&["name", "missing"]), 1);
/// ```
pub struct Store {
    data: RwLock<HashMap<String, String>>,

    /// Statistics: total GET operations
    get_count: AtomicU64,

    /// Statistics: total SET operations
    set_count: AtomicU64,

    /// Statistics: total DEL operations
    del_count: AtomicU64,

    /// Statistics: total EXISTS operations
    exists_count: AtomicU64,

    /// Statistics: total KEYS operations
    keys_count: AtomicU64,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("keys", &self.len())
            .field("get_count", &self.get_count.load(Ordering::Relaxed))
            .field("set_count", &self.set_count.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            get_count: AtomicU64::new(0),
            set_count: AtomicU64::new(0),
            del_count: AtomicU64::new(0),
            exists_count: AtomicU64::new(0),
            keys_count: AtomicU64::new(0),
        }
    }

    // A poisoned lock only means another task panicked while holding it;
    // single HashMap calls cannot leave the map torn, so keep serving.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sets a key-value pair, overwriting any previous value.
    ///
    /// # Returns
    ///
    /// Returns `true` if a new key was created, `false` if an existing key was updated.
    pub fn set(&self, key: String, value: String) -> bool {
        self.set_count.fetch_add(1, Ordering::Relaxed);
        self.write().insert(key, value).is_none()
    }

    /// Gets the value for a key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.get_count.fetch_add(1, Ordering::Relaxed);
        self.read().get(key).cloned()
    }

    /// Deletes every listed key that is present, atomically.
    ///
    /// A key listed twice is deleted once.
    ///
    /// # Returns
    ///
    /// Returns the number of keys that were deleted.
    pub fn delete_many<K: AsRef<str>>(&self, keys: &[K]) -> u64 {
        self.del_count.fetch_add(1, Ordering::Relaxed);

        let mut data = self.write();
        keys.iter()
            .filter(|key| data.remove(key.as_ref()).is_some())
            .count() as u64
    }

    /// Counts how many of the listed keys exist, atomically.
    ///
    /// A present key listed twice is counted twice.
    pub fn exists_many<K: AsRef<str>>(&self, keys: &[K]) -> u64 {
        self.exists_count.fetch_add(1, Ordering::Relaxed);

        let data = self.read();
        keys.iter()
            .filter(|key| data.contains_key(key.as_ref()))
            .count() as u64
    }

    /// Returns all keys matching the pattern, sorted ascending.
    ///
    /// **Warning**: This operation scans all keys under the read lock.
    pub fn keys(&self, pattern: &KeyPattern) -> Vec<String> {
        self.keys_count.fetch_add(1, Ordering::Relaxed);

        let mut result: Vec<String> = match pattern {
            KeyPattern::All => self.read().keys().cloned().collect(),
            KeyPattern::Exact(key) => self
                .read()
                .get_key_value(key.as_str())
                .map(|(k, _)| k.clone())
                .into_iter()
                .collect(),
        };
        result.sort_unstable();
        result
    }

    /// Returns the number of keys in the store.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a statistics snapshot.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            keys: self.len() as u64,
            get_ops: self.get_count.load(Ordering::Relaxed),
            set_ops: self.set_count.load(Ordering::Relaxed),
            del_ops: self.del_count.load(Ordering::Relaxed),
            exists_ops: self.exists_count.load(Ordering::Relaxed),
            keys_ops: self.keys_count.load(Ordering::Relaxed),
        }
    }
}

/// Store statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of keys currently stored
    pub keys: u64,
    /// Total GET operations
    pub get_ops: u64,
    /// Total SET operations
    pub set_ops: u64,
    /// Total DEL operations
    pub del_ops: u64,
    /// Total EXISTS operations
    pub exists_ops: u64,
    /// Total KEYS operations
    pub keys_ops: u64,
}

//! Key patterns for the KEYS command.
//!
//! Only two forms are understood: `*` selects every key, anything else
//! selects the single key spelled exactly like the pattern. `user:*` is
//! therefore a literal key name, not a prefix match.

/// A parsed KEYS pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPattern {
    /// `*`
    All,
    /// Any other pattern, compared literally
    Exact(String),
}

impl KeyPattern {
    pub fn new(pattern: &str) -> Self {
        if pattern == "*" {
            KeyPattern::All
        } else {
            KeyPattern::Exact(pattern.to_string())
        }
    }

    #[inline]
    pub fn matches(&self, key: &str) -> bool {
        match self {
            KeyPattern::All => true,
            KeyPattern::Exact(exact) => exact == key,
        }
    }
}

impl From<&str> for KeyPattern {
    fn from(pattern: &str) -> Self {
        KeyPattern::new(pattern)
    }
}

use serde::{Deserialize, Serialize};

/// Sequential key generator for group instances within a document.
///
/// Lives inside the document and is persisted with it, so keys stay unique
/// across reloads and are never reused after a group is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGenerator {
    seed: String,
    count: u64,
}

impl KeyGenerator {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Resume a generator after `count` keys were already issued
    pub fn resume(seed: impl Into<String>, count: u64) -> Self {
        Self {
            seed: seed.into(),
            count,
        }
    }

    /// Generate next sequential key
    pub fn new_key(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of keys issued so far
    pub fn issued(&self) -> u64 {
        self.count
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new("group")
    }
}

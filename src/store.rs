//! Roster persistence through a key-value slot.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::StoreError;

/// Key under which the roster is stored.
pub const PLAYERS_KEY: &str = "players";

/// A string key-value store, such as browser local storage.
pub trait KeyValueStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Reads the roster from the `"players"` slot.
///
/// An empty slot yields an empty roster.
///
/// # Errors
///
/// Returns [`StoreError::Malformed`] if the slot does not hold a JSON list of
/// strings.
pub fn load_roster(store: &dyn KeyValueStore) -> Result<Vec<String>, StoreError> {
    store.get(PLAYERS_KEY).map_or_else(
        || Ok(Vec::new()),
        |raw| serde_json::from_str(&raw).map_err(|_| StoreError::Malformed),
    )
}

/// Writes the roster to the `"players"` slot as a JSON list of strings.
///
/// # Errors
///
/// Returns an error if the store rejects the write.
pub fn save_roster(store: &mut dyn KeyValueStore, roster: &[String]) -> Result<(), StoreError> {
    let raw = serde_json::to_string(roster).map_err(|_| StoreError::WriteFailed)?;
    store.set(PLAYERS_KEY, raw)
}

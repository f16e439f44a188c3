//! Named layouts mirrored into a string key-value store.
//!
//! The whole collection lives under one key as a JSON array and is rewritten
//! on every change. The in-memory copy is authoritative for the session; the
//! store is read once in [`SavedStates::open`].

use crate::error::StoreError;
use crate::scene::Scene;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Synchronous string store, e.g. browser `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store used by tests and headless hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut s = Self::default();
        s.entries.insert(key.to_string(), value.to_string());
        s
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A named snapshot. Serialized as `{"name": .., "state": {..}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub name: String,
    #[serde(rename = "state")]
    pub scene: Scene,
}

pub struct SavedStates<S: KeyValueStore> {
    store: S,
    key: String,
    states: Vec<SavedState>,
}

impl<S: KeyValueStore> SavedStates<S> {
    /// Reads `key` once. Missing or unreadable data yields an empty list.
    pub fn open(store: S, key: &str) -> Self {
        let states = match read_states(&store, key) {
            Ok(states) => states,
            Err(e) => {
                log::warn!("[store] ignoring saved layouts: {}", e);
                Vec::new()
            }
        };
        log::info!("[store] {} saved layout(s) under `{}`", states.len(), key);
        Self {
            store,
            key: key.to_string(),
            states,
        }
    }

    pub fn list(&self) -> &[SavedState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends `scene` under `name`. Blank names are rejected and nothing is
    /// written.
    pub fn save(&mut self, name: &str, scene: &Scene) -> bool {
        if name.trim().is_empty() {
            log::debug!("[store] rejected save with blank name");
            return false;
        }
        self.states.push(SavedState {
            name: name.to_string(),
            scene: scene.clone(),
        });
        log::info!("[store] saved `{}` ({} total)", name, self.states.len());
        self.flush();
        true
    }

    pub fn delete(&mut self, index: usize) -> Option<SavedState> {
        if index >= self.states.len() {
            return None;
        }
        let removed = self.states.remove(index);
        log::info!("[store] deleted `{}` at {}", removed.name, index);
        self.flush();
        Some(removed)
    }

    pub fn load(&self, index: usize) -> Option<&SavedState> {
        self.states.get(index)
    }

    fn flush(&mut self) {
        if let Err(e) = write_states(&mut self.store, &self.key, &self.states) {
            log::warn!("[store] {}", e);
        }
    }
}

fn read_states<S: KeyValueStore>(store: &S, key: &str) -> Result<Vec<SavedState>, StoreError> {
    match store.get(key)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

fn write_states<S: KeyValueStore>(
    store: &mut S,
    key: &str,
    states: &[SavedState],
) -> Result<(), StoreError> {
    let json = serde_json::to_string(states).map_err(|e| StoreError::write(key, e))?;
    store.set(key, &json)
}

//! A value persisted as a full snapshot under one key.

use crate::{KeyValueStore, StoreError};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::warn;

/// What is written under the key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotData<T> {
    /// The state itself.
    pub state: T,
    /// Write counter, starting at 1.
    pub version: u64,
    pub updated_at: DateTime<Utc>,
}

/// Owned state that writes itself back to a store after every change.
///
/// # Example
///
/// ```rust
/// use cryo_store::{MemoryStore, Persisted};
///
/// let mut counter: Persisted<u32, _> = Persisted::load(MemoryStore::new(), "counter").unwrap();
/// counter.update(|n| *n += 1).unwrap();
/// assert_eq!(*counter.get(), 1);
/// assert_eq!(counter.version(), 1);
/// ```
#[derive(Debug)]
pub struct Persisted<T, S> {
    store: S,
    key: &'static str,
    state: T,
    version: u64,
}

impl<T, S> Persisted<T, S>
where
    T: Serialize + DeserializeOwned + Default,
    S: KeyValueStore,
{
    /// Load the snapshot under `key`, or start from `T::default()`.
    ///
    /// A snapshot that no longer decodes is logged and replaced by the
    /// default on the next write.
    pub fn load(store: S, key: &'static str) -> Result<Self, StoreError> {
        let (state, version) = match store.get(key)? {
            Some(raw) => match serde_json::from_value::<SnapshotData<T>>(raw) {
                Ok(snapshot) => (snapshot.state, snapshot.version),
                Err(e) => {
                    warn!(key, error = %e, "discarding unreadable snapshot");
                    (T::default(), 0)
                }
            },
            None => (T::default(), 0),
        };

        Ok(Self {
            store,
            key,
            state,
            version,
        })
    }

    pub fn get(&self) -> &T {
        &self.state
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Number of writes so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a change and persist it.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> Result<R, StoreError> {
        let out = f(&mut self.state);
        self.save()?;
        Ok(out)
    }

    /// Apply a fallible change. State is only persisted on success; on
    /// failure the closure must leave the state as it found it.
    pub fn try_update<R, E>(&mut self, f: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let out = f(&mut self.state)?;
        self.save()?;
        Ok(out)
    }

    /// Replace the whole state.
    pub fn replace(&mut self, state: T) -> Result<(), StoreError> {
        self.state = state;
        self.save()
    }

    /// Back to the default state and remove the snapshot.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.state = T::default();
        self.version = 0;
        self.store.delete(self.key)
    }

    /// Write the current state under the key.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let snapshot = SnapshotData {
            state: &self.state,
            version: self.version + 1,
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&snapshot)?;
        self.store.set(self.key, value)?;
        self.version += 1;
        Ok(())
    }

    /// Give back the backend.
    pub fn into_store(self) -> S {
        self.store
    }
}

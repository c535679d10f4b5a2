use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;
use time::OffsetDateTime;

use crate::catalog::MenuItem;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}

/// Backing store for the serialized preference record. One named slot,
/// opaque string payload. The app backs this with a browser cookie;
/// tests use [`MemoryStorage`].
pub trait PrefsStorage {
    fn get(&self) -> Result<Option<String>, StorageError>;
    fn set(&self, value: &str) -> Result<(), StorageError>;
}

/// Accumulated interest signal for one browser. Grows with every tracked
/// view; never explicitly deleted. Unknown fields in an old persisted
/// record simply fall back to their defaults on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPrefs {
    #[serde(default)]
    pub liked_tags: HashMap<String, u32>,
    #[serde(default)]
    pub liked_categories: HashMap<String, u32>,
    #[serde(default)]
    pub veg_preferred: Option<bool>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_seen: Option<OffsetDateTime>,
}

impl UserPrefs {
    /// Fold one item view into the record. `veg_preferred` is monotonic:
    /// a vegetarian or vegan view sets it, nothing ever clears it.
    pub fn record_view(&mut self, item: &MenuItem, now: OffsetDateTime) {
        self.last_seen = Some(now);

        *self
            .liked_categories
            .entry(item.category.clone())
            .or_insert(0) += 1;

        for tag in &item.tags {
            *self.liked_tags.entry(tag.clone()).or_insert(0) += 1;
        }

        if (item.vegetarian || item.vegan) && self.veg_preferred != Some(true) {
            self.veg_preferred = Some(true);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.liked_tags.is_empty()
            && self.liked_categories.is_empty()
            && self.veg_preferred.is_none()
            && self.last_seen.is_none()
    }
}

/// Read/track facade over a [`PrefsStorage`]. Every failure path degrades
/// to the default record or a no-op; tracking is telemetry-grade state
/// and must never surface an error to the caller.
pub struct PrefsStore<S> {
    storage: S,
}

impl<S: PrefsStorage> PrefsStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Current record, or the all-empty default when the slot is absent,
    /// unreadable or holds something unparseable.
    pub fn read(&self) -> UserPrefs {
        let payload = match self.storage.get() {
            Ok(Some(payload)) => payload,
            Ok(None) => return UserPrefs::default(),
            Err(err) => {
                tracing::debug!(%err, "preference read failed, using defaults");
                return UserPrefs::default();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(prefs) => prefs,
            Err(err) => {
                tracing::debug!(%err, "corrupt preference record, using defaults");
                UserPrefs::default()
            }
        }
    }

    /// Record a view and persist the full record (overwrite, not patch).
    /// Returns the updated record; storage failures are swallowed.
    pub fn track_view(&self, item: &MenuItem, now: OffsetDateTime) -> UserPrefs {
        let mut prefs = self.read();
        prefs.record_view(item, now);

        match serde_json::to_string(&prefs) {
            Ok(payload) => {
                if let Err(err) = self.storage.set(&payload) {
                    tracing::debug!(%err, item = item.id, "preference write failed, view dropped");
                }
            }
            Err(err) => {
                tracing::debug!(%err, item = item.id, "preference serialization failed");
            }
        }

        prefs
    }
}

/// In-process storage slot. Used by tests and as the model for the
/// cookie-backed implementation in the web layer.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            slot: Mutex::new(initial),
        }
    }
}

impl PrefsStorage for MemoryStorage {
    fn get(&self) -> Result<Option<String>, StorageError> {
        match self.slot.lock() {
            Ok(slot) => Ok(slot.clone()),
            Err(_) => Err(StorageError::Unavailable("poisoned slot".to_owned())),
        }
    }

    fn set(&self, value: &str) -> Result<(), StorageError> {
        match self.slot.lock() {
            Ok(mut slot) => {
                *slot = Some(value.to_owned());
                Ok(())
            }
            Err(_) => Err(StorageError::Unavailable("poisoned slot".to_owned())),
        }
    }
}

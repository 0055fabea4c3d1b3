//! Key-value storage abstraction.
//!
//! Every manager persists its state as JSON blobs under fixed string keys.
//! The keys are partitioned per manager; no manager reads another's keys,
//! so cross-manager coordination only ever happens through method calls.

mod file;

pub use file::FileStore;

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage keys used by the progression engine.
pub mod keys {
    pub const ACHIEVEMENTS: &str = "delvers-descent-achievements";
    pub const ACHIEVEMENT_EVENTS: &str = "delvers-descent-achievement-events";
    pub const COLLECTED_ITEMS: &str = "collectedItems";
    pub const SET_COMPLETIONS: &str = "setCompletions";
    pub const UNLOCKED_REGIONS: &str = "unlockedRegions";
    pub const SELECTED_REGION: &str = "selectedRegion";
    pub const UNLOCKED_AVATAR_PARTS: &str = "unlockedAvatarParts";
    pub const EQUIPPED_AVATAR_PARTS: &str = "equippedAvatarParts";
}

/// String-keyed blob store. The store does not interpret payloads;
/// serialization is the caller's job.
pub trait KeyValueStore {
    /// Read the raw string stored under `key`, if any.
    fn get_raw(&self, key: &str) -> io::Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set_raw(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Load and deserialize the value under `key`, falling back to the type's
/// default when the key is missing, the read fails, or the payload is
/// malformed. Failures are logged, never propagated: a storage outage
/// resets state for the session instead of crashing the engine.
pub fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match store.get_raw(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!("failed to read `{key}`: {e}; starting from defaults");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("malformed data under `{key}`: {e}; starting from defaults");
            T::default()
        }
    }
}

/// Serialize `value` and write it under `key`. Write failures are logged
/// and swallowed; all persistence is best-effort single attempts.
pub fn persist<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            warn!("failed to serialize `{key}`: {e}");
            return;
        }
    };
    if let Err(e) = store.set_raw(key, &json) {
        warn!("failed to write `{key}`: {e}");
    }
}

/// In-memory store for tests and embedding hosts that bring their own
/// persistence. Clones share the same underlying map, so a test can keep a
/// handle to the entries a manager writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

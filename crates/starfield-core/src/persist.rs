//! The persisted blob: the star list plus flat metadata, stored as JSON under
//! a single key of whatever key/value storage the host provides.

use crate::error::StarfieldError;
use crate::particle::{Bounds, Particle};
use crate::settings::Settings;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedMeta {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub settings: Settings,
}

impl PersistedMeta {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub particles: Vec<Particle>,
    pub meta: PersistedMeta,
}

/// String key/value storage, e.g. the browser's localStorage.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StarfieldError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StarfieldError>;
}

pub fn save<S: Storage + ?Sized>(
    storage: &mut S,
    key: &str,
    state: &PersistedState,
) -> Result<(), StarfieldError> {
    let json = serde_json::to_string(state)
        .map_err(|e| StarfieldError::EncodeState(e.to_string()))?;
    storage.set_item(key, &json)
}

/// `Ok(None)` when nothing was stored; `CorruptPersistedState` when the blob
/// does not parse.
pub fn load<S: Storage + ?Sized>(
    storage: &S,
    key: &str,
) -> Result<Option<PersistedState>, StarfieldError> {
    match storage.get_item(key)? {
        None => Ok(None),
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
    }
}

/// In-process storage for hosts without a persistent store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: FnvHashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StarfieldError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StarfieldError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

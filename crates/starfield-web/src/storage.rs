use starfield_core::{Storage, StarfieldError};
use web_sys as web;

/// `window.localStorage`, which may be missing or throw (private browsing,
/// quota, sandboxed iframes).
pub struct LocalStorage {
    inner: Option<web::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("[persist] localStorage unavailable; state will not survive reloads");
        }
        Self { inner }
    }

    fn store(&self) -> Result<&web::Storage, StarfieldError> {
        self.inner
            .as_ref()
            .ok_or_else(|| StarfieldError::StorageUnavailable("no localStorage".into()))
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StarfieldError> {
        self.store()?
            .get_item(key)
            .map_err(|e| StarfieldError::StorageUnavailable(format!("{:?}", e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StarfieldError> {
        self.store()?
            .set_item(key, value)
            .map_err(|e| StarfieldError::StorageUnavailable(format!("{:?}", e)))
    }
}

use tactics_core::{KeyValueStore, StoreError};
use web_sys as web;

/// Browser `localStorage` as the saved-layout backing store. Private
/// browsing modes can refuse access; reads then fail and the board starts
/// with no saved layouts.
pub struct LocalStorage {
    storage: Option<web::Storage>,
}

impl LocalStorage {
    pub fn open(window: &web::Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("[store] localStorage unavailable; layouts will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web::Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage".into()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::write(key, format!("{:?}", e)))
    }
}

//! `localStorage` key-value backend

use jukebox_core::{JukeboxError, KeyValueStore, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// [`KeyValueStore`] over the window's `localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Open the current window's `localStorage`
    pub fn from_window() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| JukeboxError::storage("no window available"))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| JukeboxError::storage("localStorage is unavailable"))?;

        Ok(Self { storage })
    }

    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

fn js_error(value: JsValue) -> JukeboxError {
    JukeboxError::storage(format!("{:?}", value))
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

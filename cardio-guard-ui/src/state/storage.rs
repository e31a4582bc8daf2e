//! Browser Session Store
//!
//! `localStorage` behind the core's [`SessionStore`] trait. When storage is
//! disabled (private windows, sandboxed frames) the session lives in memory
//! for the lifetime of the page.

use cardio_guard::session::{MemoryStore, SessionStore, StoreError};

pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                web_sys::console::warn_1(&"localStorage unavailable, session will not persist".into());
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

fn unavailable(err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Unavailable(format!("{:?}", err))
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).map_err(unavailable),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            BrowserStore::Local(storage) => storage.set_item(key, value).map_err(unavailable),
            BrowserStore::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match self {
            BrowserStore::Local(storage) => storage.remove_item(key).map_err(unavailable),
            BrowserStore::Memory(store) => store.remove(key),
        }
    }
}

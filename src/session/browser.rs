//! Browser-backed session stores
//!
//! Page values live on `window` as `_<key>` properties written by the
//! server-rendered page. The cache is `window.sessionStorage`.

use serde::Serialize;
use wasm_bindgen::JsValue;

use super::{CacheStore, PageGlobals};
use crate::error::{SessionError, SessionResult};

fn page_key(key: &str) -> JsValue {
    JsValue::from_str(&format!("_{}", key))
}

/// Page-injected globals on `window`
pub struct BrowserPage {
    window: Option<web_sys::Window>,
}

impl BrowserPage {
    pub fn new() -> Self {
        Self { window: web_sys::window() }
    }
}

impl PageGlobals for BrowserPage {
    fn read(&self, key: &str) -> Option<serde_json::Value> {
        let window = self.window.as_ref()?;
        let raw = js_sys::Reflect::get(window, &page_key(key)).ok()?;
        if raw.is_undefined() || raw.is_null() {
            return None;
        }
        match serde_wasm_bindgen::from_value::<serde_json::Value>(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("[SESSION] page value '{}' is not JSON: {}", key, e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: serde_json::Value) -> SessionResult<()> {
        let unwritable = |reason: String| SessionError::Unwritable {
            key: key.to_string(),
            reason,
        };
        let window = self
            .window
            .as_ref()
            .ok_or_else(|| unwritable("no window".to_string()))?;
        let js_value = value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| unwritable(e.to_string()))?;
        js_sys::Reflect::set(window, &page_key(key), &js_value)
            .map_err(|e| unwritable(format!("{:?}", e)))?;
        Ok(())
    }
}

/// `window.sessionStorage`, absent in some privacy modes
pub struct BrowserCache {
    storage: Option<web_sys::Storage>,
}

impl BrowserCache {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            log::debug!("[SESSION] sessionStorage unavailable, cache disabled");
        }
        Self { storage }
    }
}

impl CacheStore for BrowserCache {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("[SESSION] cache write '{}' failed: {:?}", key, e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}

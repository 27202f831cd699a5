//! Session Accessor
//!
//! Typed access to the values the server injects into the page (current
//! user, tenant, settings) and to the tab-scoped string cache.
//!
//! Both backing stores are injected, so widgets and tests work against
//! in-memory stores without touching `window`.

mod browser;

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{SessionError, SessionResult};
use crate::models::{AppSettings, CurrentUser, Tenant};

pub use browser::{BrowserCache, BrowserPage};

/// Key/value store of page-injected JSON values
pub trait PageGlobals {
    /// Read a value; `None` when absent or null
    fn read(&self, key: &str) -> Option<serde_json::Value>;

    fn write(&self, key: &str, value: serde_json::Value) -> SessionResult<()>;
}

/// Tab-scoped string cache (vanishes when the tab closes)
pub trait CacheStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Session context handed to every widget
#[derive(Clone)]
pub struct Session {
    page: Rc<dyn PageGlobals>,
    cache: Rc<dyn CacheStore>,
}

impl Session {
    pub fn new(page: Rc<dyn PageGlobals>, cache: Rc<dyn CacheStore>) -> Self {
        Self { page, cache }
    }

    /// Session over the live browser page
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserPage::new()), Rc::new(BrowserCache::new()))
    }

    /// Authenticated viewer, `None` when anonymous.
    ///
    /// A separately injected `email` value takes precedence over the
    /// user's own email field.
    pub fn current_user(&self) -> Option<CurrentUser> {
        let mut user = match self.get::<CurrentUser>("user") {
            Ok(user) => user?,
            Err(err) => {
                log::warn!("[SESSION] {}", err);
                return None;
            }
        };
        if let Ok(Some(email)) = self.get::<String>("email") {
            user.email = Some(email);
        }
        Some(user)
    }

    pub fn current_tenant(&self) -> SessionResult<Tenant> {
        self.require("tenant")
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|user| user.role.is_admin())
    }

    pub fn is_collaborator(&self) -> bool {
        self.current_user().is_some_and(|user| user.role.is_collaborator())
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> SessionResult<()> {
        let json = serde_json::to_value(value).map_err(|e| SessionError::Unwritable {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.page.write(key, json)
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> SessionResult<Option<T>> {
        match self.page.read(key) {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| SessionError::Malformed {
                    key: key.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    /// Like [`Session::get`], treating a missing value as an empty list
    pub fn get_array<T: DeserializeOwned>(&self, key: &str) -> SessionResult<Vec<T>> {
        Ok(self.get::<Vec<T>>(key)?.unwrap_or_default())
    }

    pub fn app_settings(&self) -> SessionResult<AppSettings> {
        self.require("settings")
    }

    pub fn is_single_host_mode(&self) -> SessionResult<bool> {
        Ok(self.app_settings()?.is_single_host_mode())
    }

    pub fn is_production(&self) -> SessionResult<bool> {
        Ok(self.app_settings()?.is_production())
    }

    pub fn set_cache(&self, key: &str, value: &str) {
        self.cache.set(key, value);
    }

    pub fn get_cache(&self, key: &str) -> Option<String> {
        self.cache.get(key)
    }

    pub fn remove_cache(&self, keys: &[&str]) {
        for key in keys {
            self.cache.remove(key);
        }
    }

    fn require<T: DeserializeOwned>(&self, key: &str) -> SessionResult<T> {
        self.get(key)?.ok_or_else(|| SessionError::Missing(key.to_string()))
    }
}

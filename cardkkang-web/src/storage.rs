//! `localStorage` backend for the core counter and theme stores.

use cardkkang_game::KeyValueStore;
use thiserror::Error;
use web_sys::Storage;

use crate::dom;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebStorageError {
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("localStorage call failed: {0}")]
    Js(String),
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns [`WebStorageError::Unavailable`] outside a browser or when the
/// page may not use storage, and [`WebStorageError::Js`] if the lookup throws.
pub fn local_storage() -> Result<Storage, WebStorageError> {
    let win = dom::window().ok_or(WebStorageError::Unavailable)?;
    win.local_storage()
        .map_err(|err| WebStorageError::Js(dom::js_error_message(&err)))?
        .ok_or(WebStorageError::Unavailable)
}

/// Stateless handle; every call looks `localStorage` up again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebStorage;

impl WebStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl KeyValueStore for WebStorage {
    type Error = WebStorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        local_storage()?
            .get_item(key)
            .map_err(|err| WebStorageError::Js(dom::js_error_message(&err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| WebStorageError::Js(dom::js_error_message(&err)))
    }
}

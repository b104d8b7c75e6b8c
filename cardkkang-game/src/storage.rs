//! Key-value storage abstraction and the namespaced key scheme.

use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

use crate::constants::{STORAGE_NAMESPACE, STORAGE_VERSION};

/// Trait for abstracting string key-value persistence.
/// Platform-specific implementations should provide this
pub trait KeyValueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    type Error = T::Error;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set_item(key, value)
    }
}

/// In-memory store; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`, bypassing the trait.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Seed a raw value, e.g. a corrupt entry in tests.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.items.borrow_mut().insert(key.into(), value.into());
    }

    /// All keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.items.borrow().keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.insert_raw(key, value);
        Ok(())
    }
}

/// Builds the namespaced storage keys.
///
/// `<ns>:<version>:total`, `<ns>:<version>:day:<YYYY-MM-DD>` and `<ns>:theme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    namespace: String,
    version: String,
}

impl StorageKeys {
    #[must_use]
    pub fn new(namespace: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            version: version.into(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn total_key(&self) -> String {
        format!("{}:{}:total", self.namespace, self.version)
    }

    #[must_use]
    pub fn day_key(&self, date: NaiveDate) -> String {
        format!(
            "{}:{}:day:{}",
            self.namespace,
            self.version,
            date.format("%Y-%m-%d")
        )
    }

    /// Theme is deliberately unversioned.
    #[must_use]
    pub fn theme_key(&self) -> String {
        format!("{}:theme", self.namespace)
    }

    /// Recover the date from a daily key of this namespace and version.
    #[must_use]
    pub fn parse_day_key(&self, key: &str) -> Option<NaiveDate> {
        let prefix = format!("{}:{}:day:", self.namespace, self.version);
        let date = key.strip_prefix(&prefix)?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(STORAGE_NAMESPACE, STORAGE_VERSION)
    }
}

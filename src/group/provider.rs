//! Sources for the external switch that enables test groups.
//!
//! A [`ConfigProvider`] answers "what is the value stored under this key?".
//! The group gate asks it once per decision and never writes to it.
//! Ownership of the value stays with whoever sets up the test run:
//! the process environment ([`EnvProvider`]), an in-memory map
//! ([`MapProvider`]) or any closure.

use std::{
    collections::{BTreeMap, HashMap},
    env,
    sync::Arc,
};

use parking_lot::RwLock;

/// A read only key-value source for enabled test groups.
///
/// Implementations must be cheap to query, the gate calls [`value`](Self::value)
/// for every test it decides on.
pub trait ConfigProvider {
    /// Return the raw value stored under `key`, if any.
    fn value(&self, key: &str) -> Option<String>;
}

/// Reads enabled groups from process environment variables.
///
/// Values that are not valid unicode are treated as absent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvProvider;

impl ConfigProvider for EnvProvider {
    fn value(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// An in-memory provider that can be shared and changed while tests run.
///
/// Clones share the same storage, so a test (or a setup step) may flip a
/// switch that later decisions will observe.
/// Tests doing this must not run concurrently with other gated tests.
#[derive(Debug, Default, Clone)]
pub struct MapProvider(Arc<RwLock<HashMap<String, String>>>);

impl MapProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.0.write().insert(key.into(), value.into());
    }

    pub fn clear(&self, key: &str) {
        self.0.write().remove(key);
    }

    pub fn clear_all(&self) {
        self.0.write().clear();
    }
}

impl ConfigProvider for MapProvider {
    fn value(&self, key: &str) -> Option<String> {
        self.0.read().get(key).cloned()
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigProvider for BTreeMap<String, String> {
    fn value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<F> ConfigProvider for F
where
    F: Fn(&str) -> Option<String>,
{
    fn value(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for Arc<P> {
    fn value(&self, key: &str) -> Option<String> {
        P::value(self, key)
    }
}

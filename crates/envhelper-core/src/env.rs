//! Sources of environment variables.

use std::collections::HashMap;
use std::env::{self, VarError};

/// Read-only view of an environment variable table.
///
/// Does **not** require `Send + Sync`; add the bounds at the call site when a
/// source has to cross threads.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

/// Zero-sized type that delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        env::var(key)
    }
}

/// In-memory environment, for tests and for callers that snapshot their
/// configuration up front.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ReadEnv for MapEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

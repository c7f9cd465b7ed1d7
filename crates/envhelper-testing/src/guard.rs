//! Scoped changes to the process environment.

use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets and unsets process environment variables, restoring every touched
/// variable when dropped.
///
/// Holds a process-wide lock for its whole lifetime, so tests that mutate the
/// environment through `EnvGuard` never interleave.
///
/// # Example
/// ```
/// use envhelper_testing::EnvGuard;
///
/// let mut guard = EnvGuard::new();
/// guard.set("ENVHELPER_DOC_VAR", "1");
/// assert_eq!(std::env::var("ENVHELPER_DOC_VAR").as_deref(), Ok("1"));
/// drop(guard);
/// assert!(std::env::var("ENVHELPER_DOC_VAR").is_err());
/// ```
pub struct EnvGuard {
    saved: Vec<(String, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub fn new() -> Self {
        // A test that panicked while holding the lock already restored its vars on unwind.
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        Self {
            saved: Vec::new(),
            _lock: lock,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.remember(key);
        // SAFETY: every writer goes through `ENV_LOCK`, held by `self`.
        unsafe { std::env::set_var(key, value) };
        self
    }

    pub fn unset(&mut self, key: &str) -> &mut Self {
        self.remember(key);
        // SAFETY: every writer goes through `ENV_LOCK`, held by `self`.
        unsafe { std::env::remove_var(key) };
        self
    }

    fn remember(&mut self, key: &str) {
        if self.saved.iter().all(|(saved, _)| saved != key) {
            self.saved.push((key.to_owned(), std::env::var_os(key)));
        }
    }
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, original) in self.saved.drain(..).rev() {
            // SAFETY: the lock is released only after this body returns.
            unsafe {
                match original {
                    Some(value) => std::env::set_var(&key, value),
                    None => std::env::remove_var(&key),
                }
            }
        }
    }
}

//! Process-wide memoization of defaulted lookups.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, OnceLock, PoisonError};

static GLOBAL: LazyLock<EnvCache> = LazyLock::new(EnvCache::new);

/// Identity of one memoized lookup: variable name, value type, and the
/// rendered default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Binding {
    name: String,
    ty: TypeId,
    default: String,
}

/// Results of first evaluations, keyed by binding.
///
/// Each binding owns a `OnceLock` cell. The map lock is held only to find or
/// create the cell, so concurrent first callers of one binding see one
/// environment read, while unrelated bindings (including ones looked up from
/// inside a parse) evaluate independently.
#[derive(Default)]
pub struct EnvCache {
    slots: Mutex<HashMap<Binding, Arc<dyn Any + Send + Sync>>>,
}

impl EnvCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache shared by the whole process.
    pub fn global() -> &'static EnvCache {
        &GLOBAL
    }

    /// Return the cached value for `(name, T, default)`, evaluating `init` on
    /// the first call only.
    pub fn get_or_init<T, F>(&self, name: &str, default: &str, init: F) -> T
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let key = Binding {
            name: name.to_owned(),
            ty: TypeId::of::<T>(),
            default: default.to_owned(),
        };
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            let slot = slots
                .entry(key)
                .or_insert_with(|| Arc::new(OnceLock::<T>::new()) as Arc<dyn Any + Send + Sync>);
            Arc::clone(slot)
        };
        match slot.downcast_ref::<OnceLock<T>>() {
            Some(cell) => cell.get_or_init(init).clone(),
            // `Binding` carries `TypeId::of::<T>()`, so the cell always matches.
            None => init(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for EnvCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvCache").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_evaluate_once_per_binding() {
        let cache = EnvCache::new();
        let mut calls = 0;
        let first = cache.get_or_init("PORT", "3112", || {
            calls += 1;
            8080_u16
        });
        let second = cache.get_or_init("PORT", "3112", || {
            calls += 1;
            9090_u16
        });
        assert_eq!(first, 8080);
        assert_eq!(second, 8080);
        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn should_keep_bindings_with_different_defaults_apart() {
        let cache = EnvCache::new();
        let a = cache.get_or_init("PORT", "1", || 1_u16);
        let b = cache.get_or_init("PORT", "2", || 2_u16);
        assert_eq!((a, b), (1, 2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn should_keep_bindings_with_different_types_apart() {
        let cache = EnvCache::new();
        let int = cache.get_or_init("PATH", "a", || 1_i32);
        let text = cache.get_or_init("PATH", "a", || "x".to_owned());
        assert_eq!(int, 1);
        assert_eq!(text, "x");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn should_allow_lookups_from_inside_an_evaluation() {
        let cache = EnvCache::new();
        let outer = cache.get_or_init("SCALED", "1", || {
            let factor = cache.get_or_init("SCALE_FACTOR", "2", || 2_u32);
            10 * factor
        });
        assert_eq!(outer, 20);
        assert_eq!(cache.get_or_init("SCALE_FACTOR", "2", || 0_u32), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn should_start_empty() {
        assert!(EnvCache::new().is_empty());
    }
}

//! Coarse-grained locking for callers that share one store across threads.

use std::sync::{Arc, PoisonError, RwLock};

use crate::store::BeanBagStore;

/// A [`BeanBagStore`] behind a single reader/writer lock.
///
/// Each closure runs under the lock for its whole duration, so a
/// lookup-then-mutate sequence inside one `write` call is atomic.
#[derive(Debug, Clone, Default)]
pub struct SharedBeanBagStore {
    inner: Arc<RwLock<BeanBagStore>>,
}

impl SharedBeanBagStore {
    pub fn new(store: BeanBagStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run a read-only query.
    pub fn read<R>(&self, f: impl FnOnce(&BeanBagStore) -> R) -> R {
        // Store operations never leave partial state, so a poisoned lock is still consistent.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run a mutating operation.
    pub fn write<R>(&self, f: impl FnOnce(&mut BeanBagStore) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> BeanBagStore {
        self.read(Clone::clone)
    }
}

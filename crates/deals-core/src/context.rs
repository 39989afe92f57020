//! Shared handle over one wizard's form record.
//!
//! The context is a pure value holder with change notification: it never
//! validates. Every mutation goes through [`FormContext::patch`], which merges
//! the patch into the existing record and then notifies subscribers with the
//! updated snapshot.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use deals_domain::Patchable;

pub type SubscriptionId = u64;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    state: T,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: SubscriptionId,
}

/// Cloneable handle; clones observe and mutate the same record.
pub struct FormContext<T> {
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T> Clone for FormContext<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> FormContext<T>
where
    T: Patchable + Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                state: initial,
                listeners: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Snapshot of the current record.
    pub fn get_state(&self) -> T {
        self.read().state.clone()
    }

    /// Runs `f` against the current record without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.read().state)
    }

    /// Shallow-merges `patch` and notifies subscribers. Returns `false` for an
    /// empty patch, which neither mutates nor notifies.
    pub fn patch(&self, patch: T::Patch) -> bool {
        if T::is_empty_patch(&patch) {
            return false;
        }

        let (snapshot, listeners) = {
            let mut inner = self.write();
            inner.state.merge(patch);
            let listeners: Vec<Listener<T>> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            (inner.state.clone(), listeners)
        };

        for listener in listeners {
            listener(&snapshot);
        }
        true
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.write();
        let before = inner.listeners.len();
        inner.listeners.retain(|(candidate, _)| *candidate != id);
        inner.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.read().listeners.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> fmt::Debug for FormContext<T>
where
    T: Patchable + Clone + Send + Sync + fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        f.debug_struct("FormContext")
            .field("state", &inner.state)
            .field("subscribers", &inner.listeners.len())
            .finish()
    }
}

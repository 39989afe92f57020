//! Single-shot submission of the finished form.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use deals_domain::{BrandProfile, ListingId};

use crate::error::SubmitError;
use crate::flow::WizardFlow;
use crate::store::ListingStore;
use crate::surface::{Notice, WizardSurface};

/// The "submitting" flag shared by the sequencer and the coordinator.
///
/// Not a lock: a second caller is turned away rather than queued.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    flag: Arc<AtomicBool>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    pub fn try_acquire(&self) -> Option<SubmissionGuard> {
        self.flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmissionGuard {
                flag: Arc::clone(&self.flag),
            })
    }
}

/// Clears the submitting flag when dropped.
#[derive(Debug)]
pub struct SubmissionGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct SubmissionCoordinator<F: WizardFlow> {
    store: Arc<dyn ListingStore>,
    surface: Arc<dyn WizardSurface>,
    gate: SubmissionGate,
    brand: BrandProfile,
    _flow: PhantomData<fn() -> F>,
}

impl<F: WizardFlow> SubmissionCoordinator<F> {
    pub fn new(
        store: Arc<dyn ListingStore>,
        surface: Arc<dyn WizardSurface>,
        gate: SubmissionGate,
        brand: BrandProfile,
    ) -> Self {
        Self {
            store,
            surface,
            gate,
            brand,
            _flow: PhantomData,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_submitting()
    }

    /// Serializes `state` and performs one store write.
    ///
    /// Emits exactly one notification per accepted call. A call made while
    /// another is in flight returns [`SubmitError::InProgress`] without
    /// writing or notifying. The caller's form state is never modified.
    pub async fn submit(&self, state: &F::State) -> Result<ListingId, SubmitError> {
        let Some(_guard) = self.gate.try_acquire() else {
            tracing::warn!(flow = F::LABEL, "submission ignored: already submitting");
            return Err(SubmitError::InProgress);
        };

        let record = F::build_record(state, &self.brand);
        let title = record.title().to_string();
        tracing::debug!(flow = F::LABEL, %title, "submitting listing");

        match self.store.submit_listing(record).await {
            Ok(id) => {
                tracing::info!(flow = F::LABEL, %id, %title, "listing created");
                self.surface.notify(Notice::success(F::SUCCESS_MESSAGE));
                Ok(id)
            }
            Err(err) => {
                tracing::warn!(flow = F::LABEL, error = %err, "listing submission failed");
                self.surface.notify(Notice::error(F::FAILURE_MESSAGE));
                Err(SubmitError::Store(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_admits_one_holder_at_a_time() {
        let gate = SubmissionGate::new();
        let guard = gate.try_acquire().expect("first acquire");
        assert!(gate.is_submitting());
        assert!(gate.clone().try_acquire().is_none());
        drop(guard);
        assert!(!gate.is_submitting());
        assert!(gate.try_acquire().is_some());
    }
}

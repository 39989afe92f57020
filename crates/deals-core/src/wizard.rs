//! One mounted wizard: form record, sequencer and coordinator wired to the
//! same submission gate.

use std::sync::Arc;

use deals_domain::{BrandProfile, ListingId, Patchable};

use crate::context::FormContext;
use crate::error::{SubmitError, ValidationError};
use crate::flow::{validate_all_steps, WizardFlow};
use crate::sequencer::StepSequencer;
use crate::step::WizardStep;
use crate::store::ListingStore;
use crate::submission::{SubmissionCoordinator, SubmissionGate};
use crate::surface::{Notice, WizardSurface};

/// What `submit` checks beyond being on the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPolicy {
    /// Trust the per-step checks already made; a `jump_to` may skip them.
    #[default]
    TrustCurrentStep,
    /// Re-run every step's validator before writing.
    ValidateAllSteps,
}

pub struct Wizard<F: WizardFlow> {
    form: FormContext<F::State>,
    sequencer: StepSequencer<F>,
    coordinator: SubmissionCoordinator<F>,
    gate: SubmissionGate,
    surface: Arc<dyn WizardSurface>,
    policy: SubmitPolicy,
}

impl<F: WizardFlow> Wizard<F> {
    pub fn new(
        store: Arc<dyn ListingStore>,
        surface: Arc<dyn WizardSurface>,
        brand: BrandProfile,
    ) -> Self {
        Self::prefilled(F::State::default(), store, surface, brand)
    }

    pub fn prefilled(
        initial: F::State,
        store: Arc<dyn ListingStore>,
        surface: Arc<dyn WizardSurface>,
        brand: BrandProfile,
    ) -> Self {
        let form = FormContext::new(initial);
        let gate = SubmissionGate::new();
        let sequencer = StepSequencer::new(form.clone(), Arc::clone(&surface), gate.clone());
        let coordinator =
            SubmissionCoordinator::new(store, Arc::clone(&surface), gate.clone(), brand);
        Self {
            form,
            sequencer,
            coordinator,
            gate,
            surface,
            policy: SubmitPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SubmitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    pub fn form(&self) -> &FormContext<F::State> {
        &self.form
    }

    pub fn state(&self) -> F::State {
        self.form.get_state()
    }

    pub fn patch(&self, patch: <F::State as Patchable>::Patch) -> bool {
        self.form.patch(patch)
    }

    pub fn current(&self) -> F::Step {
        self.sequencer.current()
    }

    pub fn current_number(&self) -> usize {
        self.sequencer.current_number()
    }

    pub fn total_steps(&self) -> usize {
        self.sequencer.total_steps()
    }

    pub fn is_terminal(&self) -> bool {
        self.sequencer.is_terminal()
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_submitting()
    }

    pub fn go_next(&mut self) -> bool {
        self.sequencer.go_next()
    }

    pub fn go_prev(&mut self) -> bool {
        self.sequencer.go_prev()
    }

    pub fn jump_to(&mut self, step: F::Step) -> bool {
        self.sequencer.jump_to(step)
    }

    pub fn jump_to_number(&mut self, number: usize) -> bool {
        self.sequencer.jump_to_number(number)
    }

    pub fn validate_all(&self) -> Result<(), (F::Step, ValidationError)> {
        self.sequencer.validate_all()
    }

    /// Assistive auto-fill: merge `patch`, then jump straight to review.
    /// Refused without touching the form while a submission is in flight.
    pub fn autofill(&mut self, patch: <F::State as Patchable>::Patch) -> bool {
        if self.is_submitting() {
            tracing::debug!(flow = F::LABEL, "auto-fill refused while submitting");
            return false;
        }
        self.form.patch(patch);
        self.sequencer.jump_to(F::Step::LAST)
    }

    /// Submits the current form record. Only available on the last step.
    pub async fn submit(&self) -> Result<ListingId, SubmitError> {
        if !self.sequencer.is_terminal() {
            return Err(SubmitError::NotOnTerminalStep {
                current: self.sequencer.current_number(),
                total: self.sequencer.total_steps(),
            });
        }
        if self.is_submitting() {
            return Err(SubmitError::InProgress);
        }

        let state = self.form.get_state();
        if self.policy == SubmitPolicy::ValidateAllSteps {
            if let Err((step, error)) = validate_all_steps::<F>(&state) {
                tracing::warn!(
                    flow = F::LABEL,
                    step = step.number(),
                    field = error.field,
                    "submission blocked by incomplete step"
                );
                self.surface.notify(Notice::error(error.message.clone()));
                return Err(SubmitError::IncompleteStep {
                    step: step.number(),
                    title: step.title(),
                    error,
                });
            }
        }

        self.coordinator.submit(&state).await
    }
}

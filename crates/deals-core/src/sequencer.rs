//! Tracks the active step and gates forward movement through the validator.

use std::sync::Arc;

use crate::context::FormContext;
use crate::error::ValidationError;
use crate::flow::{validate_all_steps, WizardFlow};
use crate::step::WizardStep;
use crate::submission::SubmissionGate;
use crate::surface::{Notice, WizardSurface};

/// States are the steps `1..=N`; the first step is initial and the last
/// enables submission. No step is absorbing.
pub struct StepSequencer<F: WizardFlow> {
    current: F::Step,
    form: FormContext<F::State>,
    surface: Arc<dyn WizardSurface>,
    gate: SubmissionGate,
}

impl<F: WizardFlow> StepSequencer<F> {
    pub fn new(
        form: FormContext<F::State>,
        surface: Arc<dyn WizardSurface>,
        gate: SubmissionGate,
    ) -> Self {
        Self {
            current: F::Step::FIRST,
            form,
            surface,
            gate,
        }
    }

    pub fn current(&self) -> F::Step {
        self.current
    }

    pub fn current_number(&self) -> usize {
        self.current.number()
    }

    pub fn total_steps(&self) -> usize {
        F::Step::count()
    }

    pub fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }

    pub fn form(&self) -> &FormContext<F::State> {
        &self.form
    }

    /// Validates the current step against the live form record and advances
    /// on success. On failure the first error is surfaced and the step is
    /// unchanged. Always false on the last step or while submitting.
    pub fn go_next(&mut self) -> bool {
        if self.navigation_locked() {
            return false;
        }
        let step = self.current;
        let Some(next) = step.next() else {
            return false;
        };

        if let Err(error) = self.form.with_state(|state| F::validate(step, state)) {
            tracing::debug!(
                flow = F::LABEL,
                step = step.number(),
                field = error.field,
                "step transition rejected"
            );
            self.surface.notify(Notice::error(error.message));
            return false;
        }

        self.current = next;
        tracing::debug!(flow = F::LABEL, from = step.number(), to = next.number(), "advanced");
        self.surface.scroll_to_top();
        true
    }

    /// Moves back one step without validation.
    pub fn go_prev(&mut self) -> bool {
        if self.navigation_locked() {
            return false;
        }
        let Some(previous) = self.current.previous() else {
            return false;
        };
        tracing::debug!(
            flow = F::LABEL,
            from = self.current.number(),
            to = previous.number(),
            "went back"
        );
        self.current = previous;
        self.surface.scroll_to_top();
        true
    }

    /// Sets the step unconditionally, bypassing validation. Intended for the
    /// assistive auto-fill path, which is trusted to have populated the form.
    pub fn jump_to(&mut self, step: F::Step) -> bool {
        if self.navigation_locked() {
            return false;
        }
        tracing::info!(
            flow = F::LABEL,
            from = self.current.number(),
            to = step.number(),
            "jumped without validation"
        );
        self.current = step;
        true
    }

    /// Like [`Self::jump_to`] but by number; numbers outside `1..=N` are
    /// rejected.
    pub fn jump_to_number(&mut self, number: usize) -> bool {
        match F::Step::from_number(number) {
            Some(step) => self.jump_to(step),
            None => false,
        }
    }

    /// Runs every step's validator against the current form record.
    pub fn validate_all(&self) -> Result<(), (F::Step, ValidationError)> {
        self.form.with_state(validate_all_steps::<F>)
    }

    fn navigation_locked(&self) -> bool {
        if self.gate.is_submitting() {
            tracing::debug!(flow = F::LABEL, "navigation disabled while submitting");
            true
        } else {
            false
        }
    }
}

//! Drives a [`Wizard`] from the terminal: one screen per step, then review
//! and submit.

use std::fmt;

use deals_core::{SubmitError, Wizard, WizardStep};
use deals_domain::{ListingId, Patchable};

use crate::cli::fields::InteractiveFlow;
use crate::cli::output;
use crate::cli::prompter::FieldPrompter;
use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Submitted(ListingId),
    Cancelled,
    /// The submission was refused and the wizard has already told the user.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Continue,
    Back,
    Submit,
    Cancel,
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StepAction::Continue => "Continue",
            StepAction::Back => "Back",
            StepAction::Submit => "Submit",
            StepAction::Cancel => "Cancel",
        };
        f.write_str(label)
    }
}

fn actions_for<S: WizardStep>(step: S) -> &'static [StepAction] {
    if step.is_terminal() {
        &[StepAction::Submit, StepAction::Back, StepAction::Cancel]
    } else if step.previous().is_none() {
        &[StepAction::Continue, StepAction::Cancel]
    } else {
        &[StepAction::Continue, StepAction::Back, StepAction::Cancel]
    }
}

fn choose_action<S: WizardStep>(
    prompter: &mut dyn FieldPrompter,
    step: S,
) -> Result<StepAction, CliError> {
    let actions = actions_for(step);
    let items: Vec<String> = actions.iter().map(ToString::to_string).collect();
    let index = prompter.select("Next", &items, 0)?;
    Ok(actions.get(index).copied().unwrap_or(StepAction::Cancel))
}

fn print_header<F: InteractiveFlow>(wizard: &Wizard<F>) {
    let step = wizard.current();
    output::section(format!(
        "{}: step {} of {}, {}",
        F::HEADING,
        wizard.current_number(),
        wizard.total_steps(),
        step.title()
    ));
}

fn print_review<F: InteractiveFlow>(wizard: &Wizard<F>) {
    for line in F::review_lines(&wizard.state()) {
        output::detail(line);
    }
}

/// Runs the wizard until the listing is submitted or the user cancels.
///
/// A failed store write leaves the user on the review step with the form
/// intact so they can retry.
pub async fn run_interactive<F: InteractiveFlow>(
    wizard: &mut Wizard<F>,
    prompter: &mut dyn FieldPrompter,
) -> Result<RunOutcome, CliError> {
    loop {
        let step = wizard.current();
        print_header(wizard);
        if step.is_terminal() {
            print_review(wizard);
        } else {
            let patch = F::prompt_step(step, &wizard.state(), prompter)?;
            wizard.patch(patch);
        }

        match choose_action(prompter, step)? {
            StepAction::Continue => {
                wizard.go_next();
            }
            StepAction::Back => {
                wizard.go_prev();
            }
            StepAction::Submit => match wizard.submit().await {
                Ok(id) => return Ok(RunOutcome::Submitted(id)),
                Err(err @ (SubmitError::Store(_) | SubmitError::IncompleteStep { .. })) => {
                    tracing::debug!(error = %err, "submission refused, staying on review");
                }
                Err(err) => output::warning(err),
            },
            StepAction::Cancel => {
                if prompter.confirm("Discard this listing?", false)? {
                    output::info("Listing discarded.");
                    return Ok(RunOutcome::Cancelled);
                }
            }
        }
    }
}

/// Applies an auto-fill patch and lands on review. With `submit_now` the
/// listing is submitted straight away; otherwise the interactive loop takes
/// over from the review step.
pub async fn run_autofill<F: InteractiveFlow>(
    wizard: &mut Wizard<F>,
    patch: <F::State as Patchable>::Patch,
    submit_now: bool,
    prompter: &mut dyn FieldPrompter,
) -> Result<RunOutcome, CliError> {
    wizard.autofill(patch);
    if !submit_now {
        return run_interactive(wizard, prompter).await;
    }

    print_header(wizard);
    print_review(wizard);
    match wizard.submit().await {
        Ok(id) => Ok(RunOutcome::Submitted(id)),
        Err(err @ (SubmitError::Store(_) | SubmitError::IncompleteStep { .. })) => {
            tracing::debug!(error = %err, "auto-filled submission refused");
            Ok(RunOutcome::Failed)
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use deals_core::{
        BrandDealFlow, DiscountDealFlow, ListingStore, MockBehavior, MockListingStore,
        RecordingSurface, SubmitPolicy,
    };
    use deals_domain::{BrandDealPatch, BrandProfile, ListingRecord};

    use super::*;
    use crate::cli::prompter::{ScriptedAnswer, ScriptedPrompter};

    fn text(value: &str) -> ScriptedAnswer {
        ScriptedAnswer::Text(value.to_string())
    }

    fn choose(label: &str) -> ScriptedAnswer {
        ScriptedAnswer::Choose(label.to_string())
    }

    fn wizard<F: InteractiveFlow>(
        store: Arc<MockListingStore>,
    ) -> (Wizard<F>, Arc<RecordingSurface>) {
        let surface = Arc::new(RecordingSurface::new());
        let store: Arc<dyn ListingStore> = store;
        let wizard = Wizard::new(store, surface.clone(), BrandProfile::new("Acme", ""));
        (wizard, surface)
    }

    fn brand_deal_script() -> Vec<ScriptedAnswer> {
        vec![
            // General info
            text("Summer Promo"),
            choose("Technology"),
            ScriptedAnswer::Keep,
            choose("Continue"),
            // Collaboration
            choose("Instagram"),
            ScriptedAnswer::Keep,
            ScriptedAnswer::Keep,
            ScriptedAnswer::Keep,
            choose("Continue"),
            // Requirements
            text("123 Main St"),
            text("2031-07-01"),
            ScriptedAnswer::Keep,
            ScriptedAnswer::Keep,
            ScriptedAnswer::Keep,
            ScriptedAnswer::Keep,
            choose("Continue"),
            // Brief
            text("Do a reel"),
            ScriptedAnswer::Keep,
            text("sale #deal"),
            ScriptedAnswer::Keep,
            text("Do this; Don't do that"),
            choose("Continue"),
            // Guests
            choose("1 guest(s)"),
            ScriptedAnswer::Keep,
            choose("Continue"),
            // Review
            choose("Submit"),
        ]
    }

    #[tokio::test]
    async fn interactive_run_submits_brand_deal() {
        let store = Arc::new(MockListingStore::new());
        let (mut wizard, surface) = wizard::<BrandDealFlow>(store.clone());
        let mut prompter = ScriptedPrompter::new(brand_deal_script());

        let outcome = run_interactive(&mut wizard, &mut prompter).await.unwrap();

        assert!(matches!(outcome, RunOutcome::Submitted(_)));
        assert_eq!(prompter.remaining(), 0);
        let records = store.records();
        assert_eq!(records.len(), 1);
        match &records[0].1 {
            ListingRecord::BrandDeal(record) => {
                assert_eq!(record.title, "Summer Promo");
                assert_eq!(record.dos_and_donts, vec!["Do this", "Don't do that"]);
                assert_eq!(record.guests_allowed, 1);
            }
            other => panic!("unexpected record: {:?}", other),
        }
        assert_eq!(
            surface.last_notice().map(|notice| notice.message),
            Some("Brand deal created successfully!".to_string())
        );
    }

    #[tokio::test]
    async fn blocked_step_is_asked_again() {
        let store = Arc::new(MockListingStore::new());
        let (mut wizard, surface) = wizard::<BrandDealFlow>(store);
        let mut prompter = ScriptedPrompter::new([
            text(""),
            choose("Technology"),
            ScriptedAnswer::Keep,
            choose("Continue"),
            text("Summer Promo"),
            ScriptedAnswer::Keep,
            ScriptedAnswer::Keep,
            choose("Cancel"),
            ScriptedAnswer::Confirm(true),
        ]);

        let outcome = run_interactive(&mut wizard, &mut prompter).await.unwrap();

        assert_eq!(outcome, RunOutcome::Cancelled);
        assert_eq!(wizard.current_number(), 1);
        assert_eq!(wizard.state().title, "Summer Promo");
        assert_eq!(surface.notices()[0].message, "Please enter a brand deal name");
    }

    #[tokio::test]
    async fn failed_submit_stays_on_review_for_retry() {
        let store = Arc::new(MockListingStore::failing("offline"));
        let (mut wizard, surface) = wizard::<BrandDealFlow>(store.clone());
        let patch = BrandDealPatch {
            title: Some("Retry me".into()),
            ..BrandDealPatch::default()
        };
        let mut prompter = ScriptedPrompter::new([
            choose("Submit"),
            choose("Cancel"),
            ScriptedAnswer::Confirm(true),
        ]);

        let outcome = run_autofill(&mut wizard, patch, false, &mut prompter)
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::Cancelled);
        assert_eq!(store.attempts(), 1);
        assert!(wizard.is_terminal());
        assert_eq!(wizard.state().title, "Retry me");
        assert_eq!(
            surface.last_notice().map(|notice| notice.message),
            Some("Failed to create brand deal. Please try again.".to_string())
        );

        store.set_behavior(MockBehavior::Succeed);
        let mut prompter = ScriptedPrompter::new([choose("Submit")]);
        let retried = run_interactive(&mut wizard, &mut prompter).await.unwrap();
        assert!(matches!(retried, RunOutcome::Submitted(_)));
    }

    #[tokio::test]
    async fn autofill_with_yes_submits_without_prompting() {
        let store = Arc::new(MockListingStore::new());
        let (mut wizard, _) = wizard::<DiscountDealFlow>(store.clone());
        let patch = serde_json::from_str(
            r#"{ "title": "Spring sale", "category": "Fashion", "discount": "20%" }"#,
        )
        .unwrap();
        let mut prompter = ScriptedPrompter::default();

        let outcome = run_autofill(&mut wizard, patch, true, &mut prompter)
            .await
            .unwrap();

        assert!(matches!(outcome, RunOutcome::Submitted(_)));
        assert!(prompter.asked().is_empty());
        assert_eq!(store.records()[0].1.title(), "Spring sale");
    }

    #[tokio::test]
    async fn autofill_with_yes_reports_store_failure() {
        let store = Arc::new(MockListingStore::failing("offline"));
        let (mut wizard, surface) = wizard::<DiscountDealFlow>(store);
        let mut prompter = ScriptedPrompter::default();

        let outcome = run_autofill(&mut wizard, Default::default(), true, &mut prompter)
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::Failed);
        assert_eq!(surface.notices().len(), 1);
    }

    #[tokio::test]
    async fn autofill_with_yes_reports_incomplete_step_once() {
        let store = Arc::new(MockListingStore::new());
        let surface = Arc::new(RecordingSurface::new());
        let shared: Arc<dyn ListingStore> = store.clone();
        let mut wizard =
            Wizard::<BrandDealFlow>::new(shared, surface.clone(), BrandProfile::default())
                .with_policy(SubmitPolicy::ValidateAllSteps);
        let patch = BrandDealPatch {
            title: Some("Half filled".into()),
            ..BrandDealPatch::default()
        };
        let mut prompter = ScriptedPrompter::default();

        let outcome = run_autofill(&mut wizard, patch, true, &mut prompter)
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::Failed);
        assert_eq!(store.attempts(), 0);
        let notices = surface.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Please select an industry");
    }
}

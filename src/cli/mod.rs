pub mod args;
pub mod autofill;
pub mod fields;
pub mod output;
pub mod prompter;
pub mod runner;
pub mod surface;

use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use deals_config::{Config, ConfigManager, StoreBackend};
use deals_core::{
    BrandDealFlow, DiscountDealFlow, ListingStore, MockBehavior, MockListingStore, SubmitPolicy,
    Wizard, WizardSurface,
};
use deals_domain::{BrandProfile, Patchable};
use deals_storage_json::JsonListingStore;
use serde::de::DeserializeOwned;

use crate::errors::CliError;
use crate::utils::build_info;
use args::{Cli, Command, ConfigAction, WizardArgs};
use fields::InteractiveFlow;
use output::OutputPreferences;
use prompter::DialoguerPrompter;
use runner::RunOutcome;
use surface::TerminalSurface;

/// Parses process arguments and runs the selected command.
pub fn run_cli() -> Result<(), CliError> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    if cli.version {
        println!("creator_deals_cli {}", build_info::current());
        return Ok(());
    }

    let manager = ConfigManager::from_env()?;
    let config = manager.load()?;
    output::set_preferences(OutputPreferences {
        color_enabled: config.output.color_enabled && !cli.no_color,
        quiet_mode: config.output.quiet,
    });

    match cli.command {
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
        Some(Command::Config { action }) => show_config(&manager, &config, action),
        Some(Command::BrandDeal(args)) => run_wizard::<BrandDealFlow>(&manager, &config, &args),
        Some(Command::Discount(args)) => {
            run_wizard::<DiscountDealFlow>(&manager, &config, &args)
        }
    }
}

fn show_config(
    manager: &ConfigManager,
    config: &Config,
    action: ConfigAction,
) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => println!("{}", serde_json::to_string_pretty(config)?),
        ConfigAction::Path => println!("{}", manager.config_path().display()),
    }
    Ok(())
}

fn build_store(
    manager: &ConfigManager,
    config: &Config,
) -> Result<Arc<dyn ListingStore>, CliError> {
    match config.store {
        StoreBackend::Mock => {
            let store =
                MockListingStore::new().with_latency(Duration::from_millis(config.mock.latency_ms));
            if config.mock.fail_submissions {
                store.set_behavior(MockBehavior::Fail("mock store set to fail".to_string()));
            }
            Ok(Arc::new(store))
        }
        StoreBackend::Json => {
            let store = JsonListingStore::new(manager.data_dir(config))?;
            tracing::debug!(path = %store.path().display(), "using JSON listing store");
            Ok(Arc::new(store))
        }
    }
}

fn run_wizard<F>(
    manager: &ConfigManager,
    config: &Config,
    args: &WizardArgs,
) -> Result<(), CliError>
where
    F: InteractiveFlow,
    <F::State as Patchable>::Patch: DeserializeOwned,
{
    let store = build_store(manager, config)?;
    let brand = BrandProfile::new(
        config.brand.brand_name.clone(),
        config.brand.image_url.clone(),
    );
    let surface: Arc<dyn WizardSurface> = Arc::new(TerminalSurface::new());
    let policy = if config.validate_all_before_submit {
        SubmitPolicy::ValidateAllSteps
    } else {
        SubmitPolicy::TrustCurrentStep
    };
    let mut wizard = Wizard::<F>::new(store, surface, brand).with_policy(policy);
    let mut prompter = DialoguerPrompter::new();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let outcome = runtime.block_on(drive(&mut wizard, args, &mut prompter))?;

    match outcome {
        RunOutcome::Submitted(id) => {
            output::info(format!("Listing id: {id}"));
            Ok(())
        }
        RunOutcome::Cancelled => Ok(()),
        RunOutcome::Failed => Err(CliError::SubmissionFailed),
    }
}

async fn drive<F>(
    wizard: &mut Wizard<F>,
    args: &WizardArgs,
    prompter: &mut DialoguerPrompter,
) -> Result<RunOutcome, CliError>
where
    F: InteractiveFlow,
    <F::State as Patchable>::Patch: DeserializeOwned,
{
    match &args.autofill {
        Some(path) => {
            let patch = autofill::load_patch(path)?;
            runner::run_autofill(wizard, patch, args.yes, prompter).await
        }
        None => runner::run_interactive(wizard, prompter).await,
    }
}

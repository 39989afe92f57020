//! deals-core
//!
//! Stepped form controller for the CreatorDeals listing wizards: the shared
//! form record, step sequencing gated by per-step validation, and the single
//! submission write. Depends on deals-domain. No terminal I/O, no concrete
//! storage beyond the in-memory mock.

pub mod context;
pub mod error;
pub mod flow;
pub mod record;
pub mod sequencer;
pub mod step;
pub mod store;
pub mod submission;
pub mod surface;
pub mod validator;
pub mod wizard;

pub use context::{FormContext, SubscriptionId};
pub use error::{StoreError, SubmitError, ValidationError};
pub use flow::{validate_all_steps, BrandDealFlow, DiscountDealFlow, WizardFlow};
pub use sequencer::StepSequencer;
pub use step::{BrandDealStep, DiscountStep, WizardStep};
pub use store::{ListingStore, MockBehavior, MockListingStore};
pub use submission::{SubmissionCoordinator, SubmissionGate, SubmissionGuard};
pub use surface::{Notice, NoticeLevel, RecordingSurface, WizardSurface};
pub use wizard::{SubmitPolicy, Wizard};

//! Binds a form record, its step sequence, its validator and its record
//! serializer into one wizard definition.

use deals_domain::{BrandDealForm, BrandProfile, DiscountDealForm, ListingRecord, Patchable};

use crate::error::ValidationError;
use crate::record::{brand_deal_record, discount_deal_record};
use crate::step::{BrandDealStep, DiscountStep, WizardStep};
use crate::validator::{validate_brand_deal_step, validate_discount_step};

/// High-level contract for a stepped listing wizard.
pub trait WizardFlow: Send + Sync + 'static {
    type State: Patchable + Clone + Default + Send + Sync + 'static;
    type Step: WizardStep;

    /// Human label used in logs, e.g. `"brand deal"`.
    const LABEL: &'static str;
    const SUCCESS_MESSAGE: &'static str;
    const FAILURE_MESSAGE: &'static str;

    fn validate(step: Self::Step, state: &Self::State) -> Result<(), ValidationError>;

    fn build_record(state: &Self::State, brand: &BrandProfile) -> ListingRecord;
}

/// Checks every step in order and returns the first failing one.
pub fn validate_all_steps<F: WizardFlow>(
    state: &F::State,
) -> Result<(), (F::Step, ValidationError)> {
    for &step in <F::Step as WizardStep>::SEQUENCE {
        F::validate(step, state).map_err(|error| (step, error))?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrandDealFlow;

impl WizardFlow for BrandDealFlow {
    type State = BrandDealForm;
    type Step = BrandDealStep;

    const LABEL: &'static str = "brand deal";
    const SUCCESS_MESSAGE: &'static str = "Brand deal created successfully!";
    const FAILURE_MESSAGE: &'static str = "Failed to create brand deal. Please try again.";

    fn validate(step: BrandDealStep, state: &BrandDealForm) -> Result<(), ValidationError> {
        validate_brand_deal_step(step, state)
    }

    fn build_record(state: &BrandDealForm, brand: &BrandProfile) -> ListingRecord {
        ListingRecord::BrandDeal(brand_deal_record(state, brand))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountDealFlow;

impl WizardFlow for DiscountDealFlow {
    type State = DiscountDealForm;
    type Step = DiscountStep;

    const LABEL: &'static str = "discount deal";
    const SUCCESS_MESSAGE: &'static str = "Discount deal created successfully!";
    const FAILURE_MESSAGE: &'static str = "Failed to create discount deal. Please try again.";

    fn validate(step: DiscountStep, state: &DiscountDealForm) -> Result<(), ValidationError> {
        validate_discount_step(step, state)
    }

    fn build_record(state: &DiscountDealForm, brand: &BrandProfile) -> ListingRecord {
        ListingRecord::DiscountDeal(discount_deal_record(state, brand))
    }
}

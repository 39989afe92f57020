//! Per-step required-field rules.
//!
//! Validators are pure: they inspect only the step being left and report the
//! first violated rule.

use deals_domain::{BrandDealForm, DiscountDealForm};

use crate::error::ValidationError;
use crate::step::{BrandDealStep, DiscountStep};

pub fn validate_brand_deal_step(
    step: BrandDealStep,
    form: &BrandDealForm,
) -> Result<(), ValidationError> {
    match step {
        BrandDealStep::GeneralInfo => {
            require_text("title", &form.title, "Please enter a brand deal name")?;
            require_text("industry", &form.industry, "Please select an industry")
        }
        BrandDealStep::Collaboration => {
            require_set("platform", &form.platform, "Please select a platform")
        }
        BrandDealStep::Requirements => {
            require_text("address", &form.address, "Please enter the address")?;
            require_set(
                "deadline_to_apply",
                &form.deadline_to_apply,
                "Please select an application deadline",
            )
        }
        BrandDealStep::BriefDetails => require_text("brief", &form.brief, "Please enter the brief"),
        BrandDealStep::GuestInfo => require_set(
            "guests_allowed",
            &form.guests_allowed,
            "Please select the number of guests allowed",
        ),
        BrandDealStep::Review => Ok(()),
    }
}

pub fn validate_discount_step(
    step: DiscountStep,
    form: &DiscountDealForm,
) -> Result<(), ValidationError> {
    match step {
        DiscountStep::BasicInfo => {
            require_text("title", &form.title, "Please enter a discount title")?;
            require_text("category", &form.category, "Please select a category")
        }
        DiscountStep::OfferDetails => {
            require_text("discount", &form.discount, "Please enter the discount amount")
        }
        DiscountStep::Review => Ok(()),
    }
}

fn require_text(field: &'static str, value: &str, message: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::missing(field, message))
    } else {
        Ok(())
    }
}

fn require_set<T>(
    field: &'static str,
    value: &Option<T>,
    message: &str,
) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::missing(field, message)),
    }
}

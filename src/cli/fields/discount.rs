use deals_core::{DiscountDealFlow, DiscountStep};
use deals_domain::{DiscountDealForm, DiscountDealPatch, DISCOUNT_CATEGORIES};

use super::{choose_from, display_date, prompt_date, prompt_lines, summary_line, InteractiveFlow};
use crate::cli::prompter::FieldPrompter;
use crate::errors::CliError;

impl InteractiveFlow for DiscountDealFlow {
    const HEADING: &'static str = "Create Discount Deal";

    fn prompt_step(
        step: DiscountStep,
        form: &DiscountDealForm,
        prompter: &mut dyn FieldPrompter,
    ) -> Result<DiscountDealPatch, CliError> {
        match step {
            DiscountStep::BasicInfo => {
                let title = prompter.text("Discount title", &form.title)?;
                let category =
                    choose_from(prompter, "Category", DISCOUNT_CATEGORIES, &form.category)?;
                let description = prompter.text("Description", &form.description)?;
                Ok(DiscountDealPatch {
                    title: Some(title),
                    category: Some(category),
                    description: Some(description),
                    ..DiscountDealPatch::default()
                })
            }
            DiscountStep::OfferDetails => {
                let discount = prompter.text("Discount amount", &form.discount)?;
                let promo_code = prompter.text("Promo code", &form.promo_code)?;
                let valid_until = prompt_date(prompter, "Valid until", form.valid_until)?;
                let location = prompter.text("Location", &form.location)?;
                let terms = prompt_lines(prompter, "Terms", &form.terms)?;
                Ok(DiscountDealPatch {
                    discount: Some(discount),
                    promo_code: Some(promo_code),
                    valid_until: Some(valid_until),
                    location: Some(location),
                    terms: Some(terms),
                    ..DiscountDealPatch::default()
                })
            }
            DiscountStep::Review => Ok(DiscountDealPatch::default()),
        }
    }

    fn review_lines(form: &DiscountDealForm) -> Vec<String> {
        vec![
            summary_line("Title", &form.title),
            summary_line("Category", &form.category),
            summary_line("Description", &form.description),
            summary_line("Discount", &form.discount),
            summary_line("Promo code", &form.promo_code),
            summary_line("Valid until", display_date(form.valid_until)),
            summary_line("Location", &form.location),
            summary_line("Terms", form.terms.replace('\n', "; ")),
            summary_line("Images", form.images.len()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::cli::prompter::{ScriptedAnswer, ScriptedPrompter};

    #[test]
    fn offer_details_collects_terms_as_lines() {
        let mut prompter = ScriptedPrompter::new([
            ScriptedAnswer::Text("20%".into()),
            ScriptedAnswer::Text("SPRING20".into()),
            ScriptedAnswer::Text("2031-03-31".into()),
            ScriptedAnswer::Keep,
            ScriptedAnswer::Text("One per customer; In store only".into()),
        ]);

        let patch = DiscountDealFlow::prompt_step(
            DiscountStep::OfferDetails,
            &DiscountDealForm::default(),
            &mut prompter,
        )
        .unwrap();

        assert_eq!(patch.discount.as_deref(), Some("20%"));
        assert_eq!(patch.valid_until, Some(NaiveDate::from_ymd_opt(2031, 3, 31)));
        assert_eq!(patch.terms.as_deref(), Some("One per customer\nIn store only"));
    }
}

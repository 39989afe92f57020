//! In-progress record for the tabbed discount listing form.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::brand_deal::set;
use crate::common::{deserialize_some, ImageAttachment, Patchable};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscountDealForm {
    pub title: String,
    pub category: String,
    pub description: String,
    pub discount: String,
    pub promo_code: String,
    pub valid_until: Option<NaiveDate>,
    pub location: String,
    pub terms: String,
    pub images: Vec<ImageAttachment>,
}

/// Partial update for [`DiscountDealForm`]; same conventions as
/// [`crate::BrandDealPatch`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscountDealPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub discount: Option<String>,
    pub promo_code: Option<String>,
    #[serde(deserialize_with = "deserialize_some")]
    pub valid_until: Option<Option<NaiveDate>>,
    pub location: Option<String>,
    pub terms: Option<String>,
    #[serde(skip)]
    pub images: Option<Vec<ImageAttachment>>,
}

impl Patchable for DiscountDealForm {
    type Patch = DiscountDealPatch;

    fn merge(&mut self, patch: DiscountDealPatch) {
        let DiscountDealPatch {
            title,
            category,
            description,
            discount,
            promo_code,
            valid_until,
            location,
            terms,
            images,
        } = patch;

        set(&mut self.title, title);
        set(&mut self.category, category);
        set(&mut self.description, description);
        set(&mut self.discount, discount);
        set(&mut self.promo_code, promo_code);
        set(&mut self.valid_until, valid_until);
        set(&mut self.location, location);
        set(&mut self.terms, terms);
        set(&mut self.images, images);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_untouched_fields() {
        let mut form = DiscountDealForm {
            title: "Spring sale".into(),
            promo_code: "SPRING20".into(),
            ..DiscountDealForm::default()
        };
        form.merge(DiscountDealPatch {
            discount: Some("20%".into()),
            ..DiscountDealPatch::default()
        });
        assert_eq!(form.title, "Spring sale");
        assert_eq!(form.promo_code, "SPRING20");
        assert_eq!(form.discount, "20%");
    }
}

//! Serialization of a finished form into the store's insert shape.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use deals_domain::{
    BrandDealForm, BrandDealRecord, BrandProfile, DiscountDealForm, DiscountDealRecord,
    ImageAttachment, DEFAULT_LISTING_STATUS,
};

/// Splits on whitespace and prefixes each token with `#` unless it already
/// starts with one.
pub fn tokenize_hashtags(raw: &str) -> Vec<String> {
    raw.split_whitespace()
        .map(|token| {
            if token.starts_with('#') {
                token.to_string()
            } else {
                format!("#{token}")
            }
        })
        .collect()
}

pub fn tokenize_mentions(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// One entry per non-blank line, trimmed.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Deadlines are stored as midnight UTC on the chosen day.
pub fn deadline_timestamp(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}

pub fn uploaded_urls(images: &[ImageAttachment]) -> Vec<String> {
    images
        .iter()
        .filter_map(|image| image.uploaded_url.clone())
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub fn brand_deal_record(form: &BrandDealForm, brand: &BrandProfile) -> BrandDealRecord {
    BrandDealRecord {
        title: form.title.trim().to_string(),
        brand_name: brand.brand_name.clone(),
        industry: form.industry.clone(),
        description: form.brief.trim().to_string(),
        promotion_type: form.promotion_type.trim().to_string(),
        platform: form
            .platform
            .map(|platform| platform.as_str().to_string())
            .unwrap_or_default(),
        collaboration_type: form.collaboration_type.as_str().to_string(),
        offline_collaboration_type: form.offline_kind().map(|kind| kind.as_str().to_string()),
        location: form.address.trim().to_string(),
        followers_required: i64::from(form.followers_required),
        creators_needed: i64::from(form.creators_needed),
        price: form.price.unwrap_or(0.0),
        deal_value: form.deal_value.trim().to_string(),
        apply_deadline: form.deadline_to_apply.map(deadline_timestamp),
        post_deadline: form.post_deadline.map(deadline_timestamp),
        status: DEFAULT_LISTING_STATUS.to_string(),
        is_featured: false,
        image_url: brand.image_url.clone(),
        booking_link: non_blank(form.booking_link.as_deref()),
        dos_and_donts: split_lines(&form.dos_and_donts),
        hashtags: tokenize_hashtags(&form.hashtags),
        accounts_to_mention: tokenize_mentions(&form.accounts_to_mention),
        special_instructions: form.special_instructions.trim().to_string(),
        guests_allowed: form.guests_allowed.map(|guests| guests.count()).unwrap_or(0),
        guest_instructions: form.guest_instructions.trim().to_string(),
        reference_images: uploaded_urls(&form.images),
        reference_videos: Vec::new(),
    }
}

pub fn discount_deal_record(form: &DiscountDealForm, brand: &BrandProfile) -> DiscountDealRecord {
    DiscountDealRecord {
        title: form.title.trim().to_string(),
        brand_name: brand.brand_name.clone(),
        category: form.category.clone(),
        description: form.description.trim().to_string(),
        discount_value: form.discount.trim().to_string(),
        promo_code: form.promo_code.trim().to_string(),
        valid_until: form.valid_until.map(deadline_timestamp),
        location: form.location.trim().to_string(),
        terms: split_lines(&form.terms),
        status: DEFAULT_LISTING_STATUS.to_string(),
        is_featured: false,
        image_url: brand.image_url.clone(),
        reference_images: uploaded_urls(&form.images),
    }
}

#[cfg(test)]
mod tests {
    use deals_domain::{
        CollaborationMode, GuestsAllowed, OfflineCollaborationType, Platform,
    };

    use super::*;

    #[test]
    fn hashtags_gain_a_single_prefix() {
        assert_eq!(tokenize_hashtags("sale #deal"), vec!["#sale", "#deal"]);
        assert_eq!(tokenize_hashtags("  summer\t#fun  "), vec!["#summer", "#fun"]);
        assert!(tokenize_hashtags("   ").is_empty());
    }

    #[test]
    fn dos_and_donts_drop_blank_lines() {
        assert_eq!(
            split_lines("Do this\n\nDon't do that\n"),
            vec!["Do this", "Don't do that"]
        );
        assert_eq!(split_lines("  padded  \r\n   \n"), vec!["padded"]);
    }

    #[test]
    fn mentions_split_on_whitespace() {
        assert_eq!(
            tokenize_mentions("@brand  @partner\n@friend"),
            vec!["@brand", "@partner", "@friend"]
        );
    }

    #[test]
    fn deadline_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2030, 6, 1).unwrap();
        assert_eq!(deadline_timestamp(date).to_rfc3339(), "2030-06-01T00:00:00+00:00");
    }

    #[test]
    fn brand_deal_record_derives_secondary_fields() {
        let form = BrandDealForm {
            title: " Summer Promo ".into(),
            industry: "Fashion & Accessories".into(),
            platform: Some(Platform::Instagram),
            collaboration_type: CollaborationMode::Offline,
            offline_collaboration_type: Some(OfflineCollaborationType::StoreVisit),
            address: "123 Main St".into(),
            brief: "Do a reel".into(),
            hashtags: "sale #deal".into(),
            accounts_to_mention: "@shop".into(),
            dos_and_donts: "Smile\n\nNo competitors\n".into(),
            guests_allowed: Some(GuestsAllowed::Unlimited),
            booking_link: Some("   ".into()),
            images: vec![
                ImageAttachment::new("a.png", "image/png", vec![1, 2, 3])
                    .with_uploaded_url("https://cdn.example/a.png"),
                ImageAttachment::new("b.png", "image/png", vec![4]),
            ],
            ..BrandDealForm::default()
        };
        let brand = BrandProfile::new("Acme", "https://cdn.example/logo.png");

        let record = brand_deal_record(&form, &brand);

        assert_eq!(record.title, "Summer Promo");
        assert_eq!(record.brand_name, "Acme");
        assert_eq!(record.platform, "instagram");
        assert_eq!(record.collaboration_type, "offline");
        assert_eq!(record.offline_collaboration_type.as_deref(), Some("store_visit"));
        assert_eq!(record.hashtags, vec!["#sale", "#deal"]);
        assert_eq!(record.dos_and_donts, vec!["Smile", "No competitors"]);
        assert_eq!(record.guests_allowed, GuestsAllowed::UNLIMITED_COUNT);
        assert_eq!(record.booking_link, None);
        assert_eq!(record.reference_images, vec!["https://cdn.example/a.png"]);
        assert_eq!(record.status, "Active");
        assert!(!record.is_featured);
        assert_eq!(record.creators_needed, 1);
    }

    #[test]
    fn online_record_omits_offline_subtype() {
        let form = BrandDealForm {
            offline_collaboration_type: Some(OfflineCollaborationType::EventAttendance),
            ..BrandDealForm::default()
        };
        let record = brand_deal_record(&form, &BrandProfile::default());
        assert_eq!(record.collaboration_type, "online");
        assert_eq!(record.offline_collaboration_type, None);
    }

    #[test]
    fn discount_record_splits_terms() {
        let form = DiscountDealForm {
            title: "Spring sale".into(),
            discount: " 20% ".into(),
            terms: "One per customer\n\nIn store only".into(),
            ..DiscountDealForm::default()
        };
        let record = discount_deal_record(&form, &BrandProfile::new("Acme", ""));
        assert_eq!(record.discount_value, "20%");
        assert_eq!(record.terms, vec!["One per customer", "In store only"]);
        assert_eq!(record.valid_until, None);
    }
}

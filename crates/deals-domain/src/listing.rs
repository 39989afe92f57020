//! Insert-shaped records handed to the listing store at submission time.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status assigned to freshly created listings.
pub const DEFAULT_LISTING_STATUS: &str = "Active";

/// Identifier returned by the store for an accepted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub Uuid);

impl ListingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandDealRecord {
    pub title: String,
    pub brand_name: String,
    #[serde(rename = "category")]
    pub industry: String,
    pub description: String,
    pub promotion_type: String,
    pub platform: String,
    pub collaboration_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_collaboration_type: Option<String>,
    pub location: String,
    pub followers_required: i64,
    pub creators_needed: i64,
    pub price: f64,
    pub deal_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_deadline: Option<DateTime<Utc>>,
    pub status: String,
    pub is_featured: bool,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_link: Option<String>,
    pub dos_and_donts: Vec<String>,
    pub hashtags: Vec<String>,
    pub accounts_to_mention: Vec<String>,
    pub special_instructions: String,
    pub guests_allowed: i32,
    pub guest_instructions: String,
    pub reference_images: Vec<String>,
    pub reference_videos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountDealRecord {
    pub title: String,
    pub brand_name: String,
    pub category: String,
    pub description: String,
    pub discount_value: String,
    pub promo_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    pub location: String,
    pub terms: Vec<String>,
    pub status: String,
    pub is_featured: bool,
    pub image_url: String,
    pub reference_images: Vec<String>,
}

/// The single shape accepted by a listing store write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum ListingRecord {
    BrandDeal(BrandDealRecord),
    DiscountDeal(DiscountDealRecord),
}

impl ListingRecord {
    pub fn title(&self) -> &str {
        match self {
            ListingRecord::BrandDeal(record) => &record.title,
            ListingRecord::DiscountDeal(record) => &record.title,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ListingRecord::BrandDeal(_) => "brand_deal",
            ListingRecord::DiscountDeal(_) => "discount_deal",
        }
    }
}

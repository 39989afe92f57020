//! Shared traits and enums used by both listing forms.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A form record that accepts shallow merge patches.
///
/// Every member of a patch that is `Some` overwrites the matching field; every
/// member left as `None` keeps the existing value.
pub trait Patchable {
    type Patch: Default + PartialEq + Clone + fmt::Debug;

    fn merge(&mut self, patch: Self::Patch);

    /// True when the patch would not change any field.
    fn is_empty_patch(patch: &Self::Patch) -> bool {
        *patch == Self::Patch::default()
    }
}

/// Deserializes a present JSON value (including `null`) into `Some(value)` so
/// that double-option patch members can distinguish "clear" from "absent".
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Industries offered by the brand deal form.
pub const INDUSTRIES: &[&str] = &[
    "Fashion & Accessories",
    "Beauty & Personal Care",
    "Food & Beverage",
    "Travel & Hospitality",
    "Health & Fitness",
    "Technology",
    "Home & Lifestyle",
    "Entertainment",
    "Other",
];

/// Categories offered by the discount listing form.
pub const DISCOUNT_CATEGORIES: &[&str] = &[
    "Fashion",
    "Beauty",
    "Food & Drink",
    "Travel",
    "Fitness",
    "Electronics",
    "Services",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Youtube,
    Tiktok,
    Facebook,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Instagram,
        Platform::Youtube,
        Platform::Tiktok,
        Platform::Facebook,
        Platform::Twitter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter / X",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaborationMode {
    #[default]
    Online,
    Offline,
}

impl CollaborationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CollaborationMode::Online => "online",
            CollaborationMode::Offline => "offline",
        }
    }
}

impl fmt::Display for CollaborationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaborationMode::Online => f.write_str("Online"),
            CollaborationMode::Offline => f.write_str("Offline"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfflineCollaborationType {
    StoreVisit,
    EventAttendance,
    ProductDelivery,
}

impl OfflineCollaborationType {
    pub const ALL: [OfflineCollaborationType; 3] = [
        OfflineCollaborationType::StoreVisit,
        OfflineCollaborationType::EventAttendance,
        OfflineCollaborationType::ProductDelivery,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OfflineCollaborationType::StoreVisit => "store_visit",
            OfflineCollaborationType::EventAttendance => "event_attendance",
            OfflineCollaborationType::ProductDelivery => "product_delivery",
        }
    }
}

impl fmt::Display for OfflineCollaborationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OfflineCollaborationType::StoreVisit => "Store visit",
            OfflineCollaborationType::EventAttendance => "Event attendance",
            OfflineCollaborationType::ProductDelivery => "Product delivery",
        };
        f.write_str(label)
    }
}

/// How many guests a creator may bring. Serialized as `"0"`..`"3"` or
/// `"unlimited"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestsAllowed {
    #[serde(rename = "0")]
    None,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "unlimited")]
    Unlimited,
}

impl GuestsAllowed {
    pub const ALL: [GuestsAllowed; 5] = [
        GuestsAllowed::None,
        GuestsAllowed::One,
        GuestsAllowed::Two,
        GuestsAllowed::Three,
        GuestsAllowed::Unlimited,
    ];

    /// Sentinel written to the store for `Unlimited`.
    pub const UNLIMITED_COUNT: i32 = -1;

    pub fn as_str(self) -> &'static str {
        match self {
            GuestsAllowed::None => "0",
            GuestsAllowed::One => "1",
            GuestsAllowed::Two => "2",
            GuestsAllowed::Three => "3",
            GuestsAllowed::Unlimited => "unlimited",
        }
    }

    pub fn count(self) -> i32 {
        match self {
            GuestsAllowed::None => 0,
            GuestsAllowed::One => 1,
            GuestsAllowed::Two => 2,
            GuestsAllowed::Three => 3,
            GuestsAllowed::Unlimited => Self::UNLIMITED_COUNT,
        }
    }
}

impl fmt::Display for GuestsAllowed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestsAllowed::None => f.write_str("No guests"),
            GuestsAllowed::Unlimited => f.write_str("Unlimited"),
            other => write!(f, "{} guest(s)", other.as_str()),
        }
    }
}

/// A binary image picked in the media step.
///
/// Uploading happens outside the wizard; an uploader fills `uploaded_url` once
/// the bytes are stored remotely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub uploaded_url: Option<String>,
}

impl ImageAttachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
            uploaded_url: None,
        }
    }

    pub fn with_uploaded_url(mut self, url: impl Into<String>) -> Self {
        self.uploaded_url = Some(url.into());
        self
    }
}

/// Identity of the brand publishing a listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrandProfile {
    pub brand_name: String,
    pub image_url: String,
}

impl BrandProfile {
    pub fn new(brand_name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            image_url: image_url.into(),
        }
    }
}

//! In-progress record for the brand deal creation wizard.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::common::{
    deserialize_some, CollaborationMode, GuestsAllowed, ImageAttachment,
    OfflineCollaborationType, Patchable, Platform,
};

/// All values collected by the brand deal wizard, across every step.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandDealForm {
    // General info
    pub title: String,
    pub industry: String,
    pub promotion_type: String,

    // Collaboration terms
    pub platform: Option<Platform>,
    pub collaboration_type: CollaborationMode,
    pub offline_collaboration_type: Option<OfflineCollaborationType>,
    pub deal_value: String,
    pub price: Option<f64>,

    // Requirements
    pub address: String,
    pub deadline_to_apply: Option<NaiveDate>,
    pub post_deadline: Option<NaiveDate>,
    pub followers_required: u32,
    pub creators_needed: u32,
    pub booking_link: Option<String>,

    // Brief
    pub brief: String,
    pub special_instructions: String,
    pub hashtags: String,
    pub accounts_to_mention: String,
    pub dos_and_donts: String,

    // Guests
    pub guests_allowed: Option<GuestsAllowed>,
    pub guest_instructions: String,

    pub images: Vec<ImageAttachment>,
}

impl Default for BrandDealForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            industry: String::new(),
            promotion_type: String::new(),
            platform: None,
            collaboration_type: CollaborationMode::Online,
            offline_collaboration_type: None,
            deal_value: String::new(),
            price: None,
            address: String::new(),
            deadline_to_apply: None,
            post_deadline: None,
            followers_required: 0,
            creators_needed: 1,
            booking_link: None,
            brief: String::new(),
            special_instructions: String::new(),
            hashtags: String::new(),
            accounts_to_mention: String::new(),
            dos_and_donts: String::new(),
            guests_allowed: None,
            guest_instructions: String::new(),
            images: Vec::new(),
        }
    }
}

impl BrandDealForm {
    /// The offline subtype, visible only while the collaboration is offline.
    pub fn offline_kind(&self) -> Option<OfflineCollaborationType> {
        match self.collaboration_type {
            CollaborationMode::Offline => self.offline_collaboration_type,
            CollaborationMode::Online => None,
        }
    }

    pub fn is_offline(&self) -> bool {
        self.collaboration_type == CollaborationMode::Offline
    }
}

/// Partial update for [`BrandDealForm`].
///
/// Nullable fields use a double option: `Some(None)` clears the value, `None`
/// leaves it untouched. JSON keys are camelCase; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandDealPatch {
    pub title: Option<String>,
    pub industry: Option<String>,
    pub promotion_type: Option<String>,
    #[serde(deserialize_with = "deserialize_some")]
    pub platform: Option<Option<Platform>>,
    pub collaboration_type: Option<CollaborationMode>,
    #[serde(deserialize_with = "deserialize_some")]
    pub offline_collaboration_type: Option<Option<OfflineCollaborationType>>,
    pub deal_value: Option<String>,
    #[serde(deserialize_with = "deserialize_some")]
    pub price: Option<Option<f64>>,
    pub address: Option<String>,
    #[serde(deserialize_with = "deserialize_some")]
    pub deadline_to_apply: Option<Option<NaiveDate>>,
    #[serde(deserialize_with = "deserialize_some")]
    pub post_deadline: Option<Option<NaiveDate>>,
    pub followers_required: Option<u32>,
    pub creators_needed: Option<u32>,
    #[serde(deserialize_with = "deserialize_some")]
    pub booking_link: Option<Option<String>>,
    pub brief: Option<String>,
    pub special_instructions: Option<String>,
    pub hashtags: Option<String>,
    pub accounts_to_mention: Option<String>,
    pub dos_and_donts: Option<String>,
    #[serde(deserialize_with = "deserialize_some")]
    pub guests_allowed: Option<Option<GuestsAllowed>>,
    pub guest_instructions: Option<String>,
    #[serde(skip)]
    pub images: Option<Vec<ImageAttachment>>,
}

impl Patchable for BrandDealForm {
    type Patch = BrandDealPatch;

    fn merge(&mut self, patch: BrandDealPatch) {
        let BrandDealPatch {
            title,
            industry,
            promotion_type,
            platform,
            collaboration_type,
            offline_collaboration_type,
            deal_value,
            price,
            address,
            deadline_to_apply,
            post_deadline,
            followers_required,
            creators_needed,
            booking_link,
            brief,
            special_instructions,
            hashtags,
            accounts_to_mention,
            dos_and_donts,
            guests_allowed,
            guest_instructions,
            images,
        } = patch;

        set(&mut self.title, title);
        set(&mut self.industry, industry);
        set(&mut self.promotion_type, promotion_type);
        set(&mut self.platform, platform);
        set(&mut self.collaboration_type, collaboration_type);
        set(&mut self.offline_collaboration_type, offline_collaboration_type);
        set(&mut self.deal_value, deal_value);
        set(&mut self.price, price);
        set(&mut self.address, address);
        set(&mut self.deadline_to_apply, deadline_to_apply);
        set(&mut self.post_deadline, post_deadline);
        set(&mut self.followers_required, followers_required);
        set(&mut self.creators_needed, creators_needed);
        set(&mut self.booking_link, booking_link);
        set(&mut self.brief, brief);
        set(&mut self.special_instructions, special_instructions);
        set(&mut self.hashtags, hashtags);
        set(&mut self.accounts_to_mention, accounts_to_mention);
        set(&mut self.dos_and_donts, dos_and_donts);
        set(&mut self.guests_allowed, guests_allowed);
        set(&mut self.guest_instructions, guest_instructions);
        set(&mut self.images, images);
    }
}

pub(crate) fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

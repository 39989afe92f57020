//! Typed step identifiers for each wizard.

use std::fmt;
use std::hash::Hash;

/// A step in a fixed, ordered wizard sequence numbered `1..=N`.
pub trait WizardStep: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Every step, in display order.
    const SEQUENCE: &'static [Self];
    const FIRST: Self;
    /// The review step; reaching it enables submission.
    const LAST: Self;

    /// One-based position within [`Self::SEQUENCE`].
    fn number(self) -> usize;

    fn title(self) -> &'static str;

    fn count() -> usize {
        Self::SEQUENCE.len()
    }

    fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::SEQUENCE.get(index).copied())
    }

    fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    fn previous(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    fn is_terminal(self) -> bool {
        self == Self::LAST
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandDealStep {
    GeneralInfo = 1,
    Collaboration = 2,
    Requirements = 3,
    BriefDetails = 4,
    GuestInfo = 5,
    Review = 6,
}

impl WizardStep for BrandDealStep {
    const SEQUENCE: &'static [Self] = &[
        BrandDealStep::GeneralInfo,
        BrandDealStep::Collaboration,
        BrandDealStep::Requirements,
        BrandDealStep::BriefDetails,
        BrandDealStep::GuestInfo,
        BrandDealStep::Review,
    ];
    const FIRST: Self = BrandDealStep::GeneralInfo;
    const LAST: Self = BrandDealStep::Review;

    fn number(self) -> usize {
        self as usize
    }

    fn title(self) -> &'static str {
        match self {
            BrandDealStep::GeneralInfo => "General Info",
            BrandDealStep::Collaboration => "Collaboration",
            BrandDealStep::Requirements => "Requirements",
            BrandDealStep::BriefDetails => "Brief Details",
            BrandDealStep::GuestInfo => "Guest Info",
            BrandDealStep::Review => "Review",
        }
    }
}

impl fmt::Display for BrandDealStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Tabs of the discount listing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountStep {
    BasicInfo = 1,
    OfferDetails = 2,
    Review = 3,
}

impl WizardStep for DiscountStep {
    const SEQUENCE: &'static [Self] = &[
        DiscountStep::BasicInfo,
        DiscountStep::OfferDetails,
        DiscountStep::Review,
    ];
    const FIRST: Self = DiscountStep::BasicInfo;
    const LAST: Self = DiscountStep::Review;

    fn number(self) -> usize {
        self as usize
    }

    fn title(self) -> &'static str {
        match self {
            DiscountStep::BasicInfo => "Basic Info",
            DiscountStep::OfferDetails => "Offer Details",
            DiscountStep::Review => "Review",
        }
    }
}

impl fmt::Display for DiscountStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

//! deals-domain
//!
//! Pure data for the CreatorDeals listing wizards: the in-progress form
//! records, their merge patches, and the insert-shaped records handed to the
//! listing store. No I/O, no prompting, no storage.

pub mod brand_deal;
pub mod common;
pub mod discount_deal;
pub mod listing;

pub use brand_deal::*;
pub use common::*;
pub use discount_deal::*;
pub use listing::*;

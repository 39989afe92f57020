//! deals-config
//!
//! Persistent settings for the listing wizards: which store backs
//! submissions, mock store behaviour, the brand profile, and output options.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::{ConfigManager, HOME_ENV};
pub use model::{BrandSettings, Config, MockSettings, OutputSettings, StoreBackend};

use std::{fmt, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

/// User-editable settings for the CLI and its listing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreBackend,
    #[serde(default)]
    pub mock: MockSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Where the JSON store keeps `listings.json`. Defaults to `<base>/data`.
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub validate_all_before_submit: bool,
    #[serde(default)]
    pub brand: BrandSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreBackend::default(),
            mock: MockSettings::default(),
            data_dir: None,
            validate_all_before_submit: false,
            brand: BrandSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl Config {
    pub fn resolve_data_dir(&self, base: &Path) -> PathBuf {
        match &self.data_dir {
            Some(path) => path.clone(),
            None => base.join("data"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mock,
    Json,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StoreBackend::Mock => "mock",
            StoreBackend::Json => "json",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockSettings {
    #[serde(default = "MockSettings::default_latency_ms")]
    pub latency_ms: u64,
    #[serde(default)]
    pub fail_submissions: bool,
}

impl Default for MockSettings {
    fn default() -> Self {
        Self {
            latency_ms: Self::default_latency_ms(),
            fail_submissions: false,
        }
    }
}

impl MockSettings {
    pub fn default_latency_ms() -> u64 {
        400
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrandSettings {
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "OutputSettings::default_color_enabled")]
    pub color_enabled: bool,
    #[serde(default)]
    pub quiet: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color_enabled: Self::default_color_enabled(),
            quiet: false,
        }
    }
}

impl OutputSettings {
    pub fn default_color_enabled() -> bool {
        true
    }
}

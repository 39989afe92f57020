use std::fmt;

/// What `build.rs` embedded about this binary; unknown values read "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: CLI_VERSION,
        git_hash: option_env!("CREATOR_DEALS_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("CREATOR_DEALS_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("CREATOR_DEALS_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("CREATOR_DEALS_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("CREATOR_DEALS_BUILD_PROFILE").unwrap_or("unknown"),
        rustc: option_env!("CREATOR_DEALS_BUILD_RUSTC").unwrap_or("unknown"),
    }
}

/// The `--version` banner: version first, then one labelled line per field.
impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.version)?;
        let commit = match self.git_status {
            "dirty" => format!("{}+dirty", self.git_hash),
            _ => self.git_hash.to_string(),
        };
        let rows = [
            ("commit", commit.as_str()),
            ("built", self.timestamp),
            ("target", self.target),
            ("profile", self.profile),
            ("rustc", self.rustc),
        ];
        for (index, (label, value)) in rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{label:<8}{value}")?;
        }
        Ok(())
    }
}

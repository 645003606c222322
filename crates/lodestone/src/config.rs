//! # Scan Profiles
//!
//! Optional TOML files carrying scan defaults, loaded once at startup.
//! Command-line arguments always win over profile values; profile values
//! win over built-in defaults.
//!
//! ```toml
//! # portal-hunt.toml
//! radius_chunks = 500
//! structure = "ruined_portal"
//! flags = 0
//! ```

use lodestone_shared::DEFAULT_RADIUS_CHUNKS;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur loading a scan profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    /// The profile file is not valid TOML for a profile.
    #[error("failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Scan defaults loaded from a TOML profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanProfile {
    /// Scan radius, in chunks.
    pub radius_chunks: Option<i32>,
    /// Structure name, e.g. `"ruined_portal"`.
    pub structure: Option<String>,
    /// Raw viability flag bits.
    pub flags: Option<u32>,
}

impl ScanProfile {
    /// Loads a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ProfileError::Io`] if the file cannot be read,
    /// [`ProfileError::Parse`] if it is not a valid profile.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// The effective radius: profile value or the built-in default.
    #[must_use]
    pub fn radius_or_default(&self) -> i32 {
        self.radius_chunks.unwrap_or(DEFAULT_RADIUS_CHUNKS)
    }
}

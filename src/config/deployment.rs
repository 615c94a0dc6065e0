//! TOML deployment file covering both engines.
//!
//! ```toml
//! [router]
//! owner = "0101…01"      # 64 hex digits
//! custody = "0202…02"
//! fee_rate = 30          # basis points, optional
//! paused = false         # optional
//!
//! [messenger]
//! owner = "0101…01"
//! base_fee = 10          # optional
//! ```

use core::str::FromStr;

use serde::Deserialize;

use super::{MessengerConfig, RouterConfig};
use crate::error::RouterError;

/// Parsed and validated deployment parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentConfig {
    /// Pool engine section.
    pub router: RouterConfig,
    /// Message engine section.
    pub messenger: MessengerConfig,
}

impl DeploymentConfig {
    /// Parses a deployment file and validates both sections.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ConfigParse`] if the text is not valid TOML or does
    ///   not match the expected shape.
    /// - Any error of [`RouterConfig::validate`] or
    ///   [`MessengerConfig::validate`].
    pub fn from_toml_str(text: &str) -> crate::error::Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates both sections.
    ///
    /// # Errors
    ///
    /// The first validation error found.
    pub fn validate(&self) -> crate::error::Result<()> {
        self.router.validate()?;
        self.messenger.validate()
    }
}

impl FromStr for DeploymentConfig {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}

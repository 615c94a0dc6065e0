//! Configuration for the cross-chain message engine.

use serde::{Deserialize, Deserializer};

use crate::domain::{Amount, Identity};
use crate::error::RouterError;
use crate::messaging::DEFAULT_BASE_FEE;

/// Deployment parameters of a
/// [`CrossChainMessenger`](crate::messaging::CrossChainMessenger).
///
/// `base_fee` is the flat part of every message fee, added before the
/// bridge's per-byte rate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessengerConfig {
    owner: Identity,
    #[serde(default = "default_base_fee", deserialize_with = "base_fee_from_u64")]
    base_fee: Amount,
    #[serde(default)]
    paused: bool,
}

const fn default_base_fee() -> Amount {
    DEFAULT_BASE_FEE
}

// TOML integers are 64-bit.
fn base_fee_from_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Amount, D::Error> {
    u64::deserialize(deserializer).map(|fee| Amount::new(u128::from(fee)))
}

impl MessengerConfig {
    /// Creates a validated, unpaused `MessengerConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] if `owner` is the zero
    /// identity.
    pub fn new(owner: Identity, base_fee: Amount) -> crate::error::Result<Self> {
        let config = Self {
            owner,
            base_fee,
            paused: false,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the config with the initial pause flag set.
    #[must_use]
    pub const fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] if `owner` is the zero
    /// identity.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.owner.is_zero() {
            return Err(RouterError::InvalidConfiguration(
                "messenger owner is the zero identity",
            ));
        }
        Ok(())
    }

    /// Admin identity.
    #[must_use]
    pub const fn owner(&self) -> Identity {
        self.owner
    }

    /// Flat fee component.
    #[must_use]
    pub const fn base_fee(&self) -> Amount {
        self.base_fee
    }

    /// Whether messaging starts paused.
    #[must_use]
    pub const fn paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_owner_rejected() {
        assert!(MessengerConfig::new(Identity::zero(), Amount::new(10)).is_err());
    }

    #[test]
    fn accessors() {
        let owner = Identity::from_bytes([4; 32]);
        let cfg = MessengerConfig::new(owner, Amount::new(25)).map(|c| c.with_paused(true));
        assert_eq!(cfg.as_ref().map(MessengerConfig::owner).ok(), Some(owner));
        assert_eq!(cfg.as_ref().map(MessengerConfig::base_fee).ok(), Some(Amount::new(25)));
        assert_eq!(cfg.map(|c| c.paused()).ok(), Some(true));
    }
}

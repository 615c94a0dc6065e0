//! Configuration for the pool engine.

use serde::Deserialize;

use crate::domain::{BasisPoints, Identity};
use crate::error::RouterError;
use crate::pools::DEFAULT_FEE_RATE;

/// Deployment parameters of a [`LiquidityRouter`](crate::pools::LiquidityRouter).
///
/// # Validation
///
/// - `owner` is not the zero identity.
/// - `custody` differs from `owner`.
/// - `fee_rate` does not exceed [`MAX_FEE_RATE`](crate::domain::MAX_FEE_RATE).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    owner: Identity,
    custody: Identity,
    #[serde(default = "default_fee_rate")]
    fee_rate: BasisPoints,
    #[serde(default)]
    paused: bool,
}

const fn default_fee_rate() -> BasisPoints {
    DEFAULT_FEE_RATE
}

impl RouterConfig {
    /// Creates a validated, unpaused `RouterConfig`.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn new(
        owner: Identity,
        custody: Identity,
        fee_rate: BasisPoints,
    ) -> crate::error::Result<Self> {
        let config = Self {
            owner,
            custody,
            fee_rate,
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
    /// - [`RouterError::InvalidConfiguration`] for a zero owner or a
    ///   custody account equal to the owner.
    /// - [`RouterError::InvalidAmount`] for a fee rate above the cap.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.owner.is_zero() {
            return Err(RouterError::InvalidConfiguration("router owner is the zero identity"));
        }
        if self.custody == self.owner {
            return Err(RouterError::InvalidConfiguration("custody must differ from owner"));
        }
        self.fee_rate.ensure_fee_rate()?;
        Ok(())
    }

    /// Admin identity.
    #[must_use]
    pub const fn owner(&self) -> Identity {
        self.owner
    }

    /// Identity holding pooled assets.
    #[must_use]
    pub const fn custody(&self) -> Identity {
        self.custody
    }

    /// Initial swap fee.
    #[must_use]
    pub const fn fee_rate(&self) -> BasisPoints {
        self.fee_rate
    }

    /// Whether the router starts paused.
    #[must_use]
    pub const fn paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const OWNER: Identity = Identity::from_bytes([1; 32]);
    const CUSTODY: Identity = Identity::from_bytes([2; 32]);

    #[test]
    fn valid_config() {
        let Ok(cfg) = RouterConfig::new(OWNER, CUSTODY, BasisPoints::new(30)) else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.owner(), OWNER);
        assert_eq!(cfg.custody(), CUSTODY);
        assert!(!cfg.paused());
        assert!(cfg.with_paused(true).paused());
    }

    #[test]
    fn zero_owner_rejected() {
        assert!(matches!(
            RouterConfig::new(Identity::zero(), CUSTODY, BasisPoints::new(30)),
            Err(RouterError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn custody_equal_to_owner_rejected() {
        assert!(RouterConfig::new(OWNER, OWNER, BasisPoints::new(30)).is_err());
    }

    #[test]
    fn fee_above_cap_rejected() {
        assert!(matches!(
            RouterConfig::new(OWNER, CUSTODY, BasisPoints::new(1_001)),
            Err(RouterError::InvalidAmount(_))
        ));
    }
}

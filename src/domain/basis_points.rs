//! Basis-point fee rates.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::RouterError;

/// Denominator of a basis-point rate (10 000 bp = 100%).
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Highest swap fee rate the owner may configure (1 000 bp = 10%).
pub const MAX_FEE_RATE: BasisPoints = BasisPoints(1_000);

/// A rate expressed in basis points (1 bp = 0.01%).
///
/// Used for the process-wide swap fee.  Construction is unchecked; the
/// admin surface rejects anything above [`MAX_FEE_RATE`] through
/// [`ensure_fee_rate`](Self::ensure_fee_rate).
///
/// # Examples
///
/// ```
/// use liquidity_router::domain::{Amount, BasisPoints};
///
/// let fee = BasisPoints::new(300); // 3%
/// let net = fee.deduct_from(Amount::new(10)).expect("no overflow");
/// assert_eq!(net, Amount::new(9));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points.
    pub const ZERO: Self = Self(0);

    /// Creates a new `BasisPoints` from a raw value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Validates the rate against [`MAX_FEE_RATE`].
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidAmount`] if the rate exceeds the cap.
    pub fn ensure_fee_rate(self) -> crate::error::Result<Self> {
        if self.0 > MAX_FEE_RATE.0 {
            return Err(RouterError::InvalidAmount("fee rate above maximum"));
        }
        Ok(self)
    }

    /// Computes `amount × self / 10 000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the product overflows.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let Some(product) = amount.get().checked_mul(u128::from(self.0)) else {
            return Err(RouterError::Overflow("basis points apply overflow"));
        };
        let q = product / BPS_DENOMINATOR;
        if rounding.is_up() && product % BPS_DENOMINATOR != 0 {
            return Ok(Amount::new(q + 1));
        }
        Ok(Amount::new(q))
    }

    /// Returns `amount` with the fee taken out, floored:
    /// `amount − ceil(amount × self / 10 000)`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Overflow`] if the fee product overflows.
    /// - [`RouterError::Underflow`] if the rate exceeds 100%.
    pub fn deduct_from(&self, amount: Amount) -> crate::error::Result<Amount> {
        let fee = self.apply(amount, Rounding::Up)?;
        amount
            .checked_sub(&fee)
            .ok_or(RouterError::Underflow("fee exceeds amount"))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

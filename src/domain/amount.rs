//! Raw asset amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Rounding;

/// A raw asset amount in the asset's smallest unit.
///
/// Reserves, deposits, swap outputs, route limits and message fees are all
/// `Amount`s.  Arithmetic is unsigned and checked: every method returns
/// `None` on overflow, underflow or division by zero instead of wrapping.
///
/// # Examples
///
/// ```
/// use liquidity_router::domain::{Amount, Rounding};
///
/// let reserve = Amount::new(100);
/// let deposit = Amount::new(10);
/// assert_eq!(reserve.checked_add(&deposit), Some(Amount::new(110)));
/// assert_eq!(reserve.checked_div(&Amount::new(3), Rounding::Down), Some(Amount::new(33)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.  Ceiling division never
    /// overflows: it is computed as `q + (r != 0)`.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        let q = self.0 / divisor.0;
        match rounding {
            Rounding::Down => Some(Self(q)),
            Rounding::Up => {
                if self.0 % divisor.0 != 0 {
                    Some(Self(q + 1))
                } else {
                    Some(Self(q))
                }
            }
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_default_agree() {
        assert_eq!(Amount::default(), Amount::ZERO);
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn add_overflow_is_none() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
        assert_eq!(
            Amount::new(2).checked_add(&Amount::new(3)),
            Some(Amount::new(5))
        );
    }

    #[test]
    fn sub_underflow_is_none() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
        assert_eq!(Amount::new(7).checked_sub(&Amount::new(7)), Some(Amount::ZERO));
    }

    #[test]
    fn mul_overflow_is_none() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
        assert_eq!(
            Amount::new(97).checked_mul(&Amount::new(100)),
            Some(Amount::new(9_700))
        );
    }

    #[test]
    fn div_rounds_in_requested_direction() {
        let n = Amount::new(900);
        let d = Amount::new(109);
        assert_eq!(n.checked_div(&d, Rounding::Down), Some(Amount::new(8)));
        assert_eq!(n.checked_div(&d, Rounding::Up), Some(Amount::new(9)));
    }

    #[test]
    fn div_exact_has_no_rounding_bump() {
        let n = Amount::new(100);
        let d = Amount::new(10);
        assert_eq!(n.checked_div(&d, Rounding::Up), Some(Amount::new(10)));
    }

    #[test]
    fn div_by_zero_is_none() {
        assert_eq!(Amount::new(5).checked_div(&Amount::ZERO, Rounding::Down), None);
        assert_eq!(Amount::new(5).checked_div(&Amount::ZERO, Rounding::Up), None);
    }

    #[test]
    fn ceil_div_at_max_does_not_overflow() {
        let ceil = Amount::MAX.checked_div(&Amount::new(2), Rounding::Up);
        assert_eq!(ceil, Some(Amount::new(u128::MAX / 2 + 1)));
    }

    #[test]
    fn serializes_as_bare_number() {
        let Ok(json) = serde_json::to_string(&Amount::new(42)) else {
            panic!("serialize");
        };
        assert_eq!(json, "42");
    }
}

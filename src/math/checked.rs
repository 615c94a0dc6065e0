//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning `checked_*` methods
//! of [`Amount`] and [`Shares`] into [`RouterError`]s, so engine code can
//! chain them with `?` and report which step failed.
//!
//! # Examples
//!
//! ```
//! use liquidity_router::domain::Amount;
//! use liquidity_router::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(100);
//! let after = reserve.safe_add(&Amount::new(10)).and_then(|r| r.safe_sub(&Amount::new(8)));
//! assert_eq!(after.ok(), Some(Amount::new(102)));
//! ```

use crate::domain::{Amount, Rounding, Shares};
use crate::error::RouterError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the result exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, RouterError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, RouterError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the result exceeds `u128`.
    fn safe_mul(&self, other: &Self) -> Result<Self, RouterError>;

    /// Checked division with explicit [`Rounding`].
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, RouterError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, RouterError> {
        self.checked_add(other)
            .ok_or(RouterError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, RouterError> {
        self.checked_sub(other)
            .ok_or(RouterError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, RouterError> {
        self.checked_mul(other)
            .ok_or(RouterError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, RouterError> {
        self.checked_div(other, rounding)
            .ok_or(RouterError::DivisionByZero)
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, RouterError> {
        self.checked_add(other)
            .ok_or(RouterError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, RouterError> {
        self.checked_sub(other)
            .ok_or(RouterError::Underflow("share subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, RouterError> {
        self.get()
            .checked_mul(other.get())
            .map(Shares::new)
            .ok_or(RouterError::Overflow("share multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, RouterError> {
        Amount::new(self.get())
            .checked_div(&Amount::new(other.get()), rounding)
            .map(|q| Shares::new(q.get()))
            .ok_or(RouterError::DivisionByZero)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    mod amount {
        use super::*;

        #[test]
        fn add_overflow() {
            let Err(RouterError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
                panic!("expected Overflow");
            };
        }

        #[test]
        fn sub_underflow() {
            let Err(RouterError::Underflow(_)) = Amount::new(1).safe_sub(&Amount::new(2)) else {
                panic!("expected Underflow");
            };
        }

        #[test]
        fn mul_ok() {
            let Ok(r) = Amount::new(9).safe_mul(&Amount::new(100)) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Amount::new(900));
        }

        #[test]
        fn div_by_zero() {
            let Err(RouterError::DivisionByZero) =
                Amount::new(1).safe_div(&Amount::ZERO, Rounding::Down)
            else {
                panic!("expected DivisionByZero");
            };
        }
    }

    mod shares {
        use super::*;

        #[test]
        fn add_and_sub() {
            let Ok(r) = Shares::new(100).safe_add(&Shares::new(5)) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Shares::new(105));
            let Err(RouterError::Underflow(_)) = Shares::ZERO.safe_sub(&Shares::new(1)) else {
                panic!("expected Underflow");
            };
        }

        #[test]
        fn div_rounds() {
            let Ok(r) = Shares::new(10).safe_div(&Shares::new(3), Rounding::Up) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Shares::new(4));
        }

        #[test]
        fn mul_overflow() {
            let Err(RouterError::Overflow(_)) = Shares::new(u128::MAX).safe_mul(&Shares::new(2))
            else {
                panic!("expected Overflow");
            };
        }
    }
}

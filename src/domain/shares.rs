//! Pool share units.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};

/// Units of proportional claim on a pool's reserves.
///
/// Shares are distinct from [`Amount`]: an `Amount` counts units of one
/// asset, `Shares` count a fraction of a whole pool.  Pools mint shares on
/// deposit and never burn them.
///
/// # Examples
///
/// ```
/// use liquidity_router::domain::Shares;
///
/// let minted = Shares::new(100);
/// assert_eq!(minted.checked_add(&Shares::new(5)), Some(Shares::new(105)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
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

    /// Computes `amount × self / reserve`, the share count a deposit of
    /// `amount` against `reserve` is worth.
    ///
    /// Returns `None` on overflow or when `reserve` is zero.
    #[must_use]
    pub const fn pro_rata(
        &self,
        amount: &Amount,
        reserve: &Amount,
        rounding: Rounding,
    ) -> Option<Self> {
        let Some(product) = amount.get().checked_mul(self.0) else {
            return None;
        };
        match Amount::new(product).checked_div(reserve, rounding) {
            Some(v) => Some(Self(v.get())),
            None => None,
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Outcome of a swap.

use serde::Serialize;

use super::Amount;
use crate::error::RouterError;

/// Amounts exchanged by a swap, and the fee withheld from the input.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in`.
///
/// # Examples
///
/// ```
/// use liquidity_router::domain::{Amount, SwapResult};
///
/// let result = SwapResult::new(Amount::new(10), Amount::new(8), Amount::new(1));
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SwapResult {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapResult {
    /// Creates a validated `SwapResult`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidAmount`] if either amount is zero or
    /// the fee is not below `amount_in`.
    pub fn new(amount_in: Amount, amount_out: Amount, fee: Amount) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(RouterError::InvalidAmount("amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(RouterError::InvalidAmount("amount_out rounds to zero"));
        }
        if fee >= amount_in {
            return Err(RouterError::InvalidAmount("fee must be less than amount_in"));
        }
        Ok(Self {
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Input taken from the trader.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Output paid to the trader.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Portion of the input withheld as fee.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

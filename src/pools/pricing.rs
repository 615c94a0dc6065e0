//! Constant-product pricing and share-minting math.
//!
//! Pure functions over reserves; nothing here touches pool state.
//!
//! # Swap Algorithm
//!
//! 1. `net_input = floor(amount_in × (10 000 − fee_rate) / 10 000)`
//! 2. `amount_out = floor(net_input × reserve_out / (reserve_in + net_input))`
//! 3. `fee = amount_in − net_input` stays in the pool.
//!
//! The fee is taken first and only the last division truncates the
//! output, so `(100, 100)` at 300 bp turns an input of 10 into 9 and then
//! into an output of `900 / 109 = 8`.
//!
//! # Shares
//!
//! | Deposit | Minted |
//! |---------|--------|
//! | first (creation) | `(amount_a + amount_b) / 2` |
//! | later | `min(amount_a × S / reserve_a, amount_b × S / reserve_b)` |

use crate::domain::{Amount, BasisPoints, Rounding, Shares};
use crate::error::RouterError;
use crate::math::CheckedArithmetic;

/// Output and fee of selling `amount_in` into a pool.
///
/// Returns `(amount_out, fee)`.  An input too small to survive the fee
/// yields an output of zero; rejecting that is the caller's business.
///
/// # Errors
///
/// - [`RouterError::Overflow`] if an intermediate product overflows.
/// - [`RouterError::DivisionByZero`] if both `reserve_in` and the net input
///   are zero.
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee_rate: BasisPoints,
) -> crate::error::Result<(Amount, Amount)> {
    let net_input = fee_rate.deduct_from(amount_in)?;
    let fee = amount_in.safe_sub(&net_input)?;
    if net_input.is_zero() {
        return Ok((Amount::ZERO, fee));
    }
    let numerator = net_input.safe_mul(&reserve_out)?;
    let denominator = reserve_in.safe_add(&net_input)?;
    let amount_out = numerator.safe_div(&denominator, Rounding::Down)?;
    Ok((amount_out, fee))
}

/// Shares minted for the deposit that creates a pool: the floor of the
/// arithmetic mean of the two amounts.
///
/// Computed without forming `amount_a + amount_b`, so it cannot overflow.
#[must_use]
pub const fn initial_shares(amount_a: Amount, amount_b: Amount) -> Shares {
    let a = amount_a.get();
    let b = amount_b.get();
    Shares::new(a / 2 + b / 2 + (a % 2 + b % 2) / 2)
}

/// Shares minted for a deposit into an existing pool.
///
/// # Errors
///
/// - [`RouterError::Overflow`] if `amount × total_shares` overflows.
/// - [`RouterError::DivisionByZero`] if a reserve is zero.
pub fn proportional_shares(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
) -> crate::error::Result<Shares> {
    let share_a = pro_rata(&total_shares, amount_a, reserve_a)?;
    let share_b = pro_rata(&total_shares, amount_b, reserve_b)?;
    Ok(core::cmp::min(share_a, share_b))
}

fn pro_rata(total: &Shares, amount: Amount, reserve: Amount) -> crate::error::Result<Shares> {
    if reserve.is_zero() {
        return Err(RouterError::DivisionByZero);
    }
    total
        .pro_rata(&amount, &reserve, Rounding::Down)
        .ok_or(RouterError::Overflow("share numerator overflow"))
}

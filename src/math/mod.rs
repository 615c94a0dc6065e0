//! Overflow-safe arithmetic for pool and fee calculations.
//!
//! All pricing and share math runs on `u128` through
//! [`CheckedArithmetic`], with every division naming its
//! [`Rounding`](crate::domain::Rounding).

mod checked;

pub use checked::CheckedArithmetic;

//! Ordered pair of distinct assets.

use super::AssetId;
use crate::error::RouterError;

/// Two distinct assets in the order the caller supplied them.
///
/// Unlike a canonical pair, `(A, B)` and `(B, A)` are different keys: a
/// pool created as `(A, B)` is found by swaps that name `A` first and by
/// nothing else.
///
/// # Examples
///
/// ```
/// use liquidity_router::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(b, a).expect("distinct");
/// assert_eq!(pair.first(), b);
/// assert_ne!(pair, pair.reversed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    first: AssetId,
    second: AssetId,
}

impl AssetPair {
    /// Creates an ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidAmount`] if both sides are the same
    /// asset.
    pub fn new(first: AssetId, second: AssetId) -> crate::error::Result<Self> {
        if first == second {
            return Err(RouterError::InvalidAmount("pair requires two distinct assets"));
        }
        Ok(Self { first, second })
    }

    /// Returns the first asset as supplied.
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.first
    }

    /// Returns the second asset as supplied.
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.second
    }

    /// Returns the same assets in the opposite order.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

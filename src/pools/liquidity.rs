//! Provider share balances per pool.

use std::collections::HashMap;

use crate::domain::{Identity, PoolId, Shares};
use crate::math::CheckedArithmetic;

/// Share balances keyed by `(pool, provider)`.
///
/// Positions are created lazily on first deposit and only ever grow.
#[derive(Debug, Clone, Default)]
pub struct LiquidityBook {
    positions: HashMap<(PoolId, Identity), Shares>,
}

impl LiquidityBook {
    /// Empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shares `provider` holds in `pool`; zero if it never deposited.
    #[must_use]
    pub fn position(&self, pool: PoolId, provider: &Identity) -> Shares {
        self.positions
            .get(&(pool, *provider))
            .copied()
            .unwrap_or_default()
    }

    /// Balance `provider` would hold after being credited `minted`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`](crate::error::RouterError::Overflow)
    /// if the balance would exceed `u128`.
    pub fn balance_after_credit(
        &self,
        pool: PoolId,
        provider: &Identity,
        minted: Shares,
    ) -> crate::error::Result<Shares> {
        self.position(pool, provider).safe_add(&minted)
    }

    pub(crate) fn set(&mut self, pool: PoolId, provider: Identity, balance: Shares) {
        self.positions.insert((pool, provider), balance);
    }

    /// Number of non-empty positions across all pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no provider has deposited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LP: Identity = Identity::from_bytes([5; 32]);

    #[test]
    fn missing_position_is_zero() {
        let book = LiquidityBook::new();
        assert_eq!(book.position(PoolId::new(1), &LP), Shares::ZERO);
        assert!(book.is_empty());
    }

    #[test]
    fn credit_accumulates_per_pool() {
        let mut book = LiquidityBook::new();
        book.set(PoolId::new(1), LP, Shares::new(10));
        assert_eq!(
            book.balance_after_credit(PoolId::new(1), &LP, Shares::new(5)).ok(),
            Some(Shares::new(15))
        );
        assert_eq!(
            book.balance_after_credit(PoolId::new(2), &LP, Shares::new(5)).ok(),
            Some(Shares::new(5))
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn credit_overflow() {
        let mut book = LiquidityBook::new();
        book.set(PoolId::new(1), LP, Shares::new(u128::MAX));
        assert!(book
            .balance_after_credit(PoolId::new(1), &LP, Shares::new(1))
            .is_err());
    }
}

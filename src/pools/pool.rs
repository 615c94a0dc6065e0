//! Pool state record.

use serde::Serialize;

use crate::domain::{Amount, AssetId, NetworkTag, PoolId, Shares};

/// Which side of a pool an asset sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `asset_a` / `reserve_a`.
    A,
    /// `asset_b` / `reserve_b`.
    B,
}

/// A reserve pair plus its share supply.
///
/// # Invariants
///
/// - `asset_a != asset_b`.
/// - `reserve_a > 0`, `reserve_b > 0` and `total_shares > 0` from creation on.
/// - Reserves only change through swaps and deposits; pools are never
///   removed from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pool {
    id: PoolId,
    asset_a: AssetId,
    asset_b: AssetId,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    network: NetworkTag,
    active: bool,
}

impl Pool {
    pub(crate) fn new(
        id: PoolId,
        asset_a: AssetId,
        asset_b: AssetId,
        reserve_a: Amount,
        reserve_b: Amount,
        total_shares: Shares,
        network: NetworkTag,
    ) -> Self {
        Self {
            id,
            asset_a,
            asset_b,
            reserve_a,
            reserve_b,
            total_shares,
            network,
            active: true,
        }
    }

    /// Pool identifier.
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// First asset, as supplied at creation.
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Second asset, as supplied at creation.
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Reserve of `asset_a`.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of `asset_b`.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Outstanding shares.
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Network the pool lives on.
    pub const fn network(&self) -> &NetworkTag {
        &self.network
    }

    /// Whether the pool accepts swaps and deposits.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Locates `asset` in the pool.
    #[must_use]
    pub fn side_of(&self, asset: &AssetId) -> Option<Side> {
        if *asset == self.asset_a {
            Some(Side::A)
        } else if *asset == self.asset_b {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Reserve on `side`.
    pub const fn reserve(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// Returns `(reserve_in, reserve_out)` for a trade selling the asset
    /// on `side_in`.
    pub const fn reserves_for(&self, side_in: Side) -> (Amount, Amount) {
        match side_in {
            Side::A => (self.reserve_a, self.reserve_b),
            Side::B => (self.reserve_b, self.reserve_a),
        }
    }

    pub(crate) fn set_reserves(&mut self, reserve_a: Amount, reserve_b: Amount) {
        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
    }

    pub(crate) fn set_total_shares(&mut self, total_shares: Shares) {
        self.total_shares = total_shares;
    }
}

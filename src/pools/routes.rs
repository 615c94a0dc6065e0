//! Chain routes used for off-chain transfer-cost estimates.
//!
//! Routes are advisory: swaps never consult them.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{Amount, NetworkTag, Rounding};
use crate::error::RouterError;
use crate::math::CheckedArithmetic;

/// Denominator of a route fee multiplier (1 000 = 100%).
pub const ROUTE_FEE_DENOMINATOR: u128 = 1_000;

/// Fee schedule and limits for moving value from one network to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainRoute {
    fee_multiplier: u32,
    min_amount: Amount,
    max_amount: Amount,
    active: bool,
}

impl ChainRoute {
    /// Creates an active route.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidAmount`] if `min_amount > max_amount`.
    pub fn new(
        fee_multiplier: u32,
        min_amount: Amount,
        max_amount: Amount,
    ) -> crate::error::Result<Self> {
        if min_amount > max_amount {
            return Err(RouterError::InvalidAmount("route minimum above maximum"));
        }
        Ok(Self {
            fee_multiplier,
            min_amount,
            max_amount,
            active: true,
        })
    }

    /// Returns the route with its active flag set to `active`.
    #[must_use]
    pub const fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Fee per mille of the transferred amount.
    #[must_use]
    pub const fn fee_multiplier(&self) -> u32 {
        self.fee_multiplier
    }

    /// Smallest amount the route accepts.
    #[must_use]
    pub const fn min_amount(&self) -> Amount {
        self.min_amount
    }

    /// Largest amount the route accepts.
    #[must_use]
    pub const fn max_amount(&self) -> Amount {
        self.max_amount
    }

    /// Whether estimates may use this route.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Prices a transfer of `amount` along this route.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidAmount`] if `amount` is outside
    ///   `[min_amount, max_amount]` or the fee exceeds it.
    /// - [`RouterError::Overflow`] if `amount × fee_multiplier` overflows.
    pub fn estimate(&self, amount: Amount) -> crate::error::Result<RouteEstimate> {
        if amount < self.min_amount || amount > self.max_amount {
            return Err(RouterError::InvalidAmount("amount outside route limits"));
        }
        let fee = amount
            .safe_mul(&Amount::new(u128::from(self.fee_multiplier)))?
            .safe_div(&Amount::new(ROUTE_FEE_DENOMINATOR), Rounding::Down)?;
        let amount_after_fee = amount
            .checked_sub(&fee)
            .ok_or(RouterError::InvalidAmount("route fee exceeds amount"))?;
        Ok(RouteEstimate {
            fee,
            amount_after_fee,
        })
    }
}

/// Cost of a transfer along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEstimate {
    /// Fee charged by the route.
    pub fee: Amount,
    /// What arrives on the destination network.
    pub amount_after_fee: Amount,
}

/// Routes keyed by `(from, to)`. Re-registration replaces.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<(NetworkTag, NetworkTag), ChainRoute>,
}

impl RouteTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route from `from` to `to`, if registered.
    #[must_use]
    pub fn get(&self, from: &NetworkTag, to: &NetworkTag) -> Option<&ChainRoute> {
        self.routes.get(&(from.clone(), to.clone()))
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no route is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Stores `route` for `(from, to)`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidChain`] if `from == to`.
    pub(crate) fn insert(
        &mut self,
        from: NetworkTag,
        to: NetworkTag,
        route: ChainRoute,
    ) -> crate::error::Result<()> {
        if from == to {
            return Err(RouterError::InvalidChain("route must connect two networks"));
        }
        self.routes.insert((from, to), route);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn route(mult: u32, min: u128, max: u128) -> ChainRoute {
        let Ok(r) = ChainRoute::new(mult, Amount::new(min), Amount::new(max)) else {
            panic!("valid route");
        };
        r
    }

    fn net(s: &str) -> NetworkTag {
        let Ok(t) = NetworkTag::new(s) else {
            panic!("valid tag");
        };
        t
    }

    #[test]
    fn min_above_max_rejected() {
        assert!(matches!(
            ChainRoute::new(5, Amount::new(10), Amount::new(9)),
            Err(RouterError::InvalidAmount(_))
        ));
    }

    #[test]
    fn estimate_floors_fee() {
        // 1 234 × 5 / 1 000 = 6.17
        let Ok(est) = route(5, 1, 10_000).estimate(Amount::new(1_234)) else {
            panic!("estimate");
        };
        assert_eq!(est.fee, Amount::new(6));
        assert_eq!(est.amount_after_fee, Amount::new(1_228));
    }

    #[test]
    fn estimate_enforces_limits() {
        let r = route(5, 100, 200);
        assert!(r.estimate(Amount::new(99)).is_err());
        assert!(r.estimate(Amount::new(201)).is_err());
        assert!(r.estimate(Amount::new(100)).is_ok());
        assert!(r.estimate(Amount::new(200)).is_ok());
    }

    #[test]
    fn fee_above_amount_rejected() {
        assert!(matches!(
            route(2_000, 0, 100).estimate(Amount::new(50)),
            Err(RouterError::InvalidAmount("route fee exceeds amount"))
        ));
    }

    #[test]
    fn self_route_rejected() {
        let mut table = RouteTable::new();
        assert!(matches!(
            table.insert(net("eth"), net("eth"), route(1, 0, 1)),
            Err(RouterError::InvalidChain(_))
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn reregistration_replaces() {
        let mut table = RouteTable::new();
        assert!(table.insert(net("eth"), net("dot"), route(1, 0, 1)).is_ok());
        assert!(table.insert(net("eth"), net("dot"), route(7, 0, 1)).is_ok());
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get(&net("eth"), &net("dot")).map(ChainRoute::fee_multiplier),
            Some(7)
        );
        assert!(table.get(&net("dot"), &net("eth")).is_none());
    }
}

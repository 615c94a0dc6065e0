//! The pool engine and its admin surface.
//!
//! [`LiquidityRouter`] owns the pool registry, the provider positions, the
//! route table, the registered asset handles, the process-wide swap fee and
//! the router's pause switch.
//!
//! # Operation Order
//!
//! Every state-changing call runs the same phases:
//!
//! 1. **Check**: pause flag, caller rights, arguments, registry state.
//! 2. **Compute**: prices, shares and every post-call value, with checked
//!    arithmetic, before anything moves.
//! 3. **Settle**: move assets through the registered [`Asset`] handles,
//!    reversing the first leg if the second fails.
//! 4. **Commit**: write the precomputed values.  Nothing here can fail.
//! 5. **Emit**: append one [`Event`] and log at `info`.
//!
//! A failure in phases 1–3 returns before phase 4, so registries are
//! untouched.  Handles are lent out for the duration of the transfers
//! only, and an asset cannot re-enter the router mid-operation.

use super::pricing::{get_amount_out, initial_shares, proportional_shares};
use super::registry::{PoolKey, PoolRegistry};
use super::routes::{ChainRoute, RouteEstimate, RouteTable};
use super::settlement::{settle, Leg};
use super::{LiquidityBook, Pool};
use crate::assets::AssetBook;
use crate::config::RouterConfig;
use crate::context::CallContext;
use crate::domain::{
    Amount, AssetId, AssetPair, BasisPoints, Identity, NetworkTag, PoolId, Shares, SwapResult,
};
use crate::error::RouterError;
use crate::events::{Event, EventLog, EventRecord, Subsystem};
use crate::governance::Governance;
use crate::math::CheckedArithmetic;
use crate::traits::{Asset, FromConfig};

/// Swap fee applied when none is configured: 30 bp.
pub const DEFAULT_FEE_RATE: BasisPoints = BasisPoints::new(30);

const CREATE_MEMO: &[u8] = b"create_pool";
const SWAP_MEMO: &[u8] = b"swap";
const DEPOSIT_MEMO: &[u8] = b"add_liquidity";

/// Constant-product pool engine.
///
/// Pooled assets are held by the `custody` identity on each asset; the
/// router only tracks reserves and shares.  Pool operations name assets by
/// [`AssetId`] and move them through the handle the owner registered under
/// that id.
///
/// # Example
///
/// ```rust
/// use liquidity_router::assets::LedgerAsset;
/// use liquidity_router::context::CallContext;
/// use liquidity_router::domain::{Amount, AssetId, BasisPoints, Identity, NetworkTag};
/// use liquidity_router::pools::LiquidityRouter;
///
/// let owner = Identity::from_bytes([1; 32]);
/// let custody = Identity::from_bytes([2; 32]);
/// let lp = Identity::from_bytes([3; 32]);
/// let net = NetworkTag::new("ethereum").expect("tag");
///
/// let mut usdc = LedgerAsset::new(AssetId::from_bytes([10; 32]), "USD Coin", "USDC", 6);
/// let mut weth = LedgerAsset::new(AssetId::from_bytes([11; 32]), "Wrapped Ether", "WETH", 18);
/// usdc.mint(&lp, Amount::new(1_000)).expect("mint");
/// weth.mint(&lp, Amount::new(1_000)).expect("mint");
///
/// let admin = CallContext::new(owner, 1);
/// let mut router = LiquidityRouter::new(owner, custody);
/// router.set_fee_rate(&admin, BasisPoints::new(300)).expect("owner");
/// let usdc = router.register_asset(&admin, Box::new(usdc)).expect("usdc");
/// let weth = router.register_asset(&admin, Box::new(weth)).expect("weth");
///
/// let ctx = CallContext::new(lp, 2);
/// let id = router
///     .create_pool(&ctx, usdc, weth, Amount::new(100), Amount::new(100), &net)
///     .expect("created");
/// let swap = router
///     .swap_exact_in(&ctx, usdc, weth, Amount::new(10), Amount::new(8), &net)
///     .expect("swapped");
/// assert_eq!(swap.amount_out(), Amount::new(8));
/// assert_eq!(router.get_pool(id).map(|p| p.reserve_a()), Some(Amount::new(110)));
/// ```
#[derive(Debug)]
pub struct LiquidityRouter {
    governance: Governance,
    custody: Identity,
    fee_rate: BasisPoints,
    assets: AssetBook,
    pools: PoolRegistry,
    positions: LiquidityBook,
    routes: RouteTable,
    events: EventLog,
}

impl LiquidityRouter {
    /// Creates an unpaused router at [`DEFAULT_FEE_RATE`].
    #[must_use]
    pub fn new(owner: Identity, custody: Identity) -> Self {
        Self {
            governance: Governance::new(owner, false),
            custody,
            fee_rate: DEFAULT_FEE_RATE,
            assets: AssetBook::new(),
            pools: PoolRegistry::new(),
            positions: LiquidityBook::new(),
            routes: RouteTable::new(),
            events: EventLog::new(),
        }
    }

    // -- pool engine ---------------------------------------------------------

    /// Creates a pool for `(asset_a, asset_b, network)` seeded with the
    /// caller's deposit, and returns its id.
    ///
    /// The caller is credited `(amount_a + amount_b) / 2` shares, which is
    /// also the pool's whole initial supply.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Paused`] while the router is paused.
    /// - [`RouterError::InvalidAmount`] if an amount is zero or both assets
    ///   are the same.
    /// - [`RouterError::AssetNotFound`] if either asset is unregistered.
    /// - [`RouterError::PoolAlreadyExists`] if the key is taken.
    /// - [`RouterError::TransferFailed`] if either deposit is refused.
    /// - [`RouterError::ReversalFailed`] if the second deposit and the
    ///   return of the first are both refused.
    pub fn create_pool(
        &mut self,
        ctx: &CallContext,
        asset_a: AssetId,
        asset_b: AssetId,
        amount_a: Amount,
        amount_b: Amount,
        network: &NetworkTag,
    ) -> crate::error::Result<PoolId> {
        self.governance.ensure_active()?;
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(RouterError::InvalidAmount("deposit amounts must be positive"));
        }
        let pair = AssetPair::new(asset_a, asset_b)?;
        self.ensure_registered(&pair)?;
        let key = PoolKey::new(pair.first(), pair.second(), network);
        let pool_id = self.pools.allocate(&key).inspect_err(|_| {
            tracing::debug!(%asset_a, %asset_b, %network, "pool already exists");
        })?;
        let shares = initial_shares(amount_a, amount_b);

        let custody = self.custody;
        self.assets.with_pair(asset_a, asset_b, |a, b| {
            let deposit_a = Leg {
                from: &ctx.caller,
                to: &custody,
                amount: amount_a,
            };
            let deposit_b = Leg {
                from: &ctx.caller,
                to: &custody,
                amount: amount_b,
            };
            settle(a, deposit_a, b, deposit_b, CREATE_MEMO)
        })?;

        self.pools.insert(Pool::new(
            pool_id,
            pair.first(),
            pair.second(),
            amount_a,
            amount_b,
            shares,
            network.clone(),
        ));
        self.positions.set(pool_id, ctx.caller, shares);

        tracing::info!(
            pool_id = pool_id.get(),
            %asset_a,
            %asset_b,
            %network,
            %shares,
            "pool created"
        );
        self.events.emit(
            ctx.block_height,
            Event::PoolCreated {
                pool_id,
                asset_a,
                asset_b,
                network: network.clone(),
                initial_shares: shares,
                creator: ctx.caller,
            },
        );
        Ok(pool_id)
    }

    /// Sells exactly `amount_in` of `asset_in` for at least
    /// `min_amount_out` of `asset_out`.
    ///
    /// The pool is found by `(asset_in, asset_out, network)` in that
    /// order: a pool created as `(A, B)` only serves `A → B` swaps.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Paused`] while the router is paused.
    /// - [`RouterError::InvalidAmount`] if `amount_in` is zero or the
    ///   output truncates to zero.
    /// - [`RouterError::PoolNotFound`] if no active pool matches.
    /// - [`RouterError::SlippageExceeded`] if the output is below
    ///   `min_amount_out`.
    /// - [`RouterError::InsufficientLiquidity`] if the output would drain
    ///   the out-reserve.
    /// - [`RouterError::TransferFailed`] if either leg is refused.
    /// - [`RouterError::ReversalFailed`] if the payout and the refund of
    ///   the input are both refused.
    pub fn swap_exact_in(
        &mut self,
        ctx: &CallContext,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
        network: &NetworkTag,
    ) -> crate::error::Result<SwapResult> {
        self.governance.ensure_active()?;
        let (pool_id, result) = self.price_swap(asset_in, asset_out, amount_in, network)?;
        let amount_out = result.amount_out();
        if amount_out < min_amount_out {
            tracing::debug!(%amount_out, %min_amount_out, "swap below minimum output");
            return Err(RouterError::SlippageExceeded {
                amount_out,
                min_amount_out,
            });
        }

        let pool = self.pool(pool_id)?;
        let side_in = pool.side_of(&asset_in).ok_or(RouterError::PoolNotFound)?;
        let (reserve_in, reserve_out) = pool.reserves_for(side_in);
        if amount_out >= reserve_out {
            return Err(RouterError::InsufficientLiquidity);
        }
        let new_in = reserve_in.safe_add(&amount_in)?;
        let new_out = reserve_out.safe_sub(&amount_out)?;
        let (new_a, new_b) = match side_in {
            super::Side::A => (new_in, new_out),
            super::Side::B => (new_out, new_in),
        };

        let custody = self.custody;
        self.assets.with_pair(asset_in, asset_out, |input, output| {
            let pay_in = Leg {
                from: &ctx.caller,
                to: &custody,
                amount: amount_in,
            };
            let pay_out = Leg {
                from: &custody,
                to: &ctx.caller,
                amount: amount_out,
            };
            settle(input, pay_in, output, pay_out, SWAP_MEMO)
        })?;

        if let Some(pool) = self.pools.get_mut(pool_id) {
            pool.set_reserves(new_a, new_b);
        }

        tracing::info!(
            pool_id = pool_id.get(),
            trader = %ctx.caller,
            %amount_in,
            %amount_out,
            fee = %result.fee(),
            "swap executed"
        );
        self.events.emit(
            ctx.block_height,
            Event::Swap {
                pool_id,
                trader: ctx.caller,
                asset_in,
                asset_out,
                amount_in,
                amount_out,
                fee: result.fee(),
            },
        );
        Ok(result)
    }

    /// Deposits `(amount_a, amount_b)` into the pool for
    /// `(asset_a, asset_b, network)` and returns the shares minted.
    ///
    /// Minted shares are `min(amount_a × S / reserve_a,
    /// amount_b × S / reserve_b)`; any excess on the larger side is kept
    /// by the pool.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Paused`] while the router is paused.
    /// - [`RouterError::InvalidAmount`] if an amount is zero or the
    ///   deposit mints no shares.
    /// - [`RouterError::PoolNotFound`] if no active pool matches.
    /// - [`RouterError::TransferFailed`] if either deposit is refused.
    /// - [`RouterError::ReversalFailed`] if the second deposit and the
    ///   return of the first are both refused.
    pub fn add_liquidity(
        &mut self,
        ctx: &CallContext,
        asset_a: AssetId,
        asset_b: AssetId,
        amount_a: Amount,
        amount_b: Amount,
        network: &NetworkTag,
    ) -> crate::error::Result<Shares> {
        self.governance.ensure_active()?;
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(RouterError::InvalidAmount("deposit amounts must be positive"));
        }
        let pool_id = self.resolve(asset_a, asset_b, network)?;
        let pool = self.pool(pool_id)?;
        let minted = proportional_shares(
            amount_a,
            amount_b,
            pool.reserve_a(),
            pool.reserve_b(),
            pool.total_shares(),
        )?;
        if minted.is_zero() {
            tracing::debug!(pool_id = pool_id.get(), "deposit too small to mint shares");
            return Err(RouterError::InvalidAmount("deposit too small to mint shares"));
        }
        let new_a = pool.reserve_a().safe_add(&amount_a)?;
        let new_b = pool.reserve_b().safe_add(&amount_b)?;
        let new_total = pool.total_shares().safe_add(&minted)?;
        let new_position = self
            .positions
            .balance_after_credit(pool_id, &ctx.caller, minted)?;

        let custody = self.custody;
        self.assets.with_pair(asset_a, asset_b, |a, b| {
            let deposit_a = Leg {
                from: &ctx.caller,
                to: &custody,
                amount: amount_a,
            };
            let deposit_b = Leg {
                from: &ctx.caller,
                to: &custody,
                amount: amount_b,
            };
            settle(a, deposit_a, b, deposit_b, DEPOSIT_MEMO)
        })?;

        if let Some(pool) = self.pools.get_mut(pool_id) {
            pool.set_reserves(new_a, new_b);
            pool.set_total_shares(new_total);
        }
        self.positions.set(pool_id, ctx.caller, new_position);

        tracing::info!(
            pool_id = pool_id.get(),
            provider = %ctx.caller,
            %amount_a,
            %amount_b,
            %minted,
            "liquidity added"
        );
        self.events.emit(
            ctx.block_height,
            Event::LiquidityAdded {
                pool_id,
                provider: ctx.caller,
                amount_a,
                amount_b,
                shares_minted: minted,
            },
        );
        Ok(minted)
    }

    /// Prices a swap without executing it.  Ignores the pause flag.
    ///
    /// # Errors
    ///
    /// As [`swap_exact_in`](Self::swap_exact_in), minus the slippage and
    /// transfer errors.
    pub fn quote_swap(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        network: &NetworkTag,
    ) -> crate::error::Result<SwapResult> {
        self.price_swap(asset_in, asset_out, amount_in, network)
            .map(|(_, result)| result)
    }

    /// Estimates the cost of moving `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidChain`] if `from == to` or no active route
    ///   is registered.
    /// - [`RouterError::InvalidAmount`] if `amount` is outside the route's
    ///   limits.
    pub fn estimate_route(
        &self,
        from: &NetworkTag,
        to: &NetworkTag,
        amount: Amount,
    ) -> crate::error::Result<RouteEstimate> {
        if from == to {
            return Err(RouterError::InvalidChain("route must connect two networks"));
        }
        let route = self
            .routes
            .get(from, to)
            .filter(|r| r.is_active())
            .ok_or(RouterError::InvalidChain("no active route"))?;
        route.estimate(amount)
    }

    // -- admin ---------------------------------------------------------------

    /// Takes custody of an asset handle and returns the id pools will use
    /// for it.  Owner only.
    ///
    /// The id is read from the handle once, here.  Pool operations naming
    /// this id always go through this handle.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Unauthorized`] for a non-owner caller.
    /// - [`RouterError::InvalidConfiguration`] if the id is already taken.
    pub fn register_asset(
        &mut self,
        ctx: &CallContext,
        handle: Box<dyn Asset>,
    ) -> crate::error::Result<AssetId> {
        self.governance.ensure_owner(ctx)?;
        let symbol = handle.symbol().to_owned();
        let asset = self.assets.register(handle).inspect_err(|_| {
            tracing::warn!(%symbol, "asset id already registered");
        })?;
        tracing::info!(%asset, %symbol, "asset registered");
        self.events
            .emit(ctx.block_height, Event::AssetRegistered { asset, symbol });
        Ok(asset)
    }

    /// Registers or replaces the route from `from` to `to`. Owner only.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Unauthorized`] for a non-owner caller.
    /// - [`RouterError::InvalidChain`] if `from == to`.
    pub fn register_route(
        &mut self,
        ctx: &CallContext,
        from: NetworkTag,
        to: NetworkTag,
        route: ChainRoute,
    ) -> crate::error::Result<()> {
        self.governance.ensure_owner(ctx)?;
        let event = Event::RouteRegistered {
            from: from.clone(),
            to: to.clone(),
            fee_multiplier: route.fee_multiplier(),
            min_amount: route.min_amount(),
            max_amount: route.max_amount(),
        };
        self.routes.insert(from, to, route)?;
        tracing::info!(?event, "route registered");
        self.events.emit(ctx.block_height, event);
        Ok(())
    }

    /// Sets the process-wide swap fee. Owner only.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Unauthorized`] for a non-owner caller.
    /// - [`RouterError::InvalidAmount`] above
    ///   [`MAX_FEE_RATE`](crate::domain::MAX_FEE_RATE).
    pub fn set_fee_rate(
        &mut self,
        ctx: &CallContext,
        fee_rate: BasisPoints,
    ) -> crate::error::Result<()> {
        self.governance.ensure_owner(ctx)?;
        let new_rate = fee_rate.ensure_fee_rate()?;
        let old_rate = core::mem::replace(&mut self.fee_rate, new_rate);
        tracing::info!(%old_rate, %new_rate, "fee rate updated");
        self.events
            .emit(ctx.block_height, Event::FeeRateUpdated { old_rate, new_rate });
        Ok(())
    }

    /// Pauses or resumes the pool engine. Owner only.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Unauthorized`] for a non-owner caller.
    pub fn set_paused(&mut self, ctx: &CallContext, paused: bool) -> crate::error::Result<()> {
        self.governance.set_paused(ctx, paused)?;
        tracing::info!(paused, "router pause switched");
        self.events.emit(
            ctx.block_height,
            Event::PausedChanged {
                subsystem: Subsystem::Router,
                paused,
            },
        );
        Ok(())
    }

    /// Hands the admin surface to `new_owner`. Owner only.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Unauthorized`] for a non-owner caller.
    /// - [`RouterError::InvalidConfiguration`] for the zero identity.
    pub fn transfer_ownership(
        &mut self,
        ctx: &CallContext,
        new_owner: Identity,
    ) -> crate::error::Result<()> {
        let previous_owner = self.governance.transfer_ownership(ctx, new_owner)?;
        tracing::info!(%previous_owner, %new_owner, "router ownership transferred");
        self.events.emit(
            ctx.block_height,
            Event::OwnershipTransferred {
                subsystem: Subsystem::Router,
                previous_owner,
                new_owner,
            },
        );
        Ok(())
    }

    // -- queries -------------------------------------------------------------

    /// Handle registered under `id`.
    #[must_use]
    pub fn asset(&self, id: &AssetId) -> Option<&dyn Asset> {
        self.assets.get(id)
    }

    /// Registered asset handles.
    #[must_use]
    pub const fn assets(&self) -> &AssetBook {
        &self.assets
    }

    /// Pool by id.
    #[must_use]
    pub fn get_pool(&self, id: PoolId) -> Option<&Pool> {
        self.pools.get(id)
    }

    /// Id of the pool created as `(asset_a, asset_b)` on `network`.
    #[must_use]
    pub fn get_pool_id(
        &self,
        asset_a: AssetId,
        asset_b: AssetId,
        network: &NetworkTag,
    ) -> Option<PoolId> {
        self.pools.lookup(&PoolKey::new(asset_a, asset_b, network))
    }

    /// Shares `provider` holds in `pool`.
    #[must_use]
    pub fn get_position(&self, pool: PoolId, provider: &Identity) -> Shares {
        self.positions.position(pool, provider)
    }

    /// Route from `from` to `to`.
    #[must_use]
    pub fn get_route(&self, from: &NetworkTag, to: &NetworkTag) -> Option<&ChainRoute> {
        self.routes.get(from, to)
    }

    /// Iterates all pools in id order.
    pub fn pools(&self) -> impl Iterator<Item = &Pool> {
        self.pools.iter()
    }

    /// Number of pools created so far.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Id the next pool will receive.
    #[must_use]
    pub const fn next_pool_id(&self) -> PoolId {
        self.pools.next_id()
    }

    /// Current swap fee.
    #[must_use]
    pub const fn fee_rate(&self) -> BasisPoints {
        self.fee_rate
    }

    /// Whether the pool engine is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.governance.is_paused()
    }

    /// Current owner.
    #[must_use]
    pub const fn owner(&self) -> Identity {
        self.governance.owner()
    }

    /// Identity holding pooled assets.
    #[must_use]
    pub const fn custody(&self) -> Identity {
        self.custody
    }

    /// Events emitted since the last drain.
    #[must_use]
    pub fn events(&self) -> &[EventRecord] {
        self.events.records()
    }

    /// Takes all buffered events.
    pub fn drain_events(&mut self) -> Vec<EventRecord> {
        self.events.drain()
    }

    // -- internals -----------------------------------------------------------

    fn resolve(
        &self,
        first: AssetId,
        second: AssetId,
        network: &NetworkTag,
    ) -> crate::error::Result<PoolId> {
        let id = self
            .pools
            .lookup(&PoolKey::new(first, second, network))
            .ok_or(RouterError::PoolNotFound)?;
        if !self.pool(id)?.is_active() {
            return Err(RouterError::PoolNotFound);
        }
        Ok(id)
    }

    fn ensure_registered(&self, pair: &AssetPair) -> crate::error::Result<()> {
        if self.assets.contains(&pair.first()) && self.assets.contains(&pair.second()) {
            return Ok(());
        }
        Err(RouterError::AssetNotFound)
    }

    fn pool(&self, id: PoolId) -> crate::error::Result<&Pool> {
        self.pools.get(id).ok_or(RouterError::PoolNotFound)
    }

    fn price_swap(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        network: &NetworkTag,
    ) -> crate::error::Result<(PoolId, SwapResult)> {
        if amount_in.is_zero() {
            return Err(RouterError::InvalidAmount("amount_in must be positive"));
        }
        let pool_id = self.resolve(asset_in, asset_out, network)?;
        let pool = self.pool(pool_id)?;
        let side_in = pool.side_of(&asset_in).ok_or(RouterError::PoolNotFound)?;
        let (reserve_in, reserve_out) = pool.reserves_for(side_in);
        let (amount_out, fee) = get_amount_out(amount_in, reserve_in, reserve_out, self.fee_rate)?;
        let result = SwapResult::new(amount_in, amount_out, fee)?;
        Ok((pool_id, result))
    }
}

impl FromConfig<RouterConfig> for LiquidityRouter {
    fn from_config(config: &RouterConfig) -> crate::error::Result<Self> {
        config.validate()?;
        let mut router = Self::new(config.owner(), config.custody());
        router.fee_rate = config.fee_rate();
        router.governance = Governance::new(config.owner(), config.paused());
        Ok(router)
    }
}

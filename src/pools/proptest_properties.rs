//! Property-based tests for the pricing and share invariants.
//!
//! 1. **Product non-decreasing**: `reserve_a × reserve_b` never shrinks
//!    across a swap, and grows strictly when a fee is charged.
//! 2. **Output monotonicity**: output is non-decreasing in `amount_in` and
//!    in `reserve_out`.
//! 3. **Reserve movement**: the in-reserve grows by exactly `amount_in`,
//!    the out-reserve strictly shrinks.
//! 4. **Share bound**: a deposit never mints more than either side's
//!    proportional claim.
//! 5. **Creation round-trip**: a created pool reads back with the deposit
//!    as reserves and the floor mean as shares.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::pricing::{get_amount_out, initial_shares, proportional_shares};
use super::LiquidityRouter;
use crate::assets::LedgerAsset;
use crate::context::CallContext;
use crate::domain::{Amount, AssetId, BasisPoints, Identity, NetworkTag, PoolId, Shares};
use crate::error::RouterError;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const OWNER: Identity = Identity::from_bytes([0xAA; 32]);
const CUSTODY: Identity = Identity::from_bytes([0xCC; 32]);
const USER: Identity = Identity::from_bytes([0x11; 32]);

fn funded(byte: u8, amount: u128) -> LedgerAsset {
    let mut asset = LedgerAsset::new(AssetId::from_bytes([byte; 32]), "P", "P", 0);
    let Ok(()) = asset.mint(&USER, Amount::new(amount)) else {
        panic!("mint");
    };
    asset
}

/// Router holding `USER`'s pool `(ra, rb)`, plus the ids of its assets.
/// `USER` keeps `spare` of the first asset for trading.
fn seeded(ra: u128, rb: u128, spare: u128) -> (LiquidityRouter, AssetId, AssetId, PoolId) {
    let mut router = LiquidityRouter::new(OWNER, CUSTODY);
    let admin = CallContext::new(OWNER, 1);
    let Ok(a) = router.register_asset(&admin, Box::new(funded(1, ra + spare))) else {
        panic!("register a");
    };
    let Ok(b) = router.register_asset(&admin, Box::new(funded(2, rb))) else {
        panic!("register b");
    };
    let ctx = CallContext::new(USER, 2);
    let Ok(id) = router.create_pool(&ctx, a, b, Amount::new(ra), Amount::new(rb), &network())
    else {
        panic!("create");
    };
    (router, a, b, id)
}

fn custody_balance(router: &LiquidityRouter, asset: AssetId) -> Amount {
    router
        .asset(&asset)
        .map_or(Amount::ZERO, |handle| handle.balance_of(&CUSTODY))
}

fn network() -> NetworkTag {
    let Ok(tag) = NetworkTag::new("prop") else {
        panic!("valid tag");
    };
    tag
}

fn out(amount_in: u128, rin: u128, rout: u128, fee: u32) -> u128 {
    let Ok((o, _)) = get_amount_out(
        Amount::new(amount_in),
        Amount::new(rin),
        Amount::new(rout),
        BasisPoints::new(fee),
    ) else {
        panic!("pricing overflow in bounded strategy");
    };
    o.get()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Swap inputs up to a tenth of the largest reserve.
fn input_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000u128
}

/// Fee rates across the whole allowed range.
fn fee_strategy() -> impl Strategy<Value = u32> {
    0u32..=1_000u32
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_non_decreasing(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        amount_in in input_strategy(),
        fee in fee_strategy(),
    ) {
        let o = out(amount_in, rin, rout, fee);
        prop_assume!(o > 0);
        let before = rin * rout;
        let after = (rin + amount_in) * (rout - o);
        prop_assert!(after >= before, "k shrank: {} < {}", after, before);
        if fee > 0 {
            prop_assert!(after > before, "fee did not grow k");
        }
    }

    #[test]
    fn prop_output_monotonic_in_amount_in(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        amount_in in input_strategy(),
        extra in 1u128..=10_000u128,
        fee in fee_strategy(),
    ) {
        let small = out(amount_in, rin, rout, fee);
        let large = out(amount_in + extra, rin, rout, fee);
        prop_assert!(large >= small);
    }

    #[test]
    fn prop_output_monotonic_in_reserve_out(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        amount_in in input_strategy(),
        extra in 1u128..=10_000u128,
        fee in fee_strategy(),
    ) {
        let thin = out(amount_in, rin, rout, fee);
        let deep = out(amount_in, rin, rout + extra, fee);
        prop_assert!(deep >= thin);
    }

    #[test]
    fn prop_swap_moves_reserves(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in input_strategy(),
    ) {
        let (mut router, a, b, id) = seeded(ra, rb, amount_in);
        let ctx = CallContext::new(USER, 3);
        let res = match router.swap_exact_in(
            &ctx,
            a,
            b,
            Amount::new(amount_in),
            Amount::ZERO,
            &network(),
        ) {
            Ok(res) => res,
            // Dust inputs that price to zero are rejected.
            Err(RouterError::InvalidAmount(_)) => return Ok(()),
            Err(e) => panic!("unexpected swap error: {e}"),
        };
        let Some(pool) = router.get_pool(id) else {
            panic!("pool");
        };
        prop_assert_eq!(pool.reserve_a().get(), ra + amount_in);
        prop_assert_eq!(pool.reserve_b().get(), rb - res.amount_out().get());
        prop_assert!(pool.reserve_b().get() < rb);
        prop_assert_eq!(custody_balance(&router, a), pool.reserve_a());
        prop_assert_eq!(custody_balance(&router, b), pool.reserve_b());
    }

    #[test]
    fn prop_minted_shares_bounded(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in input_strategy(),
        db in input_strategy(),
    ) {
        let total = initial_shares(Amount::new(ra), Amount::new(rb));
        let Ok(minted) = proportional_shares(
            Amount::new(da),
            Amount::new(db),
            Amount::new(ra),
            Amount::new(rb),
            total,
        ) else {
            panic!("bounded inputs cannot overflow");
        };
        prop_assert!(minted.get() * ra <= da * total.get());
        prop_assert!(minted.get() * rb <= db * total.get());
    }

    #[test]
    fn prop_create_round_trip(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let (router, a, b, id) = seeded(ra, rb, 0);
        let Some(pool) = router.get_pool(id) else {
            panic!("pool");
        };
        prop_assert_eq!(pool.reserve_a(), Amount::new(ra));
        prop_assert_eq!(pool.reserve_b(), Amount::new(rb));
        prop_assert_eq!(pool.total_shares(), Shares::new((ra + rb) / 2));
        prop_assert_eq!(router.get_position(id, &USER), pool.total_shares());
        prop_assert_eq!(router.get_pool_id(a, b, &network()), Some(id));
    }
}

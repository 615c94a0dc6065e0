//! # Liquidity Router
//!
//! A constant-product liquidity router and a cross-chain message engine,
//! modelled as deterministic state transitions on a host ledger.
//!
//! Each public operation runs to completion or fails without touching any
//! registry.  Callers identify themselves through a
//! [`CallContext`](context::CallContext) that also carries the block
//! height; assets are moved through any implementation of the
//! [`Asset`](traits::Asset) collaborator trait.
//!
//! The crate contains two engines with independent owners and pause
//! switches:
//!
//! - **[`LiquidityRouter`](pools::LiquidityRouter)**: pool creation,
//!   exact-in swaps, proportional liquidity deposits, swap quotes and
//!   advisory cross-network route estimates.
//! - **[`CrossChainMessenger`](messaging::CrossChainMessenger)**: bridge
//!   and chain registration, message submission with per-byte fees,
//!   validator attestation and exactly-once processing.
//!
//! ## Create a pool and execute a swap
//!
//! ```rust
//! use liquidity_router::prelude::*;
//!
//! let owner = Identity::from_bytes([1; 32]);
//! let custody = Identity::from_bytes([2; 32]);
//! let trader = Identity::from_bytes([3; 32]);
//! let net = NetworkTag::new("ethereum").expect("valid tag");
//!
//! // 1. Two in-memory assets with a funded trader
//! let mut usdc = LedgerAsset::new(AssetId::from_bytes([10; 32]), "USD Coin", "USDC", 6);
//! let mut weth = LedgerAsset::new(AssetId::from_bytes([11; 32]), "Wrapped Ether", "WETH", 18);
//! usdc.mint(&trader, Amount::new(1_000_000)).expect("mint");
//! weth.mint(&trader, Amount::new(1_000_000)).expect("mint");
//!
//! // 2. A router built from its config, holding both assets
//! let config = RouterConfig::new(owner, custody, BasisPoints::new(30)).expect("valid config");
//! let mut router = LiquidityRouter::from_config(&config).expect("router");
//! let admin = CallContext::new(owner, 1);
//! let usdc = router.register_asset(&admin, Box::new(usdc)).expect("usdc");
//! let weth = router.register_asset(&admin, Box::new(weth)).expect("weth");
//!
//! // 3. Seed a pool and swap against it
//! let ctx = CallContext::new(trader, 2);
//! router
//!     .create_pool(&ctx, usdc, weth, Amount::new(100_000), Amount::new(100_000), &net)
//!     .expect("pool created");
//! let result = router
//!     .swap_exact_in(&ctx, usdc, weth, Amount::new(1_000), Amount::new(1), &net)
//!     .expect("swap succeeded");
//!
//! assert!(result.amount_out().get() > 0);
//! assert!(result.fee().get() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐        ┌──────────────────────┐
//! │  LiquidityRouter  │        │ CrossChainMessenger  │
//! └────────┬─────────┘        └──────────┬───────────┘
//!          │ Governance, EventLog        │ Governance, EventLog
//!          ▼                             ▼
//! ┌──────────────────┐        ┌──────────────────────┐
//! │ PoolRegistry     │        │ BridgeRegistry       │
//! │ LiquidityBook    │        │ ChainRegistry        │
//! │ RouteTable       │        │ MessageLedger        │
//! │ AssetBook        │        └──────────────────────┘
//! │ pricing (pure)   │
//! └────────┬─────────┘
//!          │ Asset trait, handles registered by the owner
//!          ▼
//! ┌──────────────────┐
//! │  Host assets     │  LedgerAsset, or any Asset impl
//! └──────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Identity`](domain::Identity), [`NetworkTag`](domain::NetworkTag), etc. |
//! | [`traits`] | Collaborator seams: [`Asset`](traits::Asset), [`FromConfig`](traits::FromConfig) |
//! | [`assets`] | [`LedgerAsset`](assets::LedgerAsset) and the router's [`AssetBook`](assets::AssetBook) |
//! | [`pools`] | Pool engine and [`LiquidityRouter`](pools::LiquidityRouter) |
//! | [`messaging`] | Message engine and [`CrossChainMessenger`](messaging::CrossChainMessenger) |
//! | [`governance`] | Owner gate and pause switch |
//! | [`context`] | Per-call caller and block height |
//! | [`events`] | Structured event records for indexers |
//! | [`config`] | Engine blueprints and TOML deployment files |
//! | [`math`] | Checked arithmetic |
//! | [`error`] | [`RouterError`](error::RouterError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod assets;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod events;
pub mod governance;
pub mod math;
pub mod messaging;
pub mod pools;
pub mod prelude;
pub mod traits;

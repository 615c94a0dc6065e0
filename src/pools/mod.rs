//! Pool engine: registry, positions, pricing, routes and the router.
//!
//! # Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`registry`] | Pool storage and the `(asset_a, asset_b, network)` index |
//! | [`liquidity`] | Provider share balances |
//! | [`pricing`] | Pure constant-product and share math |
//! | [`routes`] | Advisory cross-network routes |
//! | [`router`] | [`LiquidityRouter`], tying the above to asset transfers |

pub mod liquidity;
pub mod pricing;
pub mod registry;
pub mod router;
pub mod routes;

mod pool;
mod settlement;

#[cfg(test)]
mod proptest_properties;

pub use liquidity::LiquidityBook;
pub use pool::{Pool, Side};
pub use registry::{PoolKey, PoolRegistry};
pub use router::{LiquidityRouter, DEFAULT_FEE_RATE};
pub use routes::{ChainRoute, RouteEstimate, RouteTable};

//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use liquidity_router::prelude::*;
//! ```

pub use crate::assets::LedgerAsset;
pub use crate::config::{DeploymentConfig, MessengerConfig, RouterConfig};
pub use crate::context::CallContext;
pub use crate::domain::{
    Amount, AssetId, BasisPoints, BridgeId, ContractRef, Identity, MessageId, NetworkTag,
    Payload, PoolId, Rounding, Shares, SwapResult,
};
pub use crate::error::{Result, RouterError};
pub use crate::events::{Event, EventRecord};
pub use crate::math::CheckedArithmetic;
pub use crate::messaging::{Bridge, ChainConfig, CrossChainMessenger};
pub use crate::pools::{ChainRoute, LiquidityRouter};
pub use crate::traits::{Asset, FromConfig};

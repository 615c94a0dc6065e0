//! Domain value types shared by the pool engine and the message engine.
//!
//! Everything here is a small newtype with a validated constructor:
//! amounts and shares with checked arithmetic, fee rates, identities,
//! asset identifiers, network tags and bounded message parts.

mod amount;
mod asset_id;
mod asset_pair;
mod basis_points;
mod identity;
mod ids;
mod network;
mod payload;
mod rounding;
mod shares;
mod swap_result;

pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR, MAX_FEE_RATE};
pub use identity::Identity;
pub use ids::{BridgeId, MessageId, PoolId};
pub use network::{ContractRef, NetworkTag, MAX_CONTRACT_LEN, MAX_NETWORK_LEN};
pub use payload::{Payload, MAX_PAYLOAD_LEN};
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_result::SwapResult;

//! Collaborator and construction traits.
//!
//! [`Asset`] is the seam between the pool engine and whatever moves
//! value on the host ledger; [`FromConfig`] builds engines from their
//! declarative configs.

mod asset;
mod from_config;

pub use asset::{Asset, TransferError};
pub use from_config::FromConfig;

//! Cross-chain message engine.
//!
//! Leaves first: [`BridgeRegistry`] and [`ChainRegistry`] hold relay and
//! destination configuration, [`MessageLedger`] stores messages and
//! attestations, and [`CrossChainMessenger`] runs the
//! `Created → (Attested)* → Processed` lifecycle on top of them.

mod bridge;
mod chain;
mod ledger;
mod message;
mod messenger;

pub use bridge::{
    Bridge, BridgeRegistry, BRIDGE_FEE_DENOMINATOR, MAX_BRIDGE_NAME_LEN, MAX_BRIDGE_NETWORKS,
};
pub use chain::{ChainConfig, ChainRegistry};
pub use ledger::MessageLedger;
pub use message::{CrossChainMessage, ValidationRecord};
pub use messenger::{CrossChainMessenger, DEFAULT_BASE_FEE};

/// Most message ids accepted by one
/// [`batch_process`](CrossChainMessenger::batch_process) call.
pub const MAX_BATCH_SIZE: usize = 50;

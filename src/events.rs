//! Structured event records for off-chain indexers and relayers.
//!
//! Every successful state-changing call appends exactly one [`Event`] to
//! its engine's [`EventLog`]; failed calls append nothing.  The core never
//! reads events back.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Amount, AssetId, BasisPoints, BridgeId, ContractRef, Identity, MessageId, NetworkTag, PoolId,
    Shares,
};

/// Subsystem a pause switch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subsystem {
    /// Pool engine.
    Router,
    /// Cross-chain message engine.
    Messaging,
}

/// A state change worth telling the outside world about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Event {
    /// An asset handle was registered with the router.
    AssetRegistered { asset: AssetId, symbol: String },

    /// A pool was created and seeded.
    PoolCreated {
        pool_id: PoolId,
        asset_a: AssetId,
        asset_b: AssetId,
        network: NetworkTag,
        initial_shares: Shares,
        creator: Identity,
    },

    /// A swap executed against a pool.
    Swap {
        pool_id: PoolId,
        trader: Identity,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    },

    /// A provider deposited into an existing pool.
    LiquidityAdded {
        pool_id: PoolId,
        provider: Identity,
        amount_a: Amount,
        amount_b: Amount,
        shares_minted: Shares,
    },

    /// A chain route was registered or replaced.
    RouteRegistered {
        from: NetworkTag,
        to: NetworkTag,
        fee_multiplier: u32,
        min_amount: Amount,
        max_amount: Amount,
    },

    /// The swap fee rate changed.
    FeeRateUpdated {
        old_rate: BasisPoints,
        new_rate: BasisPoints,
    },

    /// A subsystem was paused or resumed.
    PausedChanged { subsystem: Subsystem, paused: bool },

    /// Ownership of a subsystem moved to a new identity.
    OwnershipTransferred {
        subsystem: Subsystem,
        previous_owner: Identity,
        new_owner: Identity,
    },

    /// A bridge was registered.
    BridgeRegistered {
        bridge_id: BridgeId,
        name: String,
        validator: Identity,
        networks: Vec<NetworkTag>,
    },

    /// A bridge was activated or deactivated.
    BridgeStatusChanged { bridge_id: BridgeId, active: bool },

    /// A destination chain config was registered or overwritten.
    ChainConfigRegistered {
        network: NetworkTag,
        chain_id: u64,
        contract: ContractRef,
    },

    /// A message was accepted for relaying.
    MessageSent {
        message_id: MessageId,
        sender: Identity,
        bridge_id: BridgeId,
        target_network: NetworkTag,
        target_contract: ContractRef,
        fee: Amount,
    },

    /// A validator attested a message.
    MessageValidated {
        message_id: MessageId,
        validator: Identity,
    },

    /// A message reached its terminal state and can be relayed.
    MessageProcessed {
        message_id: MessageId,
        target_network: NetworkTag,
        target_contract: ContractRef,
    },
}

/// An [`Event`] stamped with the block it happened in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    /// Block height of the emitting call.
    pub block_height: u64,
    /// What happened.
    #[serde(flatten)]
    pub event: Event,
}

/// Append-only buffer of emitted events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends `event` at `block_height`.
    pub fn emit(&mut self, block_height: u64, event: Event) {
        tracing::trace!(block_height, ?event, "event emitted");
        self.records.push(EventRecord {
            block_height,
            event,
        });
    }

    /// Events emitted since the last drain, oldest first.
    #[must_use]
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Hands all buffered events to the caller and empties the log.
    pub fn drain(&mut self) -> Vec<EventRecord> {
        core::mem::take(&mut self.records)
    }

    /// Number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

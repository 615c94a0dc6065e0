//! Cross-chain message records.

use serde::Serialize;

use crate::domain::{Amount, BridgeId, ContractRef, Identity, MessageId, NetworkTag, Payload};

/// A message accepted for relaying.
///
/// Lifecycle: `Created → (Attested)* → Processed`.  Attestations live in
/// the ledger beside the message; the only field that ever changes after
/// creation is `processed`, and it only goes from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossChainMessage {
    /// Message nonce.
    pub id: MessageId,
    /// Identity that sent it.
    pub sender: Identity,
    /// Destination network.
    pub target_network: NetworkTag,
    /// Destination contract.
    pub target_contract: ContractRef,
    /// Opaque body.
    pub payload: Payload,
    /// Fee computed at send time.  Recorded, not charged.
    pub fee: Amount,
    /// Block height of the send.
    pub block_height: u64,
    /// Terminal flag.
    pub processed: bool,
    /// Bridge that carries it.
    pub bridge_id: BridgeId,
}

/// One validator's attestation of one message.  Never revoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationRecord {
    /// Always `true` for a stored record.
    pub attested: bool,
    /// Block height of the attestation.
    pub block_height: u64,
}

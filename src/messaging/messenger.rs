//! The cross-chain message engine and its admin surface.
//!
//! [`CrossChainMessenger`] accepts messages over registered bridges,
//! records validator attestations and marks messages processed so an
//! off-chain relayer can deliver them.  It never moves assets: the fee it
//! computes is stored on the message for billing, not charged.
//!
//! Authorization for attestation and processing is identity equality with
//! the bridge's validator.  The signature blob handed to
//! [`validate_message`](CrossChainMessenger::validate_message) is recorded
//! as opaque input and not verified.

use super::{
    Bridge, BridgeRegistry, ChainConfig, ChainRegistry, CrossChainMessage, MessageLedger,
    ValidationRecord, MAX_BATCH_SIZE,
};
use crate::config::MessengerConfig;
use crate::context::CallContext;
use crate::domain::{Amount, BridgeId, ContractRef, Identity, MessageId, NetworkTag, Payload};
use crate::error::RouterError;
use crate::events::{Event, EventLog, EventRecord, Subsystem};
use crate::governance::Governance;
use crate::traits::FromConfig;

/// Flat part of every message fee when none is configured.
pub const DEFAULT_BASE_FEE: Amount = Amount::new(10);

/// Cross-chain message engine.
///
/// # Example
///
/// ```rust
/// use liquidity_router::context::CallContext;
/// use liquidity_router::domain::{Amount, BridgeId, ContractRef, Identity, NetworkTag, Payload};
/// use liquidity_router::messaging::{Bridge, ChainConfig, CrossChainMessenger};
///
/// let owner = Identity::from_bytes([1; 32]);
/// let validator = Identity::from_bytes([2; 32]);
/// let user = Identity::from_bytes([3; 32]);
/// let eth = NetworkTag::new("ethereum").expect("tag");
/// let inbox = ContractRef::new("0xinbox").expect("contract");
///
/// let mut messenger = CrossChainMessenger::new(owner);
/// let admin = CallContext::new(owner, 1);
/// let networks = vec![eth.clone()];
/// let bridge = Bridge::new(BridgeId::new(1), "relay", validator, networks, 50, Amount::new(10))
///     .expect("bridge");
/// messenger.register_bridge(&admin, bridge).expect("owner");
/// messenger
///     .register_chain_config(&admin, eth.clone(), ChainConfig::new(1, 12, 500_000, inbox.clone()))
///     .expect("owner");
///
/// let payload = Payload::new(vec![0u8; 100]).expect("payload");
/// let id = messenger
///     .send_message(&CallContext::new(user, 2), eth, inbox, payload, BridgeId::new(1))
///     .expect("sent");
/// assert_eq!(messenger.get_message(id).map(|m| m.fee), Some(Amount::new(15)));
///
/// let relay = CallContext::new(validator, 3);
/// messenger.validate_message(&relay, id, b"sig").expect("attested");
/// messenger.process_message(&relay, id).expect("processed");
/// assert_eq!(messenger.get_message(id).map(|m| m.processed), Some(true));
/// ```
#[derive(Debug, Clone)]
pub struct CrossChainMessenger {
    governance: Governance,
    base_fee: Amount,
    bridges: BridgeRegistry,
    chains: ChainRegistry,
    ledger: MessageLedger,
    events: EventLog,
}

impl CrossChainMessenger {
    /// Creates an unpaused messenger charging [`DEFAULT_BASE_FEE`].
    #[must_use]
    pub fn new(owner: Identity) -> Self {
        Self {
            governance: Governance::new(owner, false),
            base_fee: DEFAULT_BASE_FEE,
            bridges: BridgeRegistry::new(),
            chains: ChainRegistry::new(),
            ledger: MessageLedger::new(),
            events: EventLog::new(),
        }
    }

    // -- message lifecycle ---------------------------------------------------

    /// Accepts a message for relaying over `bridge_id` and returns its id.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Paused`] while messaging is paused.
    /// - [`RouterError::BridgeNotFound`] if the bridge is missing or inactive.
    /// - [`RouterError::InvalidChain`] if the target network has no active
    ///   chain config or the bridge does not serve it.
    /// - [`RouterError::InsufficientFee`] if the computed fee is below the
    ///   bridge minimum.
    /// - [`RouterError::Overflow`] if the fee or the nonce overflows.
    pub fn send_message(
        &mut self,
        ctx: &CallContext,
        target_network: NetworkTag,
        target_contract: ContractRef,
        payload: Payload,
        bridge_id: BridgeId,
    ) -> crate::error::Result<MessageId> {
        self.governance.ensure_active()?;
        let bridge = self.bridges.get_active(bridge_id)?;
        self.chains.get_active(&target_network)?;
        if !bridge.supports(&target_network) {
            tracing::debug!(%bridge_id, network = %target_network, "bridge does not serve network");
            return Err(RouterError::InvalidChain("network not supported by bridge"));
        }
        let fee = bridge.fee_for(payload.len(), self.base_fee)?;
        if fee < bridge.min_fee() {
            return Err(RouterError::InsufficientFee {
                fee,
                min_fee: bridge.min_fee(),
            });
        }
        let id = self.ledger.allocate()?;

        let event = Event::MessageSent {
            message_id: id,
            sender: ctx.caller,
            bridge_id,
            target_network: target_network.clone(),
            target_contract: target_contract.clone(),
            fee,
        };
        tracing::info!(
            message_id = id.get(),
            sender = %ctx.caller,
            %bridge_id,
            network = %target_network,
            %fee,
            payload_len = payload.len(),
            "message sent"
        );
        self.ledger.insert(CrossChainMessage {
            id,
            sender: ctx.caller,
            target_network,
            target_contract,
            payload,
            fee,
            block_height: ctx.block_height,
            processed: false,
            bridge_id,
        });
        self.events.emit(ctx.block_height, event);
        Ok(id)
    }

    /// Records the caller's attestation of `message_id`.
    ///
    /// `signature` is accepted as an opaque blob; only the caller's identity
    /// is checked against the bridge validator.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Paused`] while messaging is paused.
    /// - [`RouterError::InvalidMessage`] for an unknown id.
    /// - [`RouterError::Unauthorized`] unless the caller is the validator.
    /// - [`RouterError::DuplicateMessage`] if the message is processed or
    ///   already attested by the caller.
    pub fn validate_message(
        &mut self,
        ctx: &CallContext,
        message_id: MessageId,
        signature: &[u8],
    ) -> crate::error::Result<()> {
        self.governance.ensure_active()?;
        self.authorize_validator(ctx, message_id)?;
        if self.ledger.validation(message_id, &ctx.caller).is_some() {
            return Err(RouterError::DuplicateMessage);
        }

        self.ledger
            .record_validation(message_id, ctx.caller, ctx.block_height);
        tracing::info!(
            message_id = message_id.get(),
            validator = %ctx.caller,
            signature_len = signature.len(),
            "message validated"
        );
        self.events.emit(
            ctx.block_height,
            Event::MessageValidated {
                message_id,
                validator: ctx.caller,
            },
        );
        Ok(())
    }

    /// Marks `message_id` processed.  Requires the caller's own attestation.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Paused`] while messaging is paused.
    /// - [`RouterError::InvalidMessage`] for an unknown or unattested id.
    /// - [`RouterError::Unauthorized`] unless the caller is the validator.
    /// - [`RouterError::DuplicateMessage`] if already processed.
    pub fn process_message(
        &mut self,
        ctx: &CallContext,
        message_id: MessageId,
    ) -> crate::error::Result<()> {
        self.governance.ensure_active()?;
        self.process_unpaused(ctx, message_id)
    }

    /// Processes each id independently.  A failing item yields `false` and
    /// does not abort the batch.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Paused`] while messaging is paused.
    /// - [`RouterError::InvalidMessage`] for more than
    ///   [`MAX_BATCH_SIZE`] ids.
    pub fn batch_process(
        &mut self,
        ctx: &CallContext,
        message_ids: &[MessageId],
    ) -> crate::error::Result<Vec<bool>> {
        self.governance.ensure_active()?;
        if message_ids.len() > MAX_BATCH_SIZE {
            return Err(RouterError::InvalidMessage("batch exceeds 50 messages"));
        }
        let results = message_ids
            .iter()
            .map(|&id| match self.process_unpaused(ctx, id) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(message_id = id.get(), error = %err, "batch item failed");
                    false
                }
            })
            .collect::<Vec<_>>();
        tracing::info!(
            requested = message_ids.len(),
            processed = results.iter().filter(|ok| **ok).count(),
            "batch processed"
        );
        Ok(results)
    }

    /// Fee a payload of `payload_len` bytes would pay over `bridge_id`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::BridgeNotFound`] for an unknown id.
    /// - [`RouterError::Overflow`] if the fee overflows.
    pub fn compute_bridge_fee(
        &self,
        bridge_id: BridgeId,
        payload_len: usize,
    ) -> crate::error::Result<Amount> {
        self.bridges
            .get(bridge_id)
            .ok_or(RouterError::BridgeNotFound)?
            .fee_for(payload_len, self.base_fee)
    }

    // -- admin ---------------------------------------------------------------

    /// Registers a bridge under its own id. Owner only.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Unauthorized`] for a non-owner caller.
    /// - [`RouterError::InvalidConfiguration`] if the id is taken.
    pub fn register_bridge(
        &mut self,
        ctx: &CallContext,
        bridge: Bridge,
    ) -> crate::error::Result<()> {
        self.governance.ensure_owner(ctx)?;
        let event = Event::BridgeRegistered {
            bridge_id: bridge.id(),
            name: bridge.name().to_owned(),
            validator: bridge.validator(),
            networks: bridge.networks().to_vec(),
        };
        let bridge_id = bridge.id();
        self.bridges.register(bridge)?;
        tracing::info!(%bridge_id, "bridge registered");
        self.events.emit(ctx.block_height, event);
        Ok(())
    }

    /// Activates or deactivates a bridge. Owner only.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Unauthorized`] for a non-owner caller.
    /// - [`RouterError::BridgeNotFound`] for an unknown id.
    pub fn set_bridge_active(
        &mut self,
        ctx: &CallContext,
        bridge_id: BridgeId,
        active: bool,
    ) -> crate::error::Result<()> {
        self.governance.ensure_owner(ctx)?;
        self.bridges.set_active(bridge_id, active)?;
        tracing::info!(%bridge_id, active, "bridge status changed");
        self.events
            .emit(ctx.block_height, Event::BridgeStatusChanged { bridge_id, active });
        Ok(())
    }

    /// Registers or overwrites the config for `network`. Owner only.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Unauthorized`] for a non-owner caller.
    pub fn register_chain_config(
        &mut self,
        ctx: &CallContext,
        network: NetworkTag,
        config: ChainConfig,
    ) -> crate::error::Result<()> {
        self.governance.ensure_owner(ctx)?;
        let event = Event::ChainConfigRegistered {
            network: network.clone(),
            chain_id: config.chain_id,
            contract: config.contract.clone(),
        };
        if self.chains.upsert(network.clone(), config).is_some() {
            tracing::info!(%network, "chain config overwritten");
        } else {
            tracing::info!(%network, "chain config registered");
        }
        self.events.emit(ctx.block_height, event);
        Ok(())
    }

    /// Pauses or resumes messaging. Owner only.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Unauthorized`] for a non-owner caller.
    pub fn set_paused(&mut self, ctx: &CallContext, paused: bool) -> crate::error::Result<()> {
        self.governance.set_paused(ctx, paused)?;
        tracing::info!(paused, "messaging pause switched");
        self.events.emit(
            ctx.block_height,
            Event::PausedChanged {
                subsystem: Subsystem::Messaging,
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
        tracing::info!(%previous_owner, %new_owner, "messaging ownership transferred");
        self.events.emit(
            ctx.block_height,
            Event::OwnershipTransferred {
                subsystem: Subsystem::Messaging,
                previous_owner,
                new_owner,
            },
        );
        Ok(())
    }

    // -- queries -------------------------------------------------------------

    /// Message by id.
    #[must_use]
    pub fn get_message(&self, id: MessageId) -> Option<&CrossChainMessage> {
        self.ledger.get(id)
    }

    /// Bridge by id.
    #[must_use]
    pub fn get_bridge(&self, id: BridgeId) -> Option<&Bridge> {
        self.bridges.get(id)
    }

    /// Chain config for `network`.
    #[must_use]
    pub fn get_chain_config(&self, network: &NetworkTag) -> Option<&ChainConfig> {
        self.chains.get(network)
    }

    /// Attestation of `id` by `validator`.
    #[must_use]
    pub fn get_validation(&self, id: MessageId, validator: &Identity) -> Option<&ValidationRecord> {
        self.ledger.validation(id, validator)
    }

    /// Networks served by `bridge_id`, in registration order.  Empty for an
    /// unknown bridge.
    #[must_use]
    pub fn supported_networks(&self, bridge_id: BridgeId) -> &[NetworkTag] {
        self.bridges
            .get(bridge_id)
            .map(Bridge::networks)
            .unwrap_or_default()
    }

    /// Whether `bridge_id` serves `network`.
    #[must_use]
    pub fn is_network_supported(&self, bridge_id: BridgeId, network: &NetworkTag) -> bool {
        self.bridges
            .get(bridge_id)
            .is_some_and(|b| b.supports(network))
    }

    /// Nonce the next message will receive.
    #[must_use]
    pub const fn next_message_nonce(&self) -> MessageId {
        self.ledger.next_nonce()
    }

    /// Flat part of every message fee.
    #[must_use]
    pub const fn base_fee(&self) -> Amount {
        self.base_fee
    }

    /// Whether messaging is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.governance.is_paused()
    }

    /// Current owner.
    #[must_use]
    pub const fn owner(&self) -> Identity {
        self.governance.owner()
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

    /// Checks that the message exists, is still open, and that the caller
    /// is its bridge's validator.
    fn authorize_validator(
        &self,
        ctx: &CallContext,
        message_id: MessageId,
    ) -> crate::error::Result<&CrossChainMessage> {
        let message = self
            .ledger
            .get(message_id)
            .ok_or(RouterError::InvalidMessage("unknown message"))?;
        let bridge = self
            .bridges
            .get(message.bridge_id)
            .ok_or(RouterError::BridgeNotFound)?;
        if ctx.caller != bridge.validator() {
            tracing::debug!(
                message_id = message_id.get(),
                caller = %ctx.caller,
                "caller is not the bridge validator"
            );
            return Err(RouterError::Unauthorized);
        }
        if message.processed {
            return Err(RouterError::DuplicateMessage);
        }
        Ok(message)
    }

    fn process_unpaused(
        &mut self,
        ctx: &CallContext,
        message_id: MessageId,
    ) -> crate::error::Result<()> {
        let message = self.authorize_validator(ctx, message_id)?;
        if self.ledger.validation(message_id, &ctx.caller).is_none() {
            return Err(RouterError::InvalidMessage("message not attested by caller"));
        }
        let event = Event::MessageProcessed {
            message_id,
            target_network: message.target_network.clone(),
            target_contract: message.target_contract.clone(),
        };

        self.ledger.mark_processed(message_id);
        tracing::info!(
            message_id = message_id.get(),
            validator = %ctx.caller,
            "message processed"
        );
        self.events.emit(ctx.block_height, event);
        Ok(())
    }
}

impl FromConfig<MessengerConfig> for CrossChainMessenger {
    fn from_config(config: &MessengerConfig) -> crate::error::Result<Self> {
        config.validate()?;
        let mut messenger = Self::new(config.owner());
        messenger.base_fee = config.base_fee();
        messenger.governance = Governance::new(config.owner(), config.paused());
        Ok(messenger)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const OWNER: Identity = Identity::from_bytes([0xA0; 32]);
    const VALIDATOR: Identity = Identity::from_bytes([0xB0; 32]);
    const USER: Identity = Identity::from_bytes([0x01; 32]);
    const STRANGER: Identity = Identity::from_bytes([0x02; 32]);
    const BRIDGE: BridgeId = BridgeId::new(1);

    fn net(s: &str) -> NetworkTag {
        let Ok(t) = NetworkTag::new(s) else {
            panic!("valid tag");
        };
        t
    }

    fn contract() -> ContractRef {
        let Ok(c) = ContractRef::new("0xinbox") else {
            panic!("valid contract");
        };
        c
    }

    fn payload(len: usize) -> Payload {
        let Ok(p) = Payload::new(vec![7u8; len]) else {
            panic!("valid payload");
        };
        p
    }

    fn admin() -> CallContext {
        CallContext::new(OWNER, 1)
    }

    fn relay(height: u64) -> CallContext {
        CallContext::new(VALIDATOR, height)
    }

    fn messenger_with(fee_rate: u32, min_fee: u128) -> CrossChainMessenger {
        let mut m = CrossChainMessenger::new(OWNER);
        let Ok(bridge) = Bridge::new(
            BRIDGE,
            "relay",
            VALIDATOR,
            vec![net("eth"), net("dot")],
            fee_rate,
            Amount::new(min_fee),
        ) else {
            panic!("valid bridge");
        };
        let Ok(()) = m.register_bridge(&admin(), bridge) else {
            panic!("register bridge");
        };
        for tag in ["eth", "dot", "sol"] {
            let Ok(()) = m.register_chain_config(
                &admin(),
                net(tag),
                ChainConfig::new(1, 12, 500_000, contract()),
            ) else {
                panic!("register chain");
            };
        }
        m
    }

    fn sent(m: &mut CrossChainMessenger) -> MessageId {
        let Ok(id) = m.send_message(
            &CallContext::new(USER, 5),
            net("eth"),
            contract(),
            payload(100),
            BRIDGE,
        ) else {
            panic!("send");
        };
        id
    }

    // -- send ----------------------------------------------------------------

    #[test]
    fn send_records_fee_and_nonce() {
        let mut m = messenger_with(50, 10);
        let id = sent(&mut m);
        assert_eq!(id, MessageId::new(1));
        assert_eq!(m.next_message_nonce(), MessageId::new(2));
        let Some(msg) = m.get_message(id) else {
            panic!("message missing");
        };
        assert_eq!(msg.fee, Amount::new(15));
        assert_eq!(msg.block_height, 5);
        assert_eq!(msg.sender, USER);
        assert!(!msg.processed);
    }

    #[test]
    fn fee_below_minimum_is_rejected() {
        let mut m = messenger_with(50, 16);
        let before = m.next_message_nonce();
        let ctx = CallContext::new(USER, 5);
        let result = m.send_message(&ctx, net("eth"), contract(), payload(100), BRIDGE);
        assert!(matches!(
            result,
            Err(RouterError::InsufficientFee { fee, min_fee })
                if fee == Amount::new(15) && min_fee == Amount::new(16)
        ));
        assert_eq!(m.next_message_nonce(), before);
    }

    #[test]
    fn send_requires_supported_network_and_chain_config() {
        let mut m = messenger_with(50, 10);
        let ctx = CallContext::new(USER, 5);
        assert!(matches!(
            m.send_message(&ctx, net("sol"), contract(), payload(1), BRIDGE),
            Err(RouterError::InvalidChain(_))
        ));
        let Ok(()) = m.register_chain_config(&admin(), net("eth"), {
            let mut cfg = ChainConfig::new(1, 12, 500_000, contract());
            cfg.active = false;
            cfg
        }) else {
            panic!("overwrite chain");
        };
        assert!(matches!(
            m.send_message(&ctx, net("eth"), contract(), payload(1), BRIDGE),
            Err(RouterError::InvalidChain(_))
        ));
    }

    #[test]
    fn inactive_or_unknown_bridge_blocks_send() {
        let mut m = messenger_with(50, 10);
        let ctx = CallContext::new(USER, 5);
        assert!(matches!(
            m.send_message(&ctx, net("eth"), contract(), payload(1), BridgeId::new(9)),
            Err(RouterError::BridgeNotFound)
        ));
        let Ok(()) = m.set_bridge_active(&admin(), BRIDGE, false) else {
            panic!("deactivate");
        };
        assert!(matches!(
            m.send_message(&ctx, net("eth"), contract(), payload(1), BRIDGE),
            Err(RouterError::BridgeNotFound)
        ));
    }

    // -- validate / process --------------------------------------------------

    #[test]
    fn process_requires_attestation() {
        let mut m = messenger_with(50, 10);
        let id = sent(&mut m);
        assert!(matches!(
            m.process_message(&relay(6), id),
            Err(RouterError::InvalidMessage(_))
        ));
        assert_eq!(m.get_message(id).map(|msg| msg.processed), Some(false));
    }

    #[test]
    fn process_is_exactly_once() {
        let mut m = messenger_with(50, 10);
        let id = sent(&mut m);
        let Ok(()) = m.validate_message(&relay(6), id, b"sig") else {
            panic!("validate");
        };
        let Ok(()) = m.process_message(&relay(7), id) else {
            panic!("first process");
        };
        let events = m.events().len();
        assert!(matches!(
            m.process_message(&relay(8), id),
            Err(RouterError::DuplicateMessage)
        ));
        assert_eq!(m.events().len(), events);
        assert_eq!(m.get_message(id).map(|msg| msg.processed), Some(true));
    }

    #[test]
    fn only_the_validator_may_attest() {
        let mut m = messenger_with(50, 10);
        let id = sent(&mut m);
        assert!(matches!(
            m.validate_message(&CallContext::new(STRANGER, 6), id, b"sig"),
            Err(RouterError::Unauthorized)
        ));
        assert!(m.get_validation(id, &STRANGER).is_none());
    }

    #[test]
    fn repeat_attestation_is_duplicate() {
        let mut m = messenger_with(50, 10);
        let id = sent(&mut m);
        let Ok(()) = m.validate_message(&relay(6), id, b"sig") else {
            panic!("validate");
        };
        assert!(matches!(
            m.validate_message(&relay(9), id, b"sig"),
            Err(RouterError::DuplicateMessage)
        ));
        assert_eq!(
            m.get_validation(id, &VALIDATOR).map(|r| r.block_height),
            Some(6)
        );
    }

    #[test]
    fn unknown_message_is_invalid() {
        let mut m = messenger_with(50, 10);
        assert!(matches!(
            m.validate_message(&relay(6), MessageId::new(42), b""),
            Err(RouterError::InvalidMessage(_))
        ));
    }

    #[test]
    fn deactivated_bridge_still_processes_pending_messages() {
        let mut m = messenger_with(50, 10);
        let id = sent(&mut m);
        let Ok(()) = m.set_bridge_active(&admin(), BRIDGE, false) else {
            panic!("deactivate");
        };
        let Ok(()) = m.validate_message(&relay(6), id, b"sig") else {
            panic!("validate");
        };
        assert!(m.process_message(&relay(7), id).is_ok());
    }

    // -- batch ---------------------------------------------------------------

    #[test]
    fn batch_reports_per_item_outcome() {
        let mut m = messenger_with(50, 10);
        let attested = sent(&mut m);
        let pending = sent(&mut m);
        let Ok(()) = m.validate_message(&relay(6), attested, b"sig") else {
            panic!("validate");
        };
        let Ok(results) = m.batch_process(&relay(7), &[attested, pending, MessageId::new(99)])
        else {
            panic!("batch");
        };
        assert_eq!(results, vec![true, false, false]);
        assert_eq!(m.get_message(attested).map(|msg| msg.processed), Some(true));
        assert_eq!(m.get_message(pending).map(|msg| msg.processed), Some(false));
    }

    #[test]
    fn batch_size_is_bounded() {
        let mut m = messenger_with(50, 10);
        let ids = vec![MessageId::new(1); MAX_BATCH_SIZE + 1];
        assert!(matches!(
            m.batch_process(&relay(7), &ids),
            Err(RouterError::InvalidMessage(_))
        ));
        let Ok(results) = m.batch_process(&relay(7), &ids[..MAX_BATCH_SIZE]) else {
            panic!("full batch");
        };
        assert_eq!(results.len(), MAX_BATCH_SIZE);
    }

    // -- admin ---------------------------------------------------------------

    #[test]
    fn pause_blocks_lifecycle_but_not_queries() {
        let mut m = messenger_with(50, 10);
        let id = sent(&mut m);
        let Ok(()) = m.set_paused(&admin(), true) else {
            panic!("pause");
        };
        let ctx = CallContext::new(USER, 5);
        assert!(matches!(
            m.send_message(&ctx, net("eth"), contract(), payload(1), BRIDGE),
            Err(RouterError::Paused)
        ));
        assert!(matches!(
            m.validate_message(&relay(6), id, b""),
            Err(RouterError::Paused)
        ));
        assert!(matches!(m.batch_process(&relay(6), &[id]), Err(RouterError::Paused)));
        assert!(matches!(m.compute_bridge_fee(BRIDGE, 100), Ok(fee) if fee == Amount::new(15)));
    }

    #[test]
    fn admin_calls_are_owner_gated() {
        let mut m = messenger_with(50, 10);
        let ctx = CallContext::new(STRANGER, 2);
        assert!(matches!(m.set_paused(&ctx, true), Err(RouterError::Unauthorized)));
        assert!(matches!(
            m.set_bridge_active(&ctx, BRIDGE, false),
            Err(RouterError::Unauthorized)
        ));
        assert!(matches!(
            m.register_chain_config(&ctx, net("eth"), ChainConfig::new(1, 1, 1, contract())),
            Err(RouterError::Unauthorized)
        ));
        assert!(matches!(
            m.transfer_ownership(&ctx, STRANGER),
            Err(RouterError::Unauthorized)
        ));
    }

    #[test]
    fn duplicate_bridge_id_is_rejected() {
        let mut m = messenger_with(50, 10);
        let Ok(again) = Bridge::new(BRIDGE, "other", VALIDATOR, vec![net("sol")], 0, Amount::ZERO)
        else {
            panic!("valid bridge");
        };
        assert!(matches!(
            m.register_bridge(&admin(), again),
            Err(RouterError::InvalidConfiguration(_))
        ));
        assert_eq!(m.supported_networks(BRIDGE), &[net("eth"), net("dot")]);
    }

    #[test]
    fn network_membership_queries() {
        let m = messenger_with(50, 10);
        assert!(m.is_network_supported(BRIDGE, &net("dot")));
        assert!(!m.is_network_supported(BRIDGE, &net("sol")));
        assert!(!m.is_network_supported(BridgeId::new(2), &net("eth")));
        assert!(m.supported_networks(BridgeId::new(2)).is_empty());
    }

    #[test]
    fn ownership_transfer_moves_admin_rights() {
        let mut m = messenger_with(50, 10);
        let Ok(()) = m.transfer_ownership(&admin(), STRANGER) else {
            panic!("transfer");
        };
        assert_eq!(m.owner(), STRANGER);
        assert!(matches!(m.set_paused(&admin(), true), Err(RouterError::Unauthorized)));
        assert!(m.set_paused(&CallContext::new(STRANGER, 3), true).is_ok());
    }

    #[test]
    fn from_config_applies_base_fee_and_pause() {
        let Ok(config) = MessengerConfig::new(OWNER, Amount::new(3)) else {
            panic!("config");
        };
        let Ok(m) = CrossChainMessenger::from_config(&config.with_paused(true)) else {
            panic!("from config");
        };
        assert_eq!(m.base_fee(), Amount::new(3));
        assert!(m.is_paused());
        assert_eq!(m.owner(), OWNER);
    }
}

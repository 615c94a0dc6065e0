//! Message storage, attestations and the outbound nonce.

use std::collections::{BTreeMap, HashMap};

use super::{CrossChainMessage, ValidationRecord};
use crate::domain::{Identity, MessageId};
use crate::error::RouterError;

/// Messages by id, attestations by `(message, validator)`, and the next
/// nonce.  Nonces start at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct MessageLedger {
    messages: BTreeMap<MessageId, CrossChainMessage>,
    validations: HashMap<(MessageId, Identity), ValidationRecord>,
    next_nonce: MessageId,
}

impl Default for MessageLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageLedger {
    /// Empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: BTreeMap::new(),
            validations: HashMap::new(),
            next_nonce: MessageId::new(1),
        }
    }

    /// Nonce the next message will receive.
    #[must_use]
    pub const fn next_nonce(&self) -> MessageId {
        self.next_nonce
    }

    /// Message by id.
    #[must_use]
    pub fn get(&self, id: MessageId) -> Option<&CrossChainMessage> {
        self.messages.get(&id)
    }

    /// Attestation of `id` by `validator`.
    #[must_use]
    pub fn validation(&self, id: MessageId, validator: &Identity) -> Option<&ValidationRecord> {
        self.validations.get(&(id, *validator))
    }

    /// Number of stored messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` before the first message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the nonce for a new message without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] once the nonce space is exhausted.
    pub fn allocate(&self) -> crate::error::Result<MessageId> {
        self.next_nonce
            .next()
            .ok_or(RouterError::Overflow("message nonce exhausted"))?;
        Ok(self.next_nonce)
    }

    /// Stores a message obtained through [`allocate`](Self::allocate) and
    /// advances the nonce.
    pub(crate) fn insert(&mut self, message: CrossChainMessage) {
        let id = message.id;
        self.messages.insert(id, message);
        if let Some(next) = id.next() {
            self.next_nonce = next;
        }
    }

    pub(crate) fn record_validation(
        &mut self,
        id: MessageId,
        validator: Identity,
        block_height: u64,
    ) {
        self.validations.insert(
            (id, validator),
            ValidationRecord {
                attested: true,
                block_height,
            },
        );
    }

    pub(crate) fn mark_processed(&mut self, id: MessageId) {
        if let Some(message) = self.messages.get_mut(&id) {
            message.processed = true;
        }
    }
}

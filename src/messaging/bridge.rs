//! Bridge definitions and the bridge registry.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Amount, BridgeId, Identity, NetworkTag, Rounding};
use crate::error::RouterError;
use crate::math::CheckedArithmetic;

/// Most networks a single bridge may serve.
pub const MAX_BRIDGE_NETWORKS: usize = 10;

/// Longest accepted bridge name, in bytes.
pub const MAX_BRIDGE_NAME_LEN: usize = 64;

/// Denominator of a bridge fee rate (1 000 = one fee unit per payload byte).
pub const BRIDGE_FEE_DENOMINATOR: u128 = 1_000;

/// A relay configuration: which networks it reaches, what it charges, and
/// which identity may attest and process its messages.
///
/// # Invariants
///
/// - `name` is 1..=64 bytes.
/// - `networks` holds 1..=10 distinct tags, in registration order.
/// - `validator` is not the zero identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bridge {
    id: BridgeId,
    name: String,
    networks: Vec<NetworkTag>,
    fee_rate: u32,
    min_fee: Amount,
    validator: Identity,
    active: bool,
}

impl Bridge {
    /// Creates an active bridge.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidConfiguration`] for a bad name or a zero
    ///   validator.
    /// - [`RouterError::InvalidChain`] for an empty, oversized or duplicated
    ///   network list.
    pub fn new(
        id: BridgeId,
        name: impl Into<String>,
        validator: Identity,
        networks: Vec<NetworkTag>,
        fee_rate: u32,
        min_fee: Amount,
    ) -> crate::error::Result<Self> {
        let name = name.into();
        if name.is_empty() || name.len() > MAX_BRIDGE_NAME_LEN {
            return Err(RouterError::InvalidConfiguration("bridge name must be 1..=64 bytes"));
        }
        if validator.is_zero() {
            return Err(RouterError::InvalidConfiguration("bridge validator is the zero identity"));
        }
        if networks.is_empty() {
            return Err(RouterError::InvalidChain("bridge serves no network"));
        }
        if networks.len() > MAX_BRIDGE_NETWORKS {
            return Err(RouterError::InvalidChain("bridge serves more than 10 networks"));
        }
        for (i, tag) in networks.iter().enumerate() {
            if networks[..i].contains(tag) {
                return Err(RouterError::InvalidChain("bridge lists a network twice"));
            }
        }
        Ok(Self {
            id,
            name,
            networks,
            fee_rate,
            min_fee,
            validator,
            active: true,
        })
    }

    /// Bridge identifier.
    #[must_use]
    pub const fn id(&self) -> BridgeId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Supported destination networks, in registration order.
    #[must_use]
    pub fn networks(&self) -> &[NetworkTag] {
        &self.networks
    }

    /// Per-byte fee rate, per mille.
    #[must_use]
    pub const fn fee_rate(&self) -> u32 {
        self.fee_rate
    }

    /// Smallest fee a message over this bridge may carry.
    #[must_use]
    pub const fn min_fee(&self) -> Amount {
        self.min_fee
    }

    /// Identity allowed to attest and process messages.
    #[must_use]
    pub const fn validator(&self) -> Identity {
        self.validator
    }

    /// Whether the bridge accepts new messages.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` if `network` is in the supported list.
    #[must_use]
    pub fn supports(&self, network: &NetworkTag) -> bool {
        self.networks.contains(network)
    }

    /// Fee for a payload of `payload_len` bytes:
    /// `base_fee + floor(payload_len × fee_rate / 1000)`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the fee exceeds `u128`.
    pub fn fee_for(&self, payload_len: usize, base_fee: Amount) -> crate::error::Result<Amount> {
        let len = u128::try_from(payload_len)
            .map_err(|_| RouterError::Overflow("payload length exceeds u128"))?;
        let variable = Amount::new(len)
            .safe_mul(&Amount::new(u128::from(self.fee_rate)))?
            .safe_div(&Amount::new(BRIDGE_FEE_DENOMINATOR), Rounding::Down)?;
        base_fee.safe_add(&variable)
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Bridges keyed by id.  Ids are unique for the registry's lifetime.
#[derive(Debug, Clone, Default)]
pub struct BridgeRegistry {
    bridges: BTreeMap<BridgeId, Bridge>,
}

impl BridgeRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bridge by id, active or not.
    #[must_use]
    pub fn get(&self, id: BridgeId) -> Option<&Bridge> {
        self.bridges.get(&id)
    }

    /// Bridge by id, if it is active.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::BridgeNotFound`] if the bridge is missing or
    /// inactive.
    pub fn get_active(&self, id: BridgeId) -> crate::error::Result<&Bridge> {
        self.bridges
            .get(&id)
            .filter(|b| b.is_active())
            .ok_or(RouterError::BridgeNotFound)
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: BridgeId) -> bool {
        self.bridges.contains_key(&id)
    }

    /// Number of registered bridges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bridges.len()
    }

    /// Returns `true` if no bridge is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bridges.is_empty()
    }

    /// Adds a bridge under its own id.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] if the id is taken.
    pub(crate) fn register(&mut self, bridge: Bridge) -> crate::error::Result<()> {
        if self.contains(bridge.id()) {
            return Err(RouterError::InvalidConfiguration("bridge id already registered"));
        }
        self.bridges.insert(bridge.id(), bridge);
        Ok(())
    }

    /// Flips a bridge's active flag.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::BridgeNotFound`] for an unknown id.
    pub(crate) fn set_active(&mut self, id: BridgeId, active: bool) -> crate::error::Result<()> {
        let bridge = self.bridges.get_mut(&id).ok_or(RouterError::BridgeNotFound)?;
        bridge.set_active(active);
        Ok(())
    }
}

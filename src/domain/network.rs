//! Network tags and destination contract references.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RouterError;

/// Longest accepted network tag, in bytes.
pub const MAX_NETWORK_LEN: usize = 32;

/// Longest accepted destination contract reference, in bytes.
pub const MAX_CONTRACT_LEN: usize = 64;

/// Name of a network, e.g. `"ethereum"` or `"polkadot"`.
///
/// Non-empty and at most [`MAX_NETWORK_LEN`] bytes.  Pools, routes, chain
/// configs and bridges are all keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NetworkTag(String);

impl NetworkTag {
    /// Validates and wraps a network name.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidChain`] if the tag is empty or longer
    /// than [`MAX_NETWORK_LEN`] bytes.
    pub fn new(tag: impl Into<String>) -> crate::error::Result<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(RouterError::InvalidChain("network tag is empty"));
        }
        if tag.len() > MAX_NETWORK_LEN {
            return Err(RouterError::InvalidChain("network tag longer than 32 bytes"));
        }
        Ok(Self(tag))
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for NetworkTag {
    type Error = RouterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<NetworkTag> for String {
    fn from(tag: NetworkTag) -> Self {
        tag.0
    }
}

/// Reference to the contract a message is addressed to on its destination
/// network.  Non-empty, at most [`MAX_CONTRACT_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractRef(String);

impl ContractRef {
    /// Validates and wraps a contract reference.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidMessage`] if the reference is empty or
    /// longer than [`MAX_CONTRACT_LEN`] bytes.
    pub fn new(contract: impl Into<String>) -> crate::error::Result<Self> {
        let contract = contract.into();
        if contract.is_empty() {
            return Err(RouterError::InvalidMessage("contract reference is empty"));
        }
        if contract.len() > MAX_CONTRACT_LEN {
            return Err(RouterError::InvalidMessage(
                "contract reference longer than 64 bytes",
            ));
        }
        Ok(Self(contract))
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ContractRef {
    type Error = RouterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ContractRef> for String {
    fn from(c: ContractRef) -> Self {
        c.0
    }
}

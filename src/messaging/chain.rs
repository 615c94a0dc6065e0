//! Per-network destination parameters.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{ContractRef, NetworkTag};
use crate::error::RouterError;

/// Destination-chain parameters for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainConfig {
    /// Numeric chain id on the destination.
    pub chain_id: u64,
    /// Blocks to wait before a message counts as final.
    pub confirmations: u32,
    /// Gas ceiling for delivery.
    pub gas_limit: u64,
    /// Contract that receives messages on the destination.
    pub contract: ContractRef,
    /// Whether messages may target this network.
    pub active: bool,
}

impl ChainConfig {
    /// Creates an active config.
    #[must_use]
    pub fn new(chain_id: u64, confirmations: u32, gas_limit: u64, contract: ContractRef) -> Self {
        Self {
            chain_id,
            confirmations,
            gas_limit,
            contract,
            active: true,
        }
    }
}

/// Chain configs keyed by network.  Registration overwrites.
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    configs: HashMap<NetworkTag, ChainConfig>,
}

impl ChainRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Config for `network`, active or not.
    #[must_use]
    pub fn get(&self, network: &NetworkTag) -> Option<&ChainConfig> {
        self.configs.get(network)
    }

    /// Config for `network`, if active.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidChain`] if none is registered or it is
    /// inactive.
    pub fn get_active(&self, network: &NetworkTag) -> crate::error::Result<&ChainConfig> {
        self.configs
            .get(network)
            .filter(|c| c.active)
            .ok_or(RouterError::InvalidChain("no active chain config for network"))
    }

    /// Number of configured networks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Returns `true` if nothing is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Stores `config` for `network`, replacing any previous one.
    pub(crate) fn upsert(
        &mut self,
        network: NetworkTag,
        config: ChainConfig,
    ) -> Option<ChainConfig> {
        self.configs.insert(network, config)
    }
}

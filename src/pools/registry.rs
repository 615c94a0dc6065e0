//! Pool registry with its `(asset_a, asset_b, network)` lookup index.

use std::collections::{BTreeMap, HashMap};

use super::Pool;
use crate::domain::{AssetId, NetworkTag, PoolId};
use crate::error::RouterError;

/// Lookup key: the asset pair in creation order plus the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolKey {
    /// First asset.
    pub asset_a: AssetId,
    /// Second asset.
    pub asset_b: AssetId,
    /// Network.
    pub network: NetworkTag,
}

impl PoolKey {
    /// Builds a key from borrowed parts.
    #[must_use]
    pub fn new(asset_a: AssetId, asset_b: AssetId, network: &NetworkTag) -> Self {
        Self {
            asset_a,
            asset_b,
            network: network.clone(),
        }
    }
}

/// Primary pool storage plus the denormalised lookup index.
///
/// Both maps are written together by [`insert`](Self::insert) and by
/// nothing else, so the index always mirrors the pools it points at.
#[derive(Debug, Clone)]
pub struct PoolRegistry {
    pools: BTreeMap<PoolId, Pool>,
    index: HashMap<PoolKey, PoolId>,
    next_id: PoolId,
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolRegistry {
    /// Empty registry; the first pool gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pools: BTreeMap::new(),
            index: HashMap::new(),
            next_id: PoolId::new(1),
        }
    }

    /// Identifier the next created pool will receive.
    #[must_use]
    pub const fn next_id(&self) -> PoolId {
        self.next_id
    }

    /// Number of pools ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` before the first pool is created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Looks a pool up by id.
    #[must_use]
    pub fn get(&self, id: PoolId) -> Option<&Pool> {
        self.pools.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: PoolId) -> Option<&mut Pool> {
        self.pools.get_mut(&id)
    }

    /// Resolves a key to a pool id.  Order-sensitive in the assets.
    #[must_use]
    pub fn lookup(&self, key: &PoolKey) -> Option<PoolId> {
        self.index.get(key).copied()
    }

    /// Returns `true` if a pool exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &PoolKey) -> bool {
        self.index.contains_key(key)
    }

    /// Iterates pools in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Pool> {
        self.pools.values()
    }

    /// Checks that a new pool can be stored under `key` and returns the
    /// id it will get.
    ///
    /// # Errors
    ///
    /// - [`RouterError::PoolAlreadyExists`] if `key` is taken.
    /// - [`RouterError::Overflow`] if the id space is exhausted.
    pub fn allocate(&self, key: &PoolKey) -> crate::error::Result<PoolId> {
        if self.contains(key) {
            return Err(RouterError::PoolAlreadyExists);
        }
        self.next_id
            .next()
            .ok_or(RouterError::Overflow("pool id space exhausted"))?;
        Ok(self.next_id)
    }

    /// Stores a pool obtained through [`allocate`](Self::allocate),
    /// writing the index entry and advancing the id counter in one step.
    pub(crate) fn insert(&mut self, pool: Pool) {
        let id = pool.id();
        let key = PoolKey::new(pool.asset_a(), pool.asset_b(), pool.network());
        self.index.insert(key, id);
        self.pools.insert(id, pool);
        if let Some(next) = id.next() {
            self.next_id = next;
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Amount, Shares};

    fn net(s: &str) -> NetworkTag {
        let Ok(tag) = NetworkTag::new(s) else {
            panic!("valid tag");
        };
        tag
    }

    fn asset(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    fn store(reg: &mut PoolRegistry, a: u8, b: u8, network: &str) -> PoolId {
        let key = PoolKey::new(asset(a), asset(b), &net(network));
        let Ok(id) = reg.allocate(&key) else {
            panic!("allocate");
        };
        reg.insert(Pool::new(
            id,
            asset(a),
            asset(b),
            Amount::new(10),
            Amount::new(10),
            Shares::new(10),
            net(network),
        ));
        id
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut reg = PoolRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(store(&mut reg, 1, 2, "eth"), PoolId::new(1));
        assert_eq!(store(&mut reg, 1, 3, "eth"), PoolId::new(2));
        assert_eq!(reg.next_id(), PoolId::new(3));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn index_is_written_with_pool() {
        let mut reg = PoolRegistry::new();
        let id = store(&mut reg, 1, 2, "eth");
        let key = PoolKey::new(asset(1), asset(2), &net("eth"));
        assert_eq!(reg.lookup(&key), Some(id));
        assert_eq!(reg.get(id).map(Pool::id), Some(id));
    }

    #[test]
    fn lookup_is_order_and_network_sensitive() {
        let mut reg = PoolRegistry::new();
        store(&mut reg, 1, 2, "eth");
        assert_eq!(reg.lookup(&PoolKey::new(asset(2), asset(1), &net("eth"))), None);
        assert_eq!(reg.lookup(&PoolKey::new(asset(1), asset(2), &net("dot"))), None);
    }

    #[test]
    fn duplicate_key_rejected() {
        let mut reg = PoolRegistry::new();
        store(&mut reg, 1, 2, "eth");
        let key = PoolKey::new(asset(1), asset(2), &net("eth"));
        assert!(matches!(
            reg.allocate(&key),
            Err(RouterError::PoolAlreadyExists)
        ));
        // Reverse order on the same network is a different key.
        assert!(reg
            .allocate(&PoolKey::new(asset(2), asset(1), &net("eth")))
            .is_ok());
    }
}

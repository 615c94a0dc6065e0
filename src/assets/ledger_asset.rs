//! In-memory fungible asset.

use std::collections::{HashMap, HashSet};

use crate::domain::{Amount, AssetId, Identity};
use crate::error::RouterError;
use crate::traits::{Asset, TransferError};

/// A balance book implementing [`Asset`].
///
/// Holds balances per [`Identity`], a running total supply, and a set of
/// frozen accounts whose transfers (in either direction) are rejected.
/// Minting is unrestricted; the host decides who may call it.
///
/// # Examples
///
/// ```
/// use liquidity_router::assets::LedgerAsset;
/// use liquidity_router::domain::{Amount, AssetId, Identity};
/// use liquidity_router::traits::Asset;
///
/// let alice = Identity::from_bytes([1; 32]);
/// let bob = Identity::from_bytes([2; 32]);
/// let mut usdc = LedgerAsset::new(AssetId::from_bytes([9; 32]), "USD Coin", "USDC", 6);
/// usdc.mint(&alice, Amount::new(100)).expect("mint");
/// usdc.transfer(&alice, &bob, Amount::new(40), None).expect("transfer");
/// assert_eq!(usdc.balance_of(&bob), Amount::new(40));
/// ```
#[derive(Debug, Clone)]
pub struct LedgerAsset {
    id: AssetId,
    name: String,
    symbol: String,
    decimals: u8,
    metadata_uri: Option<String>,
    balances: HashMap<Identity, Amount>,
    total_supply: Amount,
    frozen: HashSet<Identity>,
}

impl LedgerAsset {
    /// Creates an asset with no supply.
    #[must_use]
    pub fn new(
        id: AssetId,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            metadata_uri: None,
            balances: HashMap::new(),
            total_supply: Amount::ZERO,
            frozen: HashSet::new(),
        }
    }

    /// Attaches a metadata URI.
    #[must_use]
    pub fn with_metadata_uri(mut self, uri: impl Into<String>) -> Self {
        self.metadata_uri = Some(uri.into());
        self
    }

    /// Creates `amount` new units owned by `to`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the supply or the balance would
    /// exceed `u128`.
    pub fn mint(&mut self, to: &Identity, amount: Amount) -> crate::error::Result<()> {
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(RouterError::Overflow("total supply overflow"))?;
        let balance = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(RouterError::Overflow("balance overflow"))?;
        self.total_supply = supply;
        self.balances.insert(*to, balance);
        Ok(())
    }

    /// Freezes or unfreezes `account`.
    pub fn set_frozen(&mut self, account: &Identity, frozen: bool) {
        if frozen {
            self.frozen.insert(*account);
        } else {
            self.frozen.remove(account);
        }
    }

    /// Number of accounts holding a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.values().filter(|b| !b.is_zero()).count()
    }
}

impl Asset for LedgerAsset {
    fn id(&self) -> AssetId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn metadata_uri(&self) -> Option<&str> {
        self.metadata_uri.as_deref()
    }

    fn balance_of(&self, owner: &Identity) -> Amount {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn transfer(
        &mut self,
        from: &Identity,
        to: &Identity,
        amount: Amount,
        _memo: Option<&[u8]>,
    ) -> Result<(), TransferError> {
        if self.frozen.contains(from) || self.frozen.contains(to) {
            return Err(TransferError::Rejected("account frozen"));
        }
        let available = self.balance_of(from);
        let Some(remaining) = available.checked_sub(&amount) else {
            return Err(TransferError::InsufficientBalance {
                available,
                requested: amount,
            });
        };
        if from == to {
            return Ok(());
        }
        // Credit cannot overflow: it is bounded by total supply.
        let credited = self.balance_of(to).checked_add(&amount).unwrap_or(Amount::MAX);
        self.balances.insert(*from, remaining);
        self.balances.insert(*to, credited);
        Ok(())
    }
}

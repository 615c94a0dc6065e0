//! Asset handles owned by the router, keyed by the id they registered under.

use core::fmt;
use std::collections::BTreeMap;

use crate::domain::AssetId;
use crate::error::RouterError;
use crate::traits::Asset;

/// Registered [`Asset`] implementations.
///
/// A handle's id is read once, at registration, and never again: every
/// later lookup goes by the stored key.  Callers of the pool engine name
/// assets by [`AssetId`] and cannot substitute an implementation of their
/// own for a registered one.
#[derive(Default)]
pub struct AssetBook {
    handles: BTreeMap<AssetId, Box<dyn Asset>>,
}

impl AssetBook {
    /// Empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle registered under `id`.
    #[must_use]
    pub fn get(&self, id: &AssetId) -> Option<&dyn Asset> {
        self.handles.get(id).map(|h| &**h)
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &AssetId) -> bool {
        self.handles.contains_key(id)
    }

    /// Number of registered assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` before the first registration.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Registered ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &AssetId> {
        self.handles.keys()
    }

    /// Stores `handle` under the id it reports now.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] if the id is taken.
    pub(crate) fn register(&mut self, handle: Box<dyn Asset>) -> crate::error::Result<AssetId> {
        let id = handle.id();
        if self.contains(&id) {
            return Err(RouterError::InvalidConfiguration("asset id already registered"));
        }
        self.handles.insert(id, handle);
        Ok(id)
    }

    /// Runs `f` with mutable access to the two distinct handles `first`
    /// and `second`.  Both are back in the book when this returns.
    ///
    /// # Errors
    ///
    /// - [`RouterError::AssetNotFound`] if either id is unregistered.
    /// - Whatever `f` returns.
    pub(crate) fn with_pair<R>(
        &mut self,
        first: AssetId,
        second: AssetId,
        f: impl FnOnce(&mut dyn Asset, &mut dyn Asset) -> crate::error::Result<R>,
    ) -> crate::error::Result<R> {
        let mut a = self.handles.remove(&first).ok_or(RouterError::AssetNotFound)?;
        let Some(mut b) = self.handles.remove(&second) else {
            self.handles.insert(first, a);
            return Err(RouterError::AssetNotFound);
        };
        let result = f(&mut *a, &mut *b);
        self.handles.insert(first, a);
        self.handles.insert(second, b);
        result
    }
}

impl fmt::Debug for AssetBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.handles.iter().map(|(id, h)| (id, h.symbol())))
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::assets::LedgerAsset;
    use crate::domain::{Amount, Identity};

    const HOLDER: Identity = Identity::from_bytes([1; 32]);

    fn ledger(b: u8) -> Box<dyn Asset> {
        let mut asset = LedgerAsset::new(AssetId::from_bytes([b; 32]), "A", "A", 0);
        let Ok(()) = asset.mint(&HOLDER, Amount::new(10)) else {
            panic!("mint");
        };
        Box::new(asset)
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut book = AssetBook::new();
        assert!(book.register(ledger(1)).is_ok());
        assert!(matches!(
            book.register(ledger(1)),
            Err(RouterError::InvalidConfiguration(_))
        ));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn pair_access_returns_handles() {
        let mut book = AssetBook::new();
        let (Ok(a), Ok(b)) = (book.register(ledger(1)), book.register(ledger(2))) else {
            panic!("register");
        };
        let Ok(()) = book.with_pair(a, b, |x, y| {
            x.transfer(&HOLDER, &Identity::zero(), Amount::new(4), None)?;
            y.transfer(&HOLDER, &Identity::zero(), Amount::new(6), None)?;
            Ok(())
        }) else {
            panic!("pair");
        };
        assert_eq!(book.len(), 2);
        assert_eq!(book.get(&a).map(|h| h.balance_of(&HOLDER)), Some(Amount::new(6)));
        assert_eq!(book.get(&b).map(|h| h.balance_of(&HOLDER)), Some(Amount::new(4)));
    }

    #[test]
    fn missing_second_restores_first() {
        let mut book = AssetBook::new();
        let Ok(a) = book.register(ledger(1)) else {
            panic!("register");
        };
        let missing = AssetId::from_bytes([9; 32]);
        assert!(matches!(
            book.with_pair(a, missing, |_, _| Ok(())),
            Err(RouterError::AssetNotFound)
        ));
        assert!(book.contains(&a));
    }
}

//! The asset-transfer capability consumed by the pool engine.
//!
//! The router never holds balances itself: every deposit and payout goes
//! through an [`Asset`] implementation.  Any type offering transfers,
//! balances and metadata can back a pool side.
//!
//! # Trust
//!
//! Only the router owner hands implementations to the engine, through
//! [`register_asset`](crate::pools::LiquidityRouter::register_asset).  The
//! id is read once at registration and an id cannot be registered twice.
//! Traders name assets by [`AssetId`] and cannot substitute an
//! implementation of their own.
//!
//! Registered implementations may still refuse transfers.  The engine
//! calls [`Asset::transfer`] only after all validation has passed and
//! before touching its own registries, and reverses earlier transfers of
//! the same operation if a later one fails.

use thiserror::Error;

use crate::domain::{Amount, AssetId, Identity};

/// Why an asset refused a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The sender does not hold enough of the asset.
    #[error("insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance {
        /// Sender's balance.
        available: Amount,
        /// Amount the transfer asked for.
        requested: Amount,
    },

    /// The asset's own rules rejected the transfer.
    #[error("transfer rejected: {0}")]
    Rejected(&'static str),
}

/// A fungible asset that can move value between identities.
///
/// # Implementors
///
/// - [`LedgerAsset`](crate::assets::LedgerAsset): an in-memory balance book.
pub trait Asset {
    /// Identifier under which pools refer to this asset.  The router reads
    /// it once, when the handle is registered.
    fn id(&self) -> AssetId;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Ticker symbol.
    fn symbol(&self) -> &str;

    /// Number of decimal places in the display unit.
    fn decimals(&self) -> u8;

    /// Optional pointer to off-chain metadata.
    fn metadata_uri(&self) -> Option<&str>;

    /// Balance held by `owner`.
    fn balance_of(&self, owner: &Identity) -> Amount;

    /// Total units in existence.
    fn total_supply(&self) -> Amount;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] when the asset refuses the move; the
    /// asset's balances must then be unchanged.
    fn transfer(
        &mut self,
        from: &Identity,
        to: &Identity,
        amount: Amount,
        memo: Option<&[u8]>,
    ) -> Result<(), TransferError>;
}

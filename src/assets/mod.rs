//! Concrete [`Asset`](crate::traits::Asset) implementations and the book
//! of handles the pool engine moves value through.

mod book;
mod ledger_asset;

pub use book::AssetBook;
pub use ledger_asset::LedgerAsset;

//! Unified error types for the liquidity router.
//!
//! Every fallible operation in the crate returns [`RouterError`].  Errors
//! are tagged outcomes of a single call: a failed operation leaves every
//! registry exactly as it was before the call.

use thiserror::Error;

use crate::domain::Amount;
use crate::traits::TransferError;

/// Error returned by pool, routing, messaging and admin operations.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Caller identity does not match the owner or the bridge validator.
    #[error("unauthorized caller")]
    Unauthorized,

    /// Zero, negative or out-of-range numeric input.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The swap would drain a reserve to zero or below.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// No pool matches the key, or the matching pool is inactive.
    #[error("pool not found")]
    PoolNotFound,

    /// No asset is registered under the identifier.
    #[error("asset not registered")]
    AssetNotFound,

    /// A pool already exists for `(asset_a, asset_b, network)`.
    #[error("pool already exists")]
    PoolAlreadyExists,

    /// Output fell below the caller's minimum.
    #[error("slippage exceeded: amount_out {amount_out} < min_amount_out {min_amount_out}")]
    SlippageExceeded {
        /// Output the pool would have paid.
        amount_out: Amount,
        /// Minimum the caller accepted.
        min_amount_out: Amount,
    },

    /// The subsystem is paused.
    #[error("subsystem is paused")]
    Paused,

    /// Route or network mismatch, self-referential route, bad network tag.
    #[error("invalid chain: {0}")]
    InvalidChain(&'static str),

    /// Message is unknown, malformed, or not attested.
    #[error("invalid message: {0}")]
    InvalidMessage(&'static str),

    /// No bridge registered under the identifier, or the bridge is inactive.
    #[error("bridge not found")]
    BridgeNotFound,

    /// Message already processed, or already attested by this validator.
    #[error("duplicate message")]
    DuplicateMessage,

    /// Computed message fee is below the bridge minimum.
    #[error("insufficient fee: {fee} < {min_fee}")]
    InsufficientFee {
        /// Fee computed for the message.
        fee: Amount,
        /// Bridge minimum.
        min_fee: Amount,
    },

    /// Arithmetic overflow in an intermediate computation.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow in an intermediate computation.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The asset-transfer collaborator refused a transfer.
    #[error("asset transfer failed: {0}")]
    TransferFailed(#[from] TransferError),

    /// A transfer failed and sending back the operation's earlier transfer
    /// failed too.  The earlier transfer's funds sit with its recipient
    /// with no registry entry behind them.
    #[error("asset transfer failed: {transfer}; reversal failed: {reversal}")]
    ReversalFailed {
        /// Error of the transfer that aborted the operation.
        transfer: TransferError,
        /// Error of the attempted reversal.
        reversal: TransferError,
    },

    /// A configuration value is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A deployment file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, RouterError>;

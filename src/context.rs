//! Per-call execution context.

use crate::domain::Identity;

/// The authenticated caller and the block a call executes in.
///
/// The host ledger builds one `CallContext` per transaction and passes it to
/// every state-changing operation.  Block heights are monotonically
/// increasing across calls; the engines record them on events, messages and
/// attestations but never check them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    /// Identity that signed the call.
    pub caller: Identity,
    /// Height of the block containing the call.
    pub block_height: u64,
}

impl CallContext {
    /// Creates a context for `caller` at `block_height`.
    #[must_use]
    pub const fn new(caller: Identity, block_height: u64) -> Self {
        Self {
            caller,
            block_height,
        }
    }
}

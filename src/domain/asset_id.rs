//! Chain-agnostic asset identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::identity::decode_hex32;
use crate::error::RouterError;

/// Identifier of an asset contract on any network.
///
/// Wraps a fixed-size `[u8; 32]`.  All byte sequences are valid, so
/// construction from bytes is infallible; the hex form is used for
/// serialisation.
///
/// # Examples
///
/// ```
/// use liquidity_router::domain::AssetId;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// assert_eq!(usdc.as_bytes(), [1u8; 32]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({}..)", hex::encode(&self.0[..4]))
    }
}

impl From<AssetId> for String {
    fn from(id: AssetId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for AssetId {
    type Error = RouterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        decode_hex32(&s)
            .map(Self)
            .ok_or(RouterError::InvalidConfiguration("asset id must be 64 hex digits"))
    }
}

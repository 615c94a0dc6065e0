//! Opaque cross-chain message payload.

use serde::{Deserialize, Serialize};

use crate::error::RouterError;

/// Largest accepted payload, in bytes.
pub const MAX_PAYLOAD_LEN: usize = 1024;

/// Opaque bytes carried by a cross-chain message, at most
/// [`MAX_PAYLOAD_LEN`] long.  Serialised as a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Payload(Vec<u8>);

impl Payload {
    /// Wraps payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidMessage`] if `bytes` is longer than
    /// [`MAX_PAYLOAD_LEN`].
    pub fn new(bytes: impl Into<Vec<u8>>) -> crate::error::Result<Self> {
        let bytes = bytes.into();
        if bytes.len() > MAX_PAYLOAD_LEN {
            return Err(RouterError::InvalidMessage("payload longer than 1024 bytes"));
        }
        Ok(Self(bytes))
    }

    /// Returns the payload bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for an empty payload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for Payload {
    type Error = RouterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let bytes = hex::decode(s.strip_prefix("0x").unwrap_or(&s))
            .map_err(|_| RouterError::InvalidMessage("payload is not hex"))?;
        Self::new(bytes)
    }
}

impl From<Payload> for String {
    fn from(p: Payload) -> Self {
        hex::encode(p.0)
    }
}

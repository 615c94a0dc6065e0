//! Authenticated caller identities.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouterError;

/// Decodes exactly 32 bytes from a hex string, with or without a `0x` prefix.
pub(crate) fn decode_hex32(s: &str) -> Option<[u8; 32]> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let mut out = [0u8; 32];
    hex::decode_to_slice(digits, &mut out).ok()?;
    Some(out)
}

/// A 32-byte account identity: a pool provider, a bridge validator, the
/// owner, or the custody account that holds pooled assets.
///
/// Identities render and parse as 64 hex digits, which is also their
/// serialised form in deployment files and event streams.
///
/// # Examples
///
/// ```
/// use liquidity_router::domain::Identity;
///
/// let alice = Identity::from_bytes([0xA1; 32]);
/// let parsed: Identity = alice.to_string().parse().expect("hex");
/// assert_eq!(parsed, alice);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Identity([u8; 32]);

impl Identity {
    /// Creates an `Identity` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The all-zero identity. Never a valid owner.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the all-zero identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First four bytes are enough to tell accounts apart in logs.
        write!(f, "Identity({}..)", hex::encode(&self.0[..4]))
    }
}

impl FromStr for Identity {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex32(s)
            .map(Self)
            .ok_or(RouterError::InvalidConfiguration("identity must be 64 hex digits"))
    }
}

impl From<Identity> for String {
    fn from(id: Identity) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for Identity {
    type Error = RouterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// Wallet and contract addresses
//
// Addresses are bech32 strings handed over by the chain client. They are
// never decoded here, only compared, and the comparison ignores ASCII case:
// "zig1ABC" and "zig1abc" designate the same account.

use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// Opaque, case-insensitive chain address (wallet or contract)
#[derive(Serialize, Deserialize, Clone, Debug, Eq)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn new<S: Into<String>>(address: S) -> Self {
        Self(address.into())
    }

    /// Build an address from a raw query response field.
    /// Blank values are how unset owners come back from the contracts.
    pub fn from_raw(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against an optional role holder.
    /// An absent holder never matches.
    #[inline]
    pub fn matches(&self, holder: Option<&WalletAddress>) -> bool {
        holder.map_or(false, |h| h == self)
    }
}

impl PartialEq for WalletAddress {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

// Must agree with PartialEq: hash the lowercase form
impl Hash for WalletAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WalletAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WalletAddress {
    fn from(value: String) -> Self {
        Self(value)
    }
}

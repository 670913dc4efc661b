// Claim Status enumeration
// Derived view of a claim at a given time, never stored

use serde::{Deserialize, Serialize};

/// Claim status at an evaluation instant
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClaimStatus {
    /// Not revoked and not past its expiry
    Active,

    /// Was valid, expiry is at or before the evaluation time
    Expired,

    /// Explicitly revoked by its issuer or the identity owner.
    /// Takes precedence over expiry.
    Revoked,
}

impl ClaimStatus {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, ClaimStatus::Active)
    }

    /// Get human-readable status name
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Active => "Active",
            ClaimStatus::Expired => "Expired",
            ClaimStatus::Revoked => "Revoked",
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

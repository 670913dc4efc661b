use crate::{
    identity::{evaluate_verification_at, Identity, RequiredTopics},
    time::TimestampSeconds,
};
use serde::{Deserialize, Serialize};

/// Where an identity stands in the issuance workflow
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdentityStage {
    /// No identity contract for the wallet
    NoIdentity,
    /// Identity contract deployed, not bound in the registry
    IdentityCreated,
    /// Bound in the registry, no claims yet
    Registered,
    /// Has claims, but not every required topic is satisfied
    ClaimsPending,
    /// Every required topic has an active claim
    Verified,
}

impl IdentityStage {
    pub fn of(identity: &Identity, required: &RequiredTopics, now: TimestampSeconds) -> Self {
        if !identity.has_onchain_id() {
            return IdentityStage::NoIdentity;
        }
        if !identity.registered {
            return IdentityStage::IdentityCreated;
        }
        if evaluate_verification_at(identity, required, now).verified {
            return IdentityStage::Verified;
        }
        if identity.claims.is_empty() {
            IdentityStage::Registered
        } else {
            IdentityStage::ClaimsPending
        }
    }

    /// Claims can only be added once the identity is registered
    #[inline]
    pub fn accepts_claims(&self) -> bool {
        matches!(
            self,
            IdentityStage::Registered | IdentityStage::ClaimsPending | IdentityStage::Verified
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityStage::NoIdentity => "No Identity",
            IdentityStage::IdentityCreated => "Identity Created",
            IdentityStage::Registered => "Registered",
            IdentityStage::ClaimsPending => "Claims Pending",
            IdentityStage::Verified => "Verified",
        }
    }
}

impl Identity {
    #[inline]
    pub fn stage(&self, required: &RequiredTopics, now: TimestampSeconds) -> IdentityStage {
        IdentityStage::of(self, required, now)
    }
}

impl std::fmt::Display for IdentityStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

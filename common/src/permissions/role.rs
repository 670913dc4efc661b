// Roles a wallet can hold across the TREX contracts

use crate::identity::TopicId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// May deploy new token suites through the factory
    FactoryAdmin,
    TokenOwner,
    TokenIssuer,
    /// Operational role on a token: mint, burn, freeze, forced transfer
    TokenAgent,
    /// Approves redemption and issuance requests
    TokenController,
    /// Binds wallets to identities and countries
    IdentityRegistryOwner,
    /// Maintains the required claim topics
    ClaimTopicsOwner,
    ComplianceOwner,
    /// Trusted issuer for at least one topic
    TrustedIssuer,
    /// Trusted issuer for this specific topic
    TrustedIssuerForTopic(TopicId),
    /// The wallet the target identity belongs to
    IdentityOwner,
}

impl Role {
    /// Whether the role only exists within a selected token contract
    #[inline]
    pub fn is_per_token(&self) -> bool {
        matches!(
            self,
            Role::TokenOwner | Role::TokenIssuer | Role::TokenAgent | Role::TokenController
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::FactoryAdmin => write!(f, "factory admin"),
            Role::TokenOwner => write!(f, "token owner"),
            Role::TokenIssuer => write!(f, "token issuer"),
            Role::TokenAgent => write!(f, "token agent"),
            Role::TokenController => write!(f, "token controller"),
            Role::IdentityRegistryOwner => write!(f, "Identity Registry owner"),
            Role::ClaimTopicsOwner => write!(f, "Claim Topics Registry owner"),
            Role::ComplianceOwner => write!(f, "compliance owner"),
            Role::TrustedIssuer => write!(f, "trusted issuer"),
            Role::TrustedIssuerForTopic(topic) => write!(f, "trusted issuer for {}", topic),
            Role::IdentityOwner => write!(f, "identity owner"),
        }
    }
}

/// "A", "A or B", "A, B or C"
pub fn describe_roles(roles: &[Role]) -> String {
    match roles {
        [] => "no role".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(Role::to_string).collect();
            format!("{} or {}", head.join(", "), last)
        }
    }
}

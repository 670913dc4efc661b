// Gated dashboard actions and the roles that unlock them

use crate::{
    identity::TopicId,
    permissions::{describe_roles, Role},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    // Factory
    CreateToken,

    // Token administration (selected token)
    Mint,
    Burn,
    Freeze,
    ForcedTransfer,
    Pause,
    ManageAgents,
    ApproveRedemption,

    // Registries
    ManageCompliance,
    RegisterIdentity,
    ManageClaimTopics,

    // KYC provider
    CreateOnchainId,
    IssueKycClaim,
}

impl Action {
    pub const ALL: [Action; 13] = [
        Action::CreateToken,
        Action::Mint,
        Action::Burn,
        Action::Freeze,
        Action::ForcedTransfer,
        Action::Pause,
        Action::ManageAgents,
        Action::ApproveRedemption,
        Action::ManageCompliance,
        Action::RegisterIdentity,
        Action::ManageClaimTopics,
        Action::CreateOnchainId,
        Action::IssueKycClaim,
    ];

    /// Any one of these roles allows the action
    pub fn required_roles(&self, kyc_topic: TopicId) -> Vec<Role> {
        match self {
            Action::CreateToken => vec![Role::FactoryAdmin],
            Action::Mint
            | Action::Burn
            | Action::Freeze
            | Action::ForcedTransfer
            | Action::Pause => vec![Role::TokenAgent, Role::TokenOwner],
            Action::ManageAgents => vec![Role::TokenOwner],
            Action::ApproveRedemption => vec![Role::TokenController],
            Action::ManageCompliance => vec![Role::ComplianceOwner],
            Action::RegisterIdentity => vec![Role::IdentityRegistryOwner],
            Action::ManageClaimTopics => vec![Role::ClaimTopicsOwner],
            Action::CreateOnchainId | Action::IssueKycClaim => {
                vec![Role::TrustedIssuerForTopic(kyc_topic)]
            }
        }
    }

    /// Whether a token must be selected
    #[inline]
    pub fn needs_token(&self) -> bool {
        matches!(
            self,
            Action::Mint
                | Action::Burn
                | Action::Freeze
                | Action::ForcedTransfer
                | Action::Pause
                | Action::ManageAgents
                | Action::ApproveRedemption
        )
    }

    /// Verb phrase used in denial messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CreateToken => "create tokens",
            Action::Mint => "mint tokens",
            Action::Burn => "burn tokens",
            Action::Freeze => "freeze addresses",
            Action::ForcedTransfer => "force transfers",
            Action::Pause => "pause the token",
            Action::ManageAgents => "manage token agents",
            Action::ApproveRedemption => "approve redemption requests",
            Action::ManageCompliance => "manage compliance modules",
            Action::RegisterIdentity => "register identities",
            Action::ManageClaimTopics => "manage required claim topics",
            Action::CreateOnchainId => "create on-chain identities",
            Action::IssueKycClaim => "issue KYC claims",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why an action is blocked
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenialReason {
    NotConnected,
    NoTokenSelected,
    MissingRole,
}

/// A blocked action, with the roles that would have allowed it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Denial {
    pub action: Action,
    pub reason: DenialReason,
    pub required: Vec<Role>,
}

impl Denial {
    pub fn not_connected(action: Action) -> Self {
        Self {
            action,
            reason: DenialReason::NotConnected,
            required: Vec::new(),
        }
    }

    pub fn no_token(action: Action, required: Vec<Role>) -> Self {
        Self {
            action,
            reason: DenialReason::NoTokenSelected,
            required,
        }
    }

    pub fn missing_role(action: Action, required: Vec<Role>) -> Self {
        Self {
            action,
            reason: DenialReason::MissingRole,
            required,
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            DenialReason::NotConnected => write!(f, "Connect a wallet to {}", self.action),
            DenialReason::NoTokenSelected => write!(f, "Select a token first to {}", self.action),
            DenialReason::MissingRole => write!(
                f,
                "Only the {} can {}",
                describe_roles(&self.required),
                self.action
            ),
        }
    }
}

impl std::error::Error for Denial {}

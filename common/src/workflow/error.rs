// Workflow Error types
// Failures of the issuance workflow, raised before any chain call

use crate::{
    identity::{ClaimId, TopicId},
    permissions::{describe_roles, Denial, DenialReason, Role},
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Actor lacks every role that allows the transition
    #[error("Only the {} can {action}", describe_roles(.required))]
    Unauthorized { action: String, required: Vec<Role> },

    #[error("No identity found for wallet {0}")]
    IdentityNotFound(String),

    #[error("Claim {0} not found")]
    ClaimNotFound(ClaimId),

    #[error("{0} is not a required topic")]
    TopicNotFound(TopicId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Precondition failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Connect a wallet first")]
    NoWallet,

    #[error("Wallet already has an on-chain identity")]
    IdentityAlreadyExists,

    #[error("Wallet has no on-chain identity yet")]
    IdentityNotCreated,

    #[error("Identity is already registered")]
    IdentityAlreadyRegistered,

    #[error("Identity must be registered before claims can be added")]
    IdentityNotRegistered,

    #[error("Not authorized to issue claims for {topic}")]
    TopicNotAuthorized { topic: TopicId },

    #[error("Claim {0} is already revoked")]
    ClaimAlreadyRevoked(ClaimId),

    #[error("No required claim topics are configured")]
    EmptyRequiredTopics,

    #[error("{0} is already required")]
    DuplicateRequiredTopic(TopicId),

    #[error("Invalid country code '{0}'")]
    InvalidCountry(String),
}

impl WorkflowError {
    pub fn unauthorized<S: Into<String>>(action: S, required: Vec<Role>) -> Self {
        WorkflowError::Unauthorized {
            action: action.into(),
            required,
        }
    }

    #[inline]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, WorkflowError::Unauthorized { .. })
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WorkflowError::IdentityNotFound(_)
                | WorkflowError::ClaimNotFound(_)
                | WorkflowError::TopicNotFound(_)
        )
    }

    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(self, WorkflowError::Validation(_))
    }
}

impl From<Denial> for WorkflowError {
    fn from(denial: Denial) -> Self {
        match denial.reason {
            DenialReason::NotConnected => ValidationError::NoWallet.into(),
            DenialReason::NoTokenSelected | DenialReason::MissingRole => {
                WorkflowError::unauthorized(denial.action.as_str(), denial.required)
            }
        }
    }
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;

use anyhow::Error;
use thiserror::Error;
use trex_common::{
    address::WalletAddress,
    workflow::{ValidationError, WorkflowError},
};

#[derive(Debug, Error)]
pub enum IssuanceError {
    /// Rejected locally, nothing was sent
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
    #[error("Wallet {wallet} is not verified: {reason}")]
    NotVerified {
        wallet: WalletAddress,
        reason: String,
    },
    /// Query or transaction failure from the contract layer
    #[error(transparent)]
    Chain(#[from] Error),
}

impl From<ValidationError> for IssuanceError {
    fn from(err: ValidationError) -> Self {
        IssuanceError::Workflow(err.into())
    }
}

impl IssuanceError {
    #[inline]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, IssuanceError::Workflow(err) if err.is_unauthorized())
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, IssuanceError::Workflow(err) if err.is_not_found())
    }

    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(self, IssuanceError::Workflow(err) if err.is_validation())
    }

    /// Local rejection, the chain was never asked to mutate anything
    #[inline]
    pub fn is_local(&self) -> bool {
        !matches!(self, IssuanceError::Chain(_))
    }
}

pub type IssuanceResult<T> = Result<T, IssuanceError>;

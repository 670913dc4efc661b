// Identity Error types
// Errors raised while building identity values from untrusted input

use thiserror::Error;

/// Identity value construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// Topic ids are positive integers
    #[error("Invalid claim topic: {0}. Topics are positive integers")]
    InvalidTopic(u32),

    /// Country must be an ISO 3166-1 alpha-2 code
    #[error("Invalid country code '{0}': expected two ASCII letters (ISO 3166-1 alpha-2)")]
    InvalidCountryCode(String),
}

/// Result type for identity operations
pub type IdentityResult<T> = Result<T, IdentityError>;

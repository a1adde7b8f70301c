//! Mutation error types.

use pairing_core::{GraphError, PairingError};
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error(transparent)]
    Pairing(#[from] PairingError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl MutationError {
    /// Returns true if the partner argument was rejected.
    pub fn is_invalid_partner(&self) -> bool {
        matches!(
            self,
            Self::Pairing(PairingError::InvalidPartnerType { .. })
        )
    }
}

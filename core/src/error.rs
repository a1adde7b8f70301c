//! Common error types for pairing.

use crate::messages::ERR_INVALID_PARTNER_TYPE;
use crate::EntityId;
use thiserror::Error;

/// Errors raised by the pairing operation.
///
/// There is exactly one kind: the partner argument was not an entity.
/// The display text is fixed; `actual` only records what was received
/// so that diagnostics can say more than the user-facing message does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    /// The argument is not an instance of the Entity type.
    #[error("{}", ERR_INVALID_PARTNER_TYPE)]
    InvalidPartnerType { actual: &'static str },
}

impl PairingError {
    pub fn invalid_partner_type(actual: &'static str) -> Self {
        Self::InvalidPartnerType { actual }
    }

    /// Type name of the rejected argument.
    pub fn actual(&self) -> &'static str {
        match self {
            Self::InvalidPartnerType { actual } => actual,
        }
    }
}

/// Result type for pairing validation.
pub type PairingResult<T> = Result<T, PairingError>;

/// Errors that can occur during graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Entity not found.
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

//! Error types for the Registry.

use deaddrop_core::LayoutViolation;
use thiserror::Error;

/// Errors that can occur during registry operations.
///
/// Every variant is a precondition rejection: the operation aborted
/// before any log append, counter change, or event emission. None of
/// them is retried at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The identity already has a log entry.
    #[error("participant is already registered")]
    AlreadyRegistered,

    /// The participant counter is at the configured maximum.
    #[error("registry is at capacity")]
    RegistryFull,

    /// The identity has no log entry.
    #[error("participant is not registered")]
    NotRegistered,

    /// The identity's reconstructed message is already present.
    #[error("participant has already deposited a message")]
    AlreadyDeposited,

    /// The message fails the flag-region layout rules.
    #[error("message structure is invalid: {0}")]
    InvalidStructure(#[from] LayoutViolation),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

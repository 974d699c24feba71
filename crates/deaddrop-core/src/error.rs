//! Error types for Deaddrop Core.

use thiserror::Error;

/// Core errors that can occur while handling identities and actions.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("scalar exceeds 255 bits")]
    ScalarOutOfRange,

    #[error("malformed action: {0}")]
    MalformedAction(String),

    #[error("decoding error: {0}")]
    DecodingError(String),
}

/// A violation of the message flag-region layout.
///
/// Bits 249-254 of a [`MessageScalar`](crate::MessageScalar) tag the
/// message kind; these are the three rules constraining which flags may
/// combine. Each variant names the rule that was broken, so callers can
/// surface more than a bare "invalid" to the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutViolation {
    #[error("bit 249 requires bits 250-254 to be clear")]
    ExclusiveFlagConflict,

    #[error("bit 250 requires bit 251 to be set")]
    CompanionFlagMissing,

    #[error("bit 252 requires bits 253 and 254 to be clear")]
    TrailingFlagConflict,
}

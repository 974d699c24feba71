//! Action: the atomic unit of registry history.
//!
//! An action is an immutable key→value record. Once appended to a log it
//! is never edited, deleted, or reordered; state changes are new actions.

use serde::{Deserialize, Serialize};

use crate::types::{MessageScalar, ParticipantId};

/// An immutable record appended to the action log.
///
/// An admission carries no payload; a deposit carries the participant's
/// message. Replay distinguishes the two by the payload being present,
/// so a deposit for a key shadows the earlier admission for the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The participant this action concerns.
    pub key: ParticipantId,

    /// The deposited message, or `None` for an admission.
    pub value: Option<MessageScalar>,
}

impl Action {
    /// Create an admission action for a participant.
    pub const fn admission(key: ParticipantId) -> Self {
        Self { key, value: None }
    }

    /// Create a deposit action carrying a message.
    pub const fn deposit(key: ParticipantId, message: MessageScalar) -> Self {
        Self {
            key,
            value: Some(message),
        }
    }

    /// Check if this is an admission.
    pub const fn is_admission(&self) -> bool {
        self.value.is_none()
    }

    /// Check if this is a deposit.
    pub const fn is_deposit(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_has_no_payload() {
        let action = Action::admission(ParticipantId::from_bytes([1; 32]));
        assert!(action.is_admission());
        assert!(!action.is_deposit());
        assert_eq!(action.value, None);
    }

    #[test]
    fn test_deposit_carries_message() {
        let message = MessageScalar::from_u64(7);
        let action = Action::deposit(ParticipantId::from_bytes([1; 32]), message);
        assert!(action.is_deposit());
        assert_eq!(action.value, Some(message));
    }
}

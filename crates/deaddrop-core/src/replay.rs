//! Replay: recovering registry state for a key from an action history.
//!
//! The registry keeps no participant → message map. Whether a key is
//! registered, and what it deposited, is recovered on demand by folding
//! the action log. The fold inspects every action in the prefix exactly
//! once and never exits early; given a fixed prefix the result is the
//! same no matter who evaluates it or how many times.

use crate::action::Action;
use crate::types::{MessageScalar, ParticipantId};

/// Membership and message state recovered for a single key.
///
/// `owner` is `None` when no action in the replayed prefix matched the
/// key; callers read that as "not registered". Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconstructedState {
    /// The matched key, or `None` when the prefix holds no entry for it.
    pub owner: Option<ParticipantId>,

    /// The message from the last matching action, `None` if the last
    /// matching action was an admission (or nothing matched).
    pub message: Option<MessageScalar>,
}

impl ReconstructedState {
    /// Check whether the key is registered.
    pub const fn is_registered(&self) -> bool {
        self.owner.is_some()
    }

    /// Check whether the key has a deposited message.
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }
}

/// Fold an action sequence to recover the state for `key`.
///
/// The last matching action wins: a deposit appended after an admission
/// for the same key replaces both fields, which is what makes the
/// admission-then-deposit layout of the log visible as a single current
/// state. Non-matching actions leave the accumulator untouched, so the
/// result does not depend on their order.
pub fn reconstruct(key: &ParticipantId, actions: &[Action]) -> ReconstructedState {
    actions
        .iter()
        .fold(ReconstructedState::default(), |state, action| {
            if action.key == *key {
                ReconstructedState {
                    owner: Some(action.key),
                    message: action.value,
                }
            } else {
                state
            }
        })
}

//! In-memory implementation of the ActionLog trait.
//!
//! The log is held by whoever drives the registry, and the execution
//! model serializes operations at that level, so there is no interior
//! locking here.

use std::collections::HashMap;

use deaddrop_core::{reconstruct, Action, ParticipantId, ReconstructedState};

use crate::traits::ActionLog;

/// In-memory action log.
///
/// Alongside the action vector it keeps an incremental index mapping each
/// key to the position of its latest action, updated on every append.
/// When the replay bound covers the whole log, `latest_entry` answers
/// from the index; for a strict prefix it falls back to the reference
/// fold, since the index only knows about the full history.
#[derive(Debug, Default, Clone)]
pub struct MemoryLog {
    /// Actions in append order.
    actions: Vec<Action>,

    /// Latest position per key.
    latest: HashMap<ParticipantId, usize>,
}

impl MemoryLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All actions in append order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl ActionLog for MemoryLog {
    fn append(&mut self, action: Action) {
        self.latest.insert(action.key, self.actions.len());
        self.actions.push(action);
    }

    fn len(&self) -> usize {
        self.actions.len()
    }

    fn snapshot_up_to(&self, bound: usize) -> Vec<Action> {
        let end = bound.min(self.actions.len());
        self.actions[..end].to_vec()
    }

    fn latest_entry(&self, key: &ParticipantId, bound: usize) -> ReconstructedState {
        if bound >= self.actions.len() {
            return self
                .latest
                .get(key)
                .map(|&pos| {
                    let action = self.actions[pos];
                    ReconstructedState {
                        owner: Some(action.key),
                        message: action.value,
                    }
                })
                .unwrap_or_default();
        }

        reconstruct(key, &self.actions[..bound])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deaddrop_core::MessageScalar;
    use proptest::prelude::*;

    fn id(byte: u8) -> ParticipantId {
        ParticipantId::from_bytes([byte; 32])
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log = MemoryLog::new();
        log.append(Action::admission(id(1)));
        log.append(Action::admission(id(2)));
        log.append(Action::deposit(id(1), MessageScalar::from_u64(9)));

        assert_eq!(log.len(), 3);
        let snapshot = log.snapshot_up_to(10);
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].key, id(1));
        assert_eq!(snapshot[2].value, Some(MessageScalar::from_u64(9)));
    }

    #[test]
    fn test_snapshot_bound_truncates() {
        let mut log = MemoryLog::new();
        for i in 0..5 {
            log.append(Action::admission(id(i)));
        }
        assert_eq!(log.snapshot_up_to(3).len(), 3);
        assert_eq!(log.snapshot_up_to(0).len(), 0);
        assert_eq!(log.snapshot_up_to(100).len(), 5);
    }

    #[test]
    fn test_index_tracks_latest_action() {
        let mut log = MemoryLog::new();
        let message = MessageScalar::from_u64(42);
        log.append(Action::admission(id(1)));
        log.append(Action::deposit(id(1), message));

        let state = log.latest_entry(&id(1), 150);
        assert_eq!(state.owner, Some(id(1)));
        assert_eq!(state.message, Some(message));

        assert!(!log.latest_entry(&id(2), 150).is_registered());
    }

    #[test]
    fn test_bounded_lookup_sees_only_the_prefix() {
        let mut log = MemoryLog::new();
        log.append(Action::admission(id(1)));
        log.append(Action::deposit(id(1), MessageScalar::from_u64(7)));

        // A bound of 1 hides the deposit.
        let state = log.latest_entry(&id(1), 1);
        assert_eq!(state.message, None);
        assert!(state.is_registered());
    }

    proptest! {
        #[test]
        fn test_index_agrees_with_reference_fold(
            entries in prop::collection::vec((any::<u8>(), prop::option::of(any::<u64>())), 0..128),
            key_byte in any::<u8>(),
            bound in 0usize..160,
        ) {
            let mut log = MemoryLog::new();
            for (k, v) in entries {
                log.append(Action {
                    key: id(k),
                    value: v.map(MessageScalar::from_u64),
                });
            }

            let key = id(key_byte);
            let via_index = log.latest_entry(&key, bound);
            let via_fold = reconstruct(&key, &log.snapshot_up_to(bound));
            prop_assert_eq!(via_index, via_fold);
        }
    }
}

//! The ActionLog trait: the abstract interface for registry history.
//!
//! This trait allows the registry to be log-agnostic. The only shipped
//! implementation is the in-memory log; anything backing the trait must
//! preserve append order exactly.

use deaddrop_core::{reconstruct, Action, ParticipantId, ReconstructedState};

/// An ordered, append-only sequence of actions.
///
/// # Contract
///
/// - `append` always succeeds and is never rolled back; precondition
///   checks happen in the registry before the append.
/// - `snapshot_up_to(bound)` returns a prefix in append order. The bound
///   is a resource limit, not a query parameter: the caller configures it
///   above the longest history the registry can produce, so within the
///   operating envelope it never truncates.
pub trait ActionLog {
    /// Append an action to the log.
    fn append(&mut self, action: Action);

    /// Number of actions in the log.
    fn len(&self) -> usize;

    /// Check if the log is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A prefix of the log: at most `bound` actions, in append order.
    fn snapshot_up_to(&self, bound: usize) -> Vec<Action>;

    /// State for `key` as of the first `bound` actions.
    ///
    /// The default implementation replays the prefix with the reference
    /// fold. Implementations may answer from an index instead, as long
    /// as the result is identical to the fold for every key and bound.
    fn latest_entry(&self, key: &ParticipantId, bound: usize) -> ReconstructedState {
        reconstruct(key, &self.snapshot_up_to(bound))
    }
}

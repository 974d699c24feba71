//! Deterministic digest over a log prefix.
//!
//! Two instances that applied the same operations hold the same log, and
//! therefore the same digest. Tests use this to assert that replay-derived
//! state is a pure function of history.

use std::fmt;

use deaddrop_core::{canonical_action_bytes, Action};

/// Domain prefix for the log digest.
const DIGEST_DOMAIN: &[u8] = b"deaddrop-log-v0:";

/// A 32-byte Blake3 digest of a log prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogDigest(pub [u8; 32]);

impl LogDigest {
    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for LogDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogDigest({})", &self.to_hex()[..16])
    }
}

/// Digest a sequence of actions.
///
/// Each action contributes its canonical bytes, length-prefixed so that
/// entry boundaries cannot alias across actions.
pub fn log_digest(actions: &[Action]) -> LogDigest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DIGEST_DOMAIN);
    for action in actions {
        let bytes = canonical_action_bytes(action);
        hasher.update(&(bytes.len() as u64).to_le_bytes());
        hasher.update(&bytes);
    }
    LogDigest(*hasher.finalize().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deaddrop_core::{MessageScalar, ParticipantId};

    fn id(byte: u8) -> ParticipantId {
        ParticipantId::from_bytes([byte; 32])
    }

    #[test]
    fn test_digest_deterministic() {
        let actions = [
            Action::admission(id(1)),
            Action::deposit(id(1), MessageScalar::from_u64(3)),
        ];
        assert_eq!(log_digest(&actions), log_digest(&actions));
    }

    #[test]
    fn test_digest_is_order_sensitive() {
        let a = Action::admission(id(1));
        let b = Action::admission(id(2));
        assert_ne!(log_digest(&[a, b]), log_digest(&[b, a]));
    }

    #[test]
    fn test_digest_distinguishes_admission_from_deposit() {
        let admission = [Action::admission(id(1))];
        let deposit = [Action::deposit(id(1), MessageScalar::ZERO)];
        assert_ne!(log_digest(&admission), log_digest(&deposit));
    }

    #[test]
    fn test_empty_log_has_stable_digest() {
        assert_eq!(log_digest(&[]), log_digest(&[]));
        assert_ne!(log_digest(&[]), log_digest(&[Action::admission(id(1))]));
    }
}

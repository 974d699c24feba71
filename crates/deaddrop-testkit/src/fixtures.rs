//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a registry with an
//! administrator keypair, an in-memory log, and a recording event sink.

use deaddrop::{
    AdminAuthority, Keypair, MemoryLog, ParticipantId, RecordingSink, Registry, RegistryConfig,
    Result, SignedAdmission,
};

/// A registry under test, with its administrator.
pub struct TestRegistry {
    pub admin: Keypair,
    pub registry: Registry<MemoryLog, RecordingSink>,
}

impl TestRegistry {
    /// Create a fixture with a random administrator and default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a fixture with a specific config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            admin: Keypair::generate(),
            registry: Registry::new(MemoryLog::new(), RecordingSink::new(), config),
        }
    }

    /// Create with a deterministic administrator from a seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            admin: Keypair::from_seed(&seed),
            registry: Registry::new(
                MemoryLog::new(),
                RecordingSink::new(),
                RegistryConfig::default(),
            ),
        }
    }

    /// The authority checking admissions against this fixture's admin.
    pub fn authority(&self) -> AdminAuthority {
        AdminAuthority::new(self.admin.participant_id())
    }

    /// Admit a candidate through the full signed-admission path.
    pub fn admit(&mut self, candidate: ParticipantId) -> Result<()> {
        let admission = SignedAdmission::sign(&self.admin, candidate);
        let verified = self
            .authority()
            .verify(&admission)
            .expect("fixture admin signature must verify");
        self.registry.admit_participant(verified)
    }
}

impl Default for TestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic participant keypairs for multi-party tests.
///
/// Seeds differ in the first byte, so every call with the same count
/// yields the same identities.
pub fn participants(count: usize) -> Vec<Keypair> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            seed[1] = (i >> 8) as u8;
            Keypair::from_seed(&seed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use deaddrop::{MessageScalar, RegistryError};

    #[test]
    fn test_fixture_signed_admission_path() {
        let mut fixture = TestRegistry::new();
        let alice = participants(1)[0].participant_id();

        fixture.admit(alice).unwrap();
        assert_eq!(fixture.registry.total_participants(), 1);
        assert_eq!(fixture.admit(alice), Err(RegistryError::AlreadyRegistered));
    }

    #[test]
    fn test_fixture_deposit_and_read() {
        let mut fixture = TestRegistry::new();
        let alice = participants(1)[0].participant_id();
        fixture.admit(alice).unwrap();

        let message = MessageScalar::from_u64(77);
        fixture.registry.deposit_message(alice, message).unwrap();
        assert_eq!(fixture.registry.read_message(&alice).unwrap(), Some(message));
        assert_eq!(fixture.registry.events().events().len(), 1);
    }

    #[test]
    fn test_participants_are_deterministic_and_distinct() {
        let first = participants(3);
        let second = participants(3);

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.participant_id(), b.participant_id());
        }
        assert_ne!(first[0].participant_id(), first[1].participant_id());
        assert_ne!(first[1].participant_id(), first[2].participant_id());
    }
}

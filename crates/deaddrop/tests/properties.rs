//! Property tests over arbitrary operation sequences.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use deaddrop::core::reconstruct;
use deaddrop::{
    ActionLog, MemoryLog, MessageScalar, ParticipantId, RecordingSink, Registry, RegistryConfig,
};

/// One driver-visible operation against the registry.
#[derive(Debug, Clone, Copy)]
enum Op {
    Admit(u8),
    Deposit(u8, u64),
    DepositInvalid(u8),
    Read(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..16).prop_map(Op::Admit),
        (0u8..16, any::<u64>()).prop_map(|(k, m)| Op::Deposit(k, m)),
        (0u8..16).prop_map(Op::DepositInvalid),
        (0u8..16).prop_map(Op::Read),
    ]
}

fn id(byte: u8) -> ParticipantId {
    ParticipantId::from_bytes([byte; 32])
}

fn registry() -> Registry<MemoryLog, RecordingSink> {
    Registry::new(
        MemoryLog::new(),
        RecordingSink::new(),
        RegistryConfig::default(),
    )
}

proptest! {
    /// Counters only ever grow, by exactly one per successful mutation,
    /// and always agree with a directly-maintained model of the log.
    #[test]
    fn counters_match_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut reg = registry();
        let mut admitted: HashSet<u8> = HashSet::new();
        let mut deposited: HashMap<u8, u64> = HashMap::new();

        for operation in ops {
            let before = (reg.total_participants(), reg.total_messages());

            match operation {
                Op::Admit(k) => {
                    let result = reg.admit_participant(id(k));
                    if admitted.contains(&k) {
                        prop_assert!(result.is_err());
                    } else if (admitted.len() as u64) < reg.config().max_participants {
                        prop_assert!(result.is_ok());
                        admitted.insert(k);
                    }
                }
                Op::Deposit(k, m) => {
                    let result = reg.deposit_message(id(k), MessageScalar::from_u64(m));
                    if admitted.contains(&k) && !deposited.contains_key(&k) {
                        prop_assert!(result.is_ok());
                        deposited.insert(k, m);
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::DepositInvalid(k) => {
                    // Bit 250 without 251 always fails validation.
                    let bad = MessageScalar::ZERO.with_bit(250, true);
                    prop_assert!(reg.deposit_message(id(k), bad).is_err());
                }
                Op::Read(k) => {
                    let result = reg.read_message(&id(k));
                    if admitted.contains(&k) {
                        let expected = deposited.get(&k).map(|&m| MessageScalar::from_u64(m));
                        prop_assert_eq!(result, Ok(expected));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
            }

            let after = (reg.total_participants(), reg.total_messages());
            prop_assert!(after.0 >= before.0 && after.1 >= before.1);
            prop_assert!(after.0 - before.0 <= 1 && after.1 - before.1 <= 1);
        }

        prop_assert_eq!(reg.total_participants(), admitted.len() as u64);
        prop_assert_eq!(reg.total_messages(), deposited.len() as u64);
        prop_assert_eq!(
            reg.log().len() as u64,
            reg.total_participants() + reg.total_messages()
        );
    }

    /// Two registries driven through the same operations hold identical
    /// logs, digests, and replay-derived state.
    #[test]
    fn identical_drives_converge(ops in prop::collection::vec(op(), 0..100)) {
        let mut a = registry();
        let mut b = registry();

        for operation in ops {
            match operation {
                Op::Admit(k) => {
                    let ra = a.admit_participant(id(k));
                    let rb = b.admit_participant(id(k));
                    prop_assert_eq!(ra, rb);
                }
                Op::Deposit(k, m) => {
                    let scalar = MessageScalar::from_u64(m);
                    prop_assert_eq!(
                        a.deposit_message(id(k), scalar),
                        b.deposit_message(id(k), scalar)
                    );
                }
                Op::DepositInvalid(k) => {
                    let bad = MessageScalar::ZERO.with_bit(250, true);
                    prop_assert_eq!(
                        a.deposit_message(id(k), bad),
                        b.deposit_message(id(k), bad)
                    );
                }
                Op::Read(k) => {
                    prop_assert_eq!(a.read_message(&id(k)), b.read_message(&id(k)));
                }
            }
        }

        prop_assert_eq!(a.log_digest(), b.log_digest());
    }

    /// The registry's replay path agrees with the reference fold for
    /// every key it has ever seen.
    #[test]
    fn lookups_agree_with_reference_fold(ops in prop::collection::vec(op(), 0..150)) {
        let mut reg = registry();
        for operation in ops {
            match operation {
                Op::Admit(k) => { let _ = reg.admit_participant(id(k)); }
                Op::Deposit(k, m) => {
                    let _ = reg.deposit_message(id(k), MessageScalar::from_u64(m));
                }
                Op::DepositInvalid(k) => {
                    let bad = MessageScalar::ZERO.with_bit(250, true);
                    let _ = reg.deposit_message(id(k), bad);
                }
                Op::Read(_) => {}
            }
        }

        let window = reg.config().replay_window;
        let prefix = reg.log().snapshot_up_to(window);
        for k in 0u8..16 {
            let key = id(k);
            prop_assert_eq!(
                reg.log().latest_entry(&key, window),
                reconstruct(&key, &prefix)
            );
        }
    }
}

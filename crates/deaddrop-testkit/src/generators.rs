//! Proptest generators for property-based testing.

use proptest::prelude::*;

use deaddrop_core::{Action, Keypair, MessageScalar, ParticipantId};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a random ParticipantId.
pub fn participant_id() -> impl Strategy<Value = ParticipantId> {
    any::<[u8; 32]>().prop_map(ParticipantId::from_bytes)
}

/// Generate an arbitrary in-range message scalar.
pub fn message_scalar() -> impl Strategy<Value = MessageScalar> {
    any::<[u8; 32]>().prop_map(|mut bytes| {
        bytes[31] &= 0x7f;
        MessageScalar::from_bytes(bytes).expect("top bit cleared")
    })
}

/// Generate a structurally valid message scalar.
///
/// Arbitrary content bits with the flag region in one of its legal
/// shapes.
pub fn valid_message_scalar() -> impl Strategy<Value = MessageScalar> {
    (message_scalar(), 0usize..4).prop_map(|(base, shape)| {
        let flags: &[usize] = match shape {
            0 => &[],
            1 => &[249],
            2 => &[250, 251],
            _ => &[252],
        };
        let mut scalar = base;
        for bit in 249..=254 {
            scalar = scalar.with_bit(bit, false);
        }
        for &bit in flags {
            scalar = scalar.with_bit(bit, true);
        }
        scalar
    })
}

/// Generate a single action over a small identity pool.
///
/// A small pool makes key collisions likely, which is what replay tests
/// need to exercise last-match-wins.
pub fn action() -> impl Strategy<Value = Action> {
    (0u8..16, prop::option::of(any::<u64>())).prop_map(|(key, value)| Action {
        key: ParticipantId::from_bytes([key; 32]),
        value: value.map(MessageScalar::from_u64),
    })
}

/// Generate an action sequence of up to `max_len` entries.
pub fn action_sequence(max_len: usize) -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(action(), 0..=max_len)
}

//! Message scalars exercising each flag-region rule.
//!
//! Each helper takes a base scalar (usually random content bits) and
//! pins the flag region into a specific valid or violated shape, leaving
//! bits 0-248 untouched. Flags not named by the rule under test are
//! cleared so a stray bit cannot flip the verdict.

use deaddrop_core::MessageScalar;

fn with_flags(base: MessageScalar, set: &[usize]) -> MessageScalar {
    let mut scalar = base;
    for bit in 249..=254 {
        scalar = scalar.with_bit(bit, false);
    }
    for &bit in set {
        scalar = scalar.with_bit(bit, true);
    }
    scalar
}

/// Bit 249 alone: the exclusive flag with its companions clear. Valid.
pub fn exclusive_flag(base: MessageScalar) -> MessageScalar {
    with_flags(base, &[249])
}

/// Bit 249 with bit 250 also set. Violates the exclusivity rule.
pub fn exclusive_flag_conflict(base: MessageScalar) -> MessageScalar {
    with_flags(base, &[249, 250])
}

/// Bits 250 and 251 together. Valid.
pub fn paired_flags(base: MessageScalar) -> MessageScalar {
    with_flags(base, &[250, 251])
}

/// Bit 250 without its companion 251. Violates the companion rule.
pub fn pair_without_companion(base: MessageScalar) -> MessageScalar {
    with_flags(base, &[250])
}

/// Bit 252 with 253 and 254 clear. Valid.
pub fn tail_flag(base: MessageScalar) -> MessageScalar {
    with_flags(base, &[252])
}

/// Bit 252 with 253 set. Violates the trailing-flags rule.
pub fn tail_flag_conflict(base: MessageScalar) -> MessageScalar {
    with_flags(base, &[252, 253])
}

/// Flag region fully clear: plain content. Valid.
pub fn content_only(base: MessageScalar) -> MessageScalar {
    with_flags(base, &[])
}

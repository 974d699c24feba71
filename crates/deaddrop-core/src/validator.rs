//! Structural validation of message scalars.
//!
//! The flag region (bits 249-254) tags the kind of a message inside the
//! scalar itself, with no separate discriminant field. Three rules
//! constrain which flags may combine; bits 0-248 are unconstrained.
//! Bit indices are 0-based from the least significant bit and must not
//! drift: an off-by-one here silently enforces a different rule.

use crate::error::LayoutViolation;
use crate::types::MessageScalar;

/// First bit of the flag region. Everything below is free-form content.
pub const FLAG_REGION_START: usize = 249;

/// Check the flag-region layout, reporting the first rule violated.
///
/// The rules, each vacuously satisfied when its guard bit is clear:
///
/// - bit 249 set ⇒ bits 250-254 all clear
/// - bit 250 set ⇒ bit 251 set
/// - bit 252 set ⇒ bits 253 and 254 clear
pub fn validate_structure(message: &MessageScalar) -> Result<(), LayoutViolation> {
    if message.bit(249) && (250..=254).any(|i| message.bit(i)) {
        return Err(LayoutViolation::ExclusiveFlagConflict);
    }

    if message.bit(250) && !message.bit(251) {
        return Err(LayoutViolation::CompanionFlagMissing);
    }

    if message.bit(252) && (message.bit(253) || message.bit(254)) {
        return Err(LayoutViolation::TrailingFlagConflict);
    }

    Ok(())
}

/// Boolean form of [`validate_structure`].
pub fn is_valid_structure(message: &MessageScalar) -> bool {
    validate_structure(message).is_ok()
}

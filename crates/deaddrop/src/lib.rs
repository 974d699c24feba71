//! # Deaddrop
//!
//! An append-only, event-sourced registry: a bounded set of participants
//! admitted one at a time by an administrator, each allowed to deposit at
//! most one fixed-width message, subject to a structural check on the
//! message's bit layout.
//!
//! ## Key Concepts
//!
//! - **Action**: Immutable. Never edited. State changes are new actions.
//! - **Replay**: Membership and message state are recovered by folding
//!   the action log; the last action for a key wins. There is no stored
//!   participant → message map.
//! - **Counters**: Two monotonic totals (participants, messages) are the
//!   only durable summary of how many operations succeeded.
//!
//! ## Usage
//!
//! ```rust
//! use deaddrop::{AdminAuthority, Registry, RegistryConfig, SignedAdmission};
//! use deaddrop::core::{Keypair, MessageScalar};
//! use deaddrop::log::MemoryLog;
//! use deaddrop::RecordingSink;
//!
//! let admin = Keypair::generate();
//! let authority = AdminAuthority::new(admin.participant_id());
//! let mut registry = Registry::new(
//!     MemoryLog::new(),
//!     RecordingSink::new(),
//!     RegistryConfig::default(),
//! );
//!
//! // The administrator vouches for a candidate; the registry admits it.
//! let alice = Keypair::generate();
//! let admission = SignedAdmission::sign(&admin, alice.participant_id());
//! let candidate = authority.verify(&admission).unwrap();
//! registry.admit_participant(candidate).unwrap();
//!
//! // The participant deposits one message and anyone can read it back.
//! let message = MessageScalar::from_u64(42);
//! registry.deposit_message(alice.participant_id(), message).unwrap();
//! assert_eq!(
//!     registry.read_message(&alice.participant_id()).unwrap(),
//!     Some(message)
//! );
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `deaddrop::core` - Core primitives (actions, replay, validation)
//! - `deaddrop::log` - The action log

pub mod auth;
pub mod error;
pub mod event;
pub mod registry;

// Re-export component crates
pub use deaddrop_core as core;
pub use deaddrop_log as log;

// Re-export main types for convenience
pub use auth::{AdminAuthority, AuthError, SignedAdmission};
pub use error::{RegistryError, Result};
pub use event::{EventSink, NullSink, RecordingSink, RegistryEvent, NEW_MESSAGE_RECEIVED};
pub use registry::{Registry, RegistryConfig};

// Re-export commonly used core types
pub use deaddrop_core::{
    Action, Keypair, MessageScalar, ParticipantId, ReconstructedState, Signature,
};
pub use deaddrop_log::{ActionLog, LogDigest, MemoryLog};

//! # Deaddrop Log
//!
//! The append-only action log behind the Deaddrop Registry.
//!
//! ## Overview
//!
//! The log is the registry's only durable history: an ordered sequence of
//! actions that is never compacted, reordered, or deleted at this layer.
//! The [`ActionLog`] trait keeps the registry log-agnostic; [`MemoryLog`]
//! is the in-memory implementation, which also maintains an incremental
//! latest-entry index so lookups do not replay the whole log on every
//! call.
//!
//! ## Key Types
//!
//! - [`ActionLog`] - The trait for append and bounded replay
//! - [`MemoryLog`] - In-memory log with a latest-entry index
//! - [`LogDigest`] - Deterministic digest of a log prefix
//!
//! ## Design Notes
//!
//! - **Appends are infallible**: validation is the caller's job; the log
//!   records what it is given.
//! - **Index never diverges**: `latest_entry` answered from the index
//!   must be bit-identical to the reference fold; tests cross-check the
//!   two on arbitrary action sequences.

pub mod digest;
pub mod memory;
pub mod traits;

pub use digest::{log_digest, LogDigest};
pub use memory::MemoryLog;
pub use traits::ActionLog;

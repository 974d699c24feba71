//! # Deaddrop Testkit
//!
//! Testing utilities for the Deaddrop Registry.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: A ready-made registry with an administrator and a
//!   recording event sink, plus deterministic participant keypairs
//! - **Scalar helpers**: Messages exercising each flag-region rule, in
//!   its valid and violated form
//! - **Generators**: Proptest strategies for identities, scalars, and
//!   action sequences
//!
//! ## Fixtures
//!
//! ```rust
//! use deaddrop_testkit::fixtures::{participants, TestRegistry};
//!
//! let mut fixture = TestRegistry::new();
//! let alice = &participants(1)[0];
//! fixture.admit(alice.participant_id()).unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod scalars;

pub use fixtures::{participants, TestRegistry};

//! The Registry: admission and message-deposit over an action log.
//!
//! The registry holds no per-participant state. Every operation first
//! recovers the relevant key's state from the log, checks its
//! preconditions, and only then appends and advances a counter. A
//! rejected operation leaves the log, the counters, and the event sink
//! exactly as they were.

use deaddrop_core::{validate_structure, Action, MessageScalar, ParticipantId, ReconstructedState};
use deaddrop_log::{log_digest, ActionLog, LogDigest};

use crate::error::{RegistryError, Result};
use crate::event::{EventSink, RegistryEvent};

/// Configuration for the Registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Maximum number of admitted participants.
    pub max_participants: u64,

    /// Replay bound: how many log entries a lookup may inspect.
    ///
    /// A resource limit, not a feature. Must cover the longest history
    /// the registry can produce (one admission plus at most one deposit
    /// per participant), otherwise lookups would silently miss entries.
    pub replay_window: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_participants: 100,
            replay_window: 150,
        }
    }
}

/// The main Registry struct.
///
/// Generic over the log and the event sink, both held by value: each
/// operation runs against the single consistent view the caller holds,
/// and commits entirely or not at all. Serialization of concurrent
/// callers is the surrounding environment's job.
pub struct Registry<L: ActionLog, E: EventSink> {
    /// The action history.
    log: L,

    /// Where deposit notifications go.
    events: E,

    /// Configuration.
    config: RegistryConfig,

    /// Successful admissions to date. Never decreases.
    total_participants: u64,

    /// Successful deposits to date. Never decreases.
    total_messages: u64,
}

impl<L: ActionLog, E: EventSink> Registry<L, E> {
    /// Create a new registry over a log and an event sink.
    pub fn new(log: L, events: E, config: RegistryConfig) -> Self {
        Self {
            log,
            events,
            config,
            total_participants: 0,
            total_messages: 0,
        }
    }

    /// Number of participants admitted so far.
    pub fn total_participants(&self) -> u64 {
        self.total_participants
    }

    /// Number of messages deposited so far.
    pub fn total_messages(&self) -> u64 {
        self.total_messages
    }

    /// The configuration in effect.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The underlying log.
    pub fn log(&self) -> &L {
        &self.log
    }

    /// The event sink.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Digest of the replayable log prefix.
    pub fn log_digest(&self) -> LogDigest {
        log_digest(&self.log.snapshot_up_to(self.config.replay_window))
    }

    /// Recover the current state for a key.
    fn lookup(&self, key: &ParticipantId) -> ReconstructedState {
        self.log.latest_entry(key, self.config.replay_window)
    }

    /// Admit a participant.
    ///
    /// The caller is responsible for having verified administrative
    /// authority (see [`AdminAuthority`](crate::auth::AdminAuthority));
    /// this method checks only the registry-level preconditions.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::AlreadyRegistered`] if the identity has a log entry.
    /// - [`RegistryError::RegistryFull`] if the participant cap is reached.
    pub fn admit_participant(&mut self, candidate: ParticipantId) -> Result<()> {
        if self.lookup(&candidate).is_registered() {
            return Err(RegistryError::AlreadyRegistered);
        }

        if self.total_participants >= self.config.max_participants {
            return Err(RegistryError::RegistryFull);
        }

        self.log.append(Action::admission(candidate));
        self.total_participants += 1;
        tracing::debug!(
            participant = %candidate,
            total = self.total_participants,
            "participant admitted"
        );
        Ok(())
    }

    /// Deposit a message for a registered participant.
    ///
    /// On success this appends the deposit, advances the message counter,
    /// and emits one `new-message-received` event carrying the message.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotRegistered`] if the sender has no log entry.
    /// - [`RegistryError::AlreadyDeposited`] if the sender already deposited.
    /// - [`RegistryError::InvalidStructure`] if the flag-region rules fail.
    pub fn deposit_message(&mut self, sender: ParticipantId, message: MessageScalar) -> Result<()> {
        let state = self.lookup(&sender);

        if !state.is_registered() {
            return Err(RegistryError::NotRegistered);
        }

        if state.has_message() {
            return Err(RegistryError::AlreadyDeposited);
        }

        validate_structure(&message)?;

        self.log.append(Action::deposit(sender, message));
        self.total_messages += 1;
        self.events.emit(RegistryEvent::new_message_received(message));
        tracing::debug!(
            participant = %sender,
            total = self.total_messages,
            "message deposited"
        );
        Ok(())
    }

    /// Read a registered participant's message.
    ///
    /// Returns `None` when the participant is registered but has not
    /// deposited yet. No mutation.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotRegistered`] if the identity has no log entry.
    pub fn read_message(&self, participant: &ParticipantId) -> Result<Option<MessageScalar>> {
        let state = self.lookup(participant);

        if !state.is_registered() {
            return Err(RegistryError::NotRegistered);
        }

        Ok(state.message)
    }
}

//! Registry events and the sink seam they are delivered through.
//!
//! A successful deposit emits one event carrying the raw message. The
//! sink is an external collaborator (an indexing or monitoring layer);
//! the registry only guarantees that events are delivered in emission
//! order and only for operations that committed.

use deaddrop_core::MessageScalar;

/// Stable event-kind tag for message deposits.
pub const NEW_MESSAGE_RECEIVED: &str = "new-message-received";

/// An event emitted by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEvent {
    /// Stable kind tag; consumers dispatch on this.
    pub kind: &'static str,

    /// The deposited message.
    pub message: MessageScalar,
}

impl RegistryEvent {
    /// Create a message-received event.
    pub const fn new_message_received(message: MessageScalar) -> Self {
        Self {
            kind: NEW_MESSAGE_RECEIVED,
            message,
        }
    }
}

/// Receives events emitted by the registry.
pub trait EventSink {
    /// Deliver one event. Called after the emitting operation's log
    /// append and counter update, never for a rejected operation.
    fn emit(&mut self, event: RegistryEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: RegistryEvent) {}
}

/// Sink that records events in emission order.
///
/// Primarily for tests; also a reasonable base for an indexing layer.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<RegistryEvent>,
}

impl RecordingSink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: RegistryEvent) {
        self.events.push(event);
    }
}

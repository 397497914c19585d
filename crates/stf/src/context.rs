//! Operation context and event collection.

use folio_primitives::AccountAddr;

use crate::events::LedgerEvent;

/// Collector for events that we can pass around between operations.
#[derive(Clone, Debug, Default)]
pub struct EventBuffer {
    events: Vec<LedgerEvent>,
}

impl EventBuffer {
    /// Creates a new empty buffer.
    pub fn new_empty() -> Self {
        Self { events: Vec::new() }
    }

    /// Events emitted so far, in emission order.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Records a single event.
    pub fn emit(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }

    /// Unwraps the buffer into the emitted event list.
    pub fn into_events(self) -> Vec<LedgerEvent> {
        self.events
    }
}

/// Per-operation execution context.
///
/// Carries the caller identity (supplied and authenticated by the external
/// wallet layer; the ledger trusts it completely) and the append-only event
/// buffer, keeping event emission decoupled from store mutation.
#[derive(Clone, Debug)]
pub struct OpContext {
    caller: AccountAddr,
    output: EventBuffer,
}

impl OpContext {
    /// Constructs a context for a caller.
    pub fn new(caller: AccountAddr) -> Self {
        Self {
            caller,
            output: EventBuffer::new_empty(),
        }
    }

    /// Gets the caller address.
    pub fn caller(&self) -> AccountAddr {
        self.caller
    }

    /// Events emitted so far.
    pub fn events(&self) -> &[LedgerEvent] {
        self.output.events()
    }

    /// Records a single event.
    pub fn emit_event(&mut self, event: LedgerEvent) {
        self.output.emit(event);
    }

    /// Unwraps the context for just the event buffer.
    pub fn into_events(self) -> Vec<LedgerEvent> {
        self.output.into_events()
    }
}

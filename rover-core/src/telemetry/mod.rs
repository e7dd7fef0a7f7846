//! Structured navigation events and the collector interface.
//!
//! The core never prints or formats log output. Everything observable is
//! reported through [`EventSink`]; callers decide where events go. The
//! bundled [`EventLog`] keeps a bounded in-memory history for hosts that
//! want to display or replay recent activity.

use core::fmt;

use heapless::{HistoryBuf, OldestOrdered};

use crate::heading::Heading;
use crate::navigation::{Boundaries, CommandEffect, Position};
use crate::sequencing::SequencingState;

/// Identifier attached to recorded events.
pub type EventId = u32;

/// Number of event records retained by the default log.
pub const EVENT_RING_CAPACITY: usize = 64;

/// Discriminated navigation events emitted while processing input lines.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NavEvent {
    PlateauConfigured(Boundaries),
    RoverPlaced { position: Position, heading: Heading },
    TurnedLeft { from: Heading, to: Heading },
    TurnedRight { from: Heading, to: Heading },
    Advanced { from: Position, to: Position },
    MoveBlocked {
        at: Position,
        heading: Heading,
        attempted: Position,
    },
    CommandSkipped { command: char },
    LineRejected { state: SequencingState },
}

impl fmt::Display for NavEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavEvent::PlateauConfigured(boundaries) => {
                write!(f, "plateau-configured {boundaries}")
            }
            NavEvent::RoverPlaced { position, heading } => {
                write!(f, "rover-placed {position} {heading}")
            }
            NavEvent::TurnedLeft { to, .. } => write!(f, "turned-left {to}"),
            NavEvent::TurnedRight { to, .. } => write!(f, "turned-right {to}"),
            NavEvent::Advanced { to, .. } => write!(f, "advanced {to}"),
            NavEvent::MoveBlocked { attempted, .. } => {
                write!(f, "move-blocked {attempted}")
            }
            NavEvent::CommandSkipped { command } => {
                write!(f, "command-skipped `{command}`")
            }
            NavEvent::LineRejected { state } => write!(f, "line-rejected {state}"),
        }
    }
}

impl From<CommandEffect> for NavEvent {
    fn from(effect: CommandEffect) -> Self {
        match effect {
            CommandEffect::TurnedLeft { from, to } => NavEvent::TurnedLeft { from, to },
            CommandEffect::TurnedRight { from, to } => NavEvent::TurnedRight { from, to },
            CommandEffect::Advanced { from, to } => NavEvent::Advanced { from, to },
        }
    }
}

/// Collector interface injected into the sequencing controller.
pub trait EventSink {
    /// Records one structured event.
    fn record(&mut self, event: NavEvent);
}

/// Sink that drops every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl NullSink {
    /// Creates a new no-op sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EventSink for NullSink {
    fn record(&mut self, _: NavEvent) {}
}

/// Event record stored in the ring buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EventRecord {
    pub id: EventId,
    pub event: NavEvent,
}

/// Records events into a fixed-size ring buffer.
///
/// Identifiers increase monotonically across the life of the log, so
/// consumers can tell how much history the ring has already dropped.
pub struct EventLog<const CAPACITY: usize = EVENT_RING_CAPACITY> {
    ring: HistoryBuf<EventRecord, CAPACITY>,
    next_event_id: EventId,
}

impl<const CAPACITY: usize> EventLog<CAPACITY> {
    /// Creates a log with an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ring: HistoryBuf::new(),
            next_event_id: 0,
        }
    }

    /// Returns an iterator over recorded events in chronological order.
    pub fn oldest_first(&self) -> OldestOrdered<'_, EventRecord> {
        self.ring.oldest_ordered()
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&EventRecord> {
        self.ring.recent()
    }

    /// Returns the number of records currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` when no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }
}

impl<const CAPACITY: usize> Default for EventLog<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAPACITY: usize> EventSink for EventLog<CAPACITY> {
    fn record(&mut self, event: NavEvent) {
        let id = self.next_event_id;
        self.next_event_id = self.next_event_id.wrapping_add(1);
        self.ring.write(EventRecord { id, event });
    }
}

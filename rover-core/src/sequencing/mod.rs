//! Line sequencing for the rover command stream.
//!
//! Input arrives as text lines in a strict order: plateau boundary first,
//! then rover coordinates, then a command string, cycling back to
//! coordinates for as long as lines keep coming. The controller gates
//! which line shape is accepted next, feeds accepted lines into the
//! navigation engine, and reports every accepted or skipped step through
//! the injected event sink.

pub mod grammar;

use core::fmt;

use crate::heading::{Heading, InvalidHeadingCode};
use crate::navigation::{
    Boundaries, CommandFault, InvalidBoundary, NavigationEngine, Position, StatusReport,
};
use crate::telemetry::{EventSink, NavEvent, NullSink};

use grammar::LineError;

/// Which input line the controller accepts next.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SequencingState {
    AwaitingBoundary,
    AwaitingCoordinates,
    AwaitingCommands,
}

impl fmt::Display for SequencingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SequencingState::AwaitingBoundary => "awaiting-boundary",
            SequencingState::AwaitingCoordinates => "awaiting-coordinates",
            SequencingState::AwaitingCommands => "awaiting-commands",
        })
    }
}

/// Reason a line was rejected. The sequencing state is left unchanged.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineRejection {
    Parse(LineError),
    Boundary(InvalidBoundary),
    Heading(InvalidHeadingCode),
}

impl From<LineError> for LineRejection {
    fn from(error: LineError) -> Self {
        LineRejection::Parse(error)
    }
}

impl From<InvalidBoundary> for LineRejection {
    fn from(error: InvalidBoundary) -> Self {
        LineRejection::Boundary(error)
    }
}

impl From<InvalidHeadingCode> for LineRejection {
    fn from(error: InvalidHeadingCode) -> Self {
        LineRejection::Heading(error)
    }
}

impl fmt::Display for LineRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRejection::Parse(error) => error.fmt(f),
            LineRejection::Boundary(error) => error.fmt(f),
            LineRejection::Heading(error) => error.fmt(f),
        }
    }
}

/// Summary of one processed command line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CommandRunReport {
    /// Command characters that took effect.
    pub applied: usize,
    /// Characters skipped over a boundary block or an unknown command.
    pub skipped: usize,
    /// Rover status after the whole line was processed.
    pub status: StatusReport,
}

/// Result of feeding one line to the controller.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineOutcome {
    BoundaryAccepted(Boundaries),
    PlacementAccepted { position: Position, heading: Heading },
    CommandsApplied(CommandRunReport),
    Rejected(LineRejection),
}

/// Gates the boundary / coordinates / commands line cycle.
///
/// A rejected setup line leaves the state where it was; a command line
/// always completes and hands the cycle back to the coordinates state,
/// however many of its characters were skipped.
pub struct SequencingController<S = NullSink> {
    engine: NavigationEngine,
    state: SequencingState,
    sink: S,
}

impl SequencingController<NullSink> {
    /// Controller that discards events.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_sink(NullSink::new())
    }
}

impl Default for SequencingController<NullSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SequencingController<S> {
    /// Controller recording events into the provided sink.
    pub const fn with_sink(sink: S) -> Self {
        Self {
            engine: NavigationEngine::new(),
            state: SequencingState::AwaitingBoundary,
            sink,
        }
    }

    /// Line shape the controller accepts next.
    #[must_use]
    pub const fn state(&self) -> SequencingState {
        self.state
    }

    /// Read-only view of the navigation engine.
    #[must_use]
    pub const fn engine(&self) -> &NavigationEngine {
        &self.engine
    }

    /// Returns an immutable reference to the event sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the event sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the controller and yields the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S> SequencingController<S>
where
    S: EventSink,
{
    /// Processes one input line according to the current state.
    ///
    /// Leading and trailing whitespace is ignored; interior characters of a
    /// command line are processed verbatim.
    pub fn process(&mut self, line: &str) -> LineOutcome {
        let line = line.trim_ascii();
        match self.state {
            SequencingState::AwaitingBoundary => self.process_boundary(line),
            SequencingState::AwaitingCoordinates => self.process_coordinates(line),
            SequencingState::AwaitingCommands => self.process_commands(line),
        }
    }

    fn process_boundary(&mut self, line: &str) -> LineOutcome {
        let spec = match grammar::boundary_line(line) {
            Ok(spec) => spec,
            Err(error) => return self.reject(error.into()),
        };

        match self.engine.set_boundaries(spec.max_x, spec.max_y) {
            Ok(boundaries) => {
                self.sink.record(NavEvent::PlateauConfigured(boundaries));
                self.state = SequencingState::AwaitingCoordinates;
                LineOutcome::BoundaryAccepted(boundaries)
            }
            Err(error) => self.reject(error.into()),
        }
    }

    fn process_coordinates(&mut self, line: &str) -> LineOutcome {
        let spec = match grammar::placement_line(line) {
            Ok(spec) => spec,
            Err(error) => return self.reject(error.into()),
        };

        match self.engine.place(spec.x, spec.y, spec.heading_code) {
            Ok(placement) => {
                self.sink.record(NavEvent::RoverPlaced {
                    position: placement.position,
                    heading: placement.heading,
                });
                self.state = SequencingState::AwaitingCommands;
                LineOutcome::PlacementAccepted {
                    position: placement.position,
                    heading: placement.heading,
                }
            }
            Err(error) => self.reject(error.into()),
        }
    }

    fn process_commands(&mut self, line: &str) -> LineOutcome {
        let mut applied = 0usize;
        let mut skipped = 0usize;

        for command in line.chars() {
            match self.engine.apply(command) {
                Ok(effect) => {
                    applied += 1;
                    self.sink.record(NavEvent::from(effect));
                }
                Err(CommandFault::Blocked(blocked)) => {
                    skipped += 1;
                    self.sink.record(NavEvent::MoveBlocked {
                        at: blocked.at,
                        heading: blocked.heading,
                        attempted: blocked.attempted,
                    });
                }
                Err(CommandFault::Unknown(unknown)) => {
                    skipped += 1;
                    self.sink.record(NavEvent::CommandSkipped {
                        command: unknown.command,
                    });
                }
            }
        }

        // Command lines never block the cycle, even when every character
        // was skipped.
        self.state = SequencingState::AwaitingCoordinates;
        LineOutcome::CommandsApplied(CommandRunReport {
            applied,
            skipped,
            status: self.engine.status(),
        })
    }

    fn reject(&mut self, rejection: LineRejection) -> LineOutcome {
        self.sink.record(NavEvent::LineRejected { state: self.state });
        LineOutcome::Rejected(rejection)
    }
}

//! Rover state and the navigation engine.
//!
//! Movement is checked per axis against a closed interval whose lower
//! bound is pinned at the origin; the configured plateau corner only
//! constrains the upper end. Initial placement is not checked against the
//! plateau at all — only forward moves are — so a rover can be parked
//! outside the grid and will simply refuse every subsequent move that
//! stays outside it.

use core::fmt;

use crate::heading::{Heading, HeadingRing, InvalidHeadingCode};

/// Grid coordinate pair.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Grid origin, also the fixed lower movement bound.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Creates a position from raw coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offsets the position by a `(dx, dy)` delta.
    #[must_use]
    pub const fn offset(self, delta: (i32, i32)) -> Self {
        Self {
            x: self.x + delta.0,
            y: self.y + delta.1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Upper-right corner of the plateau; the lower-left corner is always the origin.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Boundaries {
    max_x: i32,
    max_y: i32,
}

impl Boundaries {
    /// Builds boundaries, rejecting negative corner components.
    pub const fn new(max_x: i32, max_y: i32) -> Result<Self, InvalidBoundary> {
        if max_x < 0 || max_y < 0 {
            Err(InvalidBoundary { max_x, max_y })
        } else {
            Ok(Self { max_x, max_y })
        }
    }

    /// Plateau collapsed onto the origin cell.
    #[must_use]
    pub const fn origin_cell() -> Self {
        Self { max_x: 0, max_y: 0 }
    }

    /// Upper bound on the x axis.
    #[must_use]
    pub const fn max_x(self) -> i32 {
        self.max_x
    }

    /// Upper bound on the y axis.
    #[must_use]
    pub const fn max_y(self) -> i32 {
        self.max_y
    }

    /// Closed-interval containment on both axes.
    #[must_use]
    pub const fn contains(self, position: Position) -> bool {
        0 <= position.x && position.x <= self.max_x && 0 <= position.y && position.y <= self.max_y
    }
}

impl Default for Boundaries {
    fn default() -> Self {
        Self::origin_cell()
    }
}

impl fmt::Display for Boundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.max_x, self.max_y)
    }
}

/// Error raised when a plateau corner has a negative component.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InvalidBoundary {
    pub max_x: i32,
    pub max_y: i32,
}

impl fmt::Display for InvalidBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid boundary {} {}: corner components must be non-negative",
            self.max_x, self.max_y
        )
    }
}

/// Error raised when a forward move would leave the plateau.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BoundaryError {
    pub at: Position,
    pub heading: Heading,
    pub attempted: Position,
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move to {} blocked: rover stays at {} facing {}",
            self.attempted, self.at, self.heading
        )
    }
}

/// Error raised for command characters outside `{L, R, M}`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InvalidCommand {
    pub command: char,
}

impl fmt::Display for InvalidCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid command `{}`", self.command)
    }
}

/// Per-character command failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CommandFault {
    /// A forward move was refused at the plateau edge.
    Blocked(BoundaryError),
    /// The character is not a recognized command.
    Unknown(InvalidCommand),
}

impl From<BoundaryError> for CommandFault {
    fn from(error: BoundaryError) -> Self {
        CommandFault::Blocked(error)
    }
}

impl From<InvalidCommand> for CommandFault {
    fn from(error: InvalidCommand) -> Self {
        CommandFault::Unknown(error)
    }
}

impl fmt::Display for CommandFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandFault::Blocked(error) => error.fmt(f),
            CommandFault::Unknown(error) => error.fmt(f),
        }
    }
}

/// Observable result of a successfully applied command character.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CommandEffect {
    TurnedLeft { from: Heading, to: Heading },
    TurnedRight { from: Heading, to: Heading },
    Advanced { from: Position, to: Position },
}

/// Acknowledgement returned after an accepted placement.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    pub position: Position,
    pub heading: Heading,
}

/// Rendered rover status: position followed by the heading code.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StatusReport {
    pub position: Position,
    pub heading: Heading,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.heading)
    }
}

/// Run-time rover data: position, plateau, and the heading ring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RoverState {
    position: Position,
    boundaries: Boundaries,
    ring: HeadingRing,
}

impl RoverState {
    /// State at process start: origin position, origin-cell plateau, ring at North.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: Position::ORIGIN,
            boundaries: Boundaries::origin_cell(),
            ring: HeadingRing::new(),
        }
    }

    /// Current rover position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Configured plateau boundaries.
    #[must_use]
    pub const fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    /// Currently active heading.
    #[must_use]
    pub const fn heading(&self) -> Heading {
        self.ring.current()
    }
}

impl Default for RoverState {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies setup and command operations to the rover state.
#[derive(Copy, Clone, Debug, Default)]
pub struct NavigationEngine {
    state: RoverState,
}

impl NavigationEngine {
    /// Creates an engine over a fresh [`RoverState`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RoverState::new(),
        }
    }

    /// Read-only view of the rover state.
    #[must_use]
    pub const fn state(&self) -> &RoverState {
        &self.state
    }

    /// Stores new plateau boundaries. The rover position is kept as-is.
    pub fn set_boundaries(&mut self, max_x: i32, max_y: i32) -> Result<Boundaries, InvalidBoundary> {
        let boundaries = Boundaries::new(max_x, max_y)?;
        self.state.boundaries = boundaries;
        Ok(boundaries)
    }

    /// Places the rover and aligns its heading.
    ///
    /// The heading code is resolved before any mutation so a rejected line
    /// leaves the state untouched. The position itself is not validated
    /// against the plateau.
    pub fn place(&mut self, x: i32, y: i32, code: char) -> Result<Placement, InvalidHeadingCode> {
        let heading = Heading::from_code(code)?;
        self.state.position = Position::new(x, y);
        self.state.ring.align(heading);
        Ok(Placement {
            position: self.state.position,
            heading,
        })
    }

    /// Applies a single command character.
    pub fn apply(&mut self, command: char) -> Result<CommandEffect, CommandFault> {
        match command {
            'L' => {
                let from = self.state.ring.current();
                let to = self.state.ring.rotate_left();
                Ok(CommandEffect::TurnedLeft { from, to })
            }
            'R' => {
                let from = self.state.ring.current();
                let to = self.state.ring.rotate_right();
                Ok(CommandEffect::TurnedRight { from, to })
            }
            'M' => self.advance().map_err(CommandFault::from),
            other => Err(CommandFault::Unknown(InvalidCommand { command: other })),
        }
    }

    /// Current status line data.
    #[must_use]
    pub const fn status(&self) -> StatusReport {
        StatusReport {
            position: self.state.position(),
            heading: self.state.heading(),
        }
    }

    fn advance(&mut self) -> Result<CommandEffect, BoundaryError> {
        let from = self.state.position;
        let heading = self.state.ring.current();
        let attempted = heading.advance(from);

        if self.state.boundaries.contains(attempted) {
            self.state.position = attempted;
            Ok(CommandEffect::Advanced {
                from,
                to: attempted,
            })
        } else {
            Err(BoundaryError {
                at: from,
                heading,
                attempted,
            })
        }
    }
}

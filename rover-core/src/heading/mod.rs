//! Cardinal headings and the rotation ring.
//!
//! The four compass headings live in a fixed rotation order with a current
//! index, replacing any linked cardinal-point structure. Rotating off
//! either end of the ring resets the pointer to the opposite end; the ring
//! definition itself is immutable and safely shareable.

use core::fmt;

use crate::navigation::Position;

/// Compass heading the rover can face.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// Rotation order of the ring, head to tail.
pub const RING_ORDER: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

impl Heading {
    /// Single-letter code used on coordinate lines and status output.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }

    /// Human-readable name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Heading::North => "North",
            Heading::East => "East",
            Heading::South => "South",
            Heading::West => "West",
        }
    }

    /// Resolves a single-letter code to its heading.
    pub const fn from_code(code: char) -> Result<Self, InvalidHeadingCode> {
        match code {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            other => Err(InvalidHeadingCode { code: other }),
        }
    }

    /// Position delta applied by one forward move; exactly one axis moves by one.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::South => (0, -1),
            Heading::East => (1, 0),
            Heading::West => (-1, 0),
        }
    }

    /// Applies the heading's delta to a position.
    #[must_use]
    pub const fn advance(self, position: Position) -> Position {
        position.offset(self.delta())
    }

    /// Deterministic index of the heading in [`RING_ORDER`].
    pub(crate) const fn ring_index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Heading one step counter-clockwise in ring order.
///
/// From the ring head (North) this resets to the tail (West); the ring has
/// no wrap-around slot between the two ends.
#[must_use]
pub const fn left_of(heading: Heading) -> Heading {
    match heading.ring_index() {
        0 => RING_ORDER[RING_ORDER.len() - 1],
        index => RING_ORDER[index - 1],
    }
}

/// Heading one step clockwise in ring order.
///
/// From the ring tail (West) this resets to the head (North).
#[must_use]
pub const fn right_of(heading: Heading) -> Heading {
    match heading.ring_index() {
        3 => RING_ORDER[0],
        index => RING_ORDER[index + 1],
    }
}

/// Error raised when a heading code falls outside `{N, S, E, W}`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InvalidHeadingCode {
    pub code: char,
}

impl fmt::Display for InvalidHeadingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid heading code `{}`", self.code)
    }
}

/// Ordered ring of the four headings with a current-element pointer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HeadingRing {
    index: usize,
}

impl HeadingRing {
    /// Creates a ring pointing at the head (North).
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Currently active heading.
    #[must_use]
    pub const fn current(&self) -> Heading {
        RING_ORDER[self.index]
    }

    /// Points the ring at the provided heading.
    pub fn align(&mut self, heading: Heading) {
        self.index = heading.ring_index();
    }

    /// Rotates one step left and returns the new active heading.
    pub fn rotate_left(&mut self) -> Heading {
        self.align(left_of(self.current()));
        self.current()
    }

    /// Rotates one step right and returns the new active heading.
    pub fn rotate_right(&mut self) -> Heading {
        self.align(right_of(self.current()));
        self.current()
    }
}

impl Default for HeadingRing {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HeadingRing {
    /// Lists the ring order (`N E S W`), independent of the active element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, heading) in RING_ORDER.iter().enumerate() {
            if slot > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{heading}")?;
        }
        Ok(())
    }
}

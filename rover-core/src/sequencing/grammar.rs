//! Parsers for the three line shapes accepted by the controller.
//!
//! Lines are parsed positionally with `winnow` combinators over the raw
//! text. The parsers stay purely syntactic: signed integers and arbitrary
//! heading characters are accepted here so that range and heading-code
//! validation can happen in the navigation engine, where a failure carries
//! the structured error the caller needs.

use core::fmt;

use winnow::ascii::{dec_int, space1};
use winnow::error::{ErrMode, ParserError};
use winnow::prelude::*;
use winnow::token::any;

/// Parsed `"INT INT"` boundary line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BoundarySpec {
    pub max_x: i32,
    pub max_y: i32,
}

/// Parsed `"INT INT CHAR"` coordinate line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PlacementSpec {
    pub x: i32,
    pub y: i32,
    pub heading_code: char,
}

/// Syntactic line failure: wrong token where one was expected, or leftover
/// tokens after a complete parse.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineError {
    ExpectedInteger,
    ExpectedSeparator,
    ExpectedHeading,
    TrailingInput,
    Malformed,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::ExpectedInteger => f.write_str("expected an integer token"),
            LineError::ExpectedSeparator => f.write_str("expected whitespace between tokens"),
            LineError::ExpectedHeading => f.write_str("expected a heading character"),
            LineError::TrailingInput => f.write_str("unexpected trailing tokens"),
            LineError::Malformed => f.write_str("malformed line"),
        }
    }
}

impl<'i> ParserError<&'i str> for LineError {
    type Inner = Self;

    fn from_input(_input: &&'i str) -> Self {
        LineError::Malformed
    }

    fn into_inner(self) -> Result<Self::Inner, Self> {
        Ok(self)
    }

    fn or(self, other: Self) -> Self {
        other
    }
}

/// Parses a boundary line of two whitespace-separated integers.
///
/// Signs are accepted; negative corners are rejected downstream so the
/// caller can report `InvalidBoundary` rather than a parse failure.
pub fn boundary_line(line: &str) -> Result<BoundarySpec, LineError> {
    let mut input = line.trim_ascii();
    let parsed = boundary(&mut input).map_err(flatten)?;
    finish(input)?;
    Ok(parsed)
}

/// Parses a coordinate line: two integers and a single heading character.
pub fn placement_line(line: &str) -> Result<PlacementSpec, LineError> {
    let mut input = line.trim_ascii();
    let parsed = placement(&mut input).map_err(flatten)?;
    finish(input)?;
    Ok(parsed)
}

fn boundary(input: &mut &str) -> Result<BoundarySpec, ErrMode<LineError>> {
    let (max_x, _, max_y) = (integer, separator, integer).parse_next(input)?;
    Ok(BoundarySpec { max_x, max_y })
}

fn placement(input: &mut &str) -> Result<PlacementSpec, ErrMode<LineError>> {
    let (x, _, y, _, heading_code) =
        (integer, separator, integer, separator, heading_token).parse_next(input)?;
    Ok(PlacementSpec { x, y, heading_code })
}

fn integer(input: &mut &str) -> Result<i32, ErrMode<LineError>> {
    let parsed: Result<i32, ErrMode<LineError>> = dec_int(input);
    parsed.map_err(|err| remap(err, LineError::ExpectedInteger))
}

fn separator(input: &mut &str) -> Result<(), ErrMode<LineError>> {
    let parsed: Result<&str, ErrMode<LineError>> = space1(input);
    parsed
        .map(|_| ())
        .map_err(|err| remap(err, LineError::ExpectedSeparator))
}

fn heading_token(input: &mut &str) -> Result<char, ErrMode<LineError>> {
    let parsed: Result<char, ErrMode<LineError>> = any(input);
    parsed.map_err(|err| remap(err, LineError::ExpectedHeading))
}

fn remap(err: ErrMode<LineError>, kind: LineError) -> ErrMode<LineError> {
    match err {
        ErrMode::Backtrack(_) => ErrMode::Backtrack(kind),
        ErrMode::Cut(_) => ErrMode::Cut(kind),
        incomplete => incomplete,
    }
}

fn flatten(err: ErrMode<LineError>) -> LineError {
    match err {
        ErrMode::Backtrack(inner) | ErrMode::Cut(inner) => inner,
        ErrMode::Incomplete(_) => LineError::Malformed,
    }
}

fn finish(rest: &str) -> Result<(), LineError> {
    if rest.trim_ascii().is_empty() {
        Ok(())
    } else {
        Err(LineError::TrailingInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_line_parses_two_integers() {
        assert_eq!(
            boundary_line("5 5"),
            Ok(BoundarySpec { max_x: 5, max_y: 5 })
        );
        assert_eq!(
            boundary_line("  12\t7 "),
            Ok(BoundarySpec {
                max_x: 12,
                max_y: 7,
            })
        );
    }

    #[test]
    fn boundary_line_accepts_signed_integers() {
        assert_eq!(
            boundary_line("-1 -1"),
            Ok(BoundarySpec {
                max_x: -1,
                max_y: -1,
            })
        );
    }

    #[test]
    fn boundary_line_rejects_extra_tokens() {
        assert_eq!(boundary_line("5 5 N"), Err(LineError::TrailingInput));
    }

    #[test]
    fn boundary_line_rejects_missing_or_bad_tokens() {
        assert_eq!(boundary_line("MLLR"), Err(LineError::ExpectedInteger));
        assert_eq!(boundary_line("5 R"), Err(LineError::ExpectedInteger));
        assert_eq!(boundary_line("5"), Err(LineError::ExpectedSeparator));
        assert_eq!(boundary_line(""), Err(LineError::ExpectedInteger));
    }

    #[test]
    fn placement_line_parses_coordinates_and_heading() {
        assert_eq!(
            placement_line("1 2 N"),
            Ok(PlacementSpec {
                x: 1,
                y: 2,
                heading_code: 'N',
            })
        );
    }

    #[test]
    fn placement_line_accepts_any_heading_character() {
        // Heading-code validation is the engine's job, not the parser's.
        assert_eq!(
            placement_line("5 5 R"),
            Ok(PlacementSpec {
                x: 5,
                y: 5,
                heading_code: 'R',
            })
        );
    }

    #[test]
    fn placement_line_rejects_short_and_bad_lines() {
        assert_eq!(placement_line("5 5"), Err(LineError::ExpectedSeparator));
        assert_eq!(placement_line("L 5 N"), Err(LineError::ExpectedInteger));
        assert_eq!(placement_line("MLLR"), Err(LineError::ExpectedInteger));
    }

    #[test]
    fn placement_line_rejects_multi_character_headings() {
        assert_eq!(placement_line("1 2 NE"), Err(LineError::TrailingInput));
    }
}

//! Board coordinates and push directions.
//!
//! Coordinates are `(row, col)` pairs. Components are signed so that
//! caller input outside the board can be represented and then rejected by
//! validation instead of wrapping or panicking.
//!
//! Directions are relative to the grid:
//! - `Left` / `Right` slide along a row (column decreases / increases)
//! - `Forward` / `Backward` slide along a column (row decreases / increases)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side length of the Kuba board.
pub const BOARD_SIZE: i32 = 7;

/// A `(row, col)` board coordinate. May be out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True if both components lie in `[0, 6]`.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Offset by a signed `(d_row, d_col)`.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The neighboring coordinate one step in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.offset(d_row, d_col)
    }

    /// Row-major cell index. Only meaningful when `in_bounds`.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    /// Iterate over every on-board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Failure to parse a textual coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCoordError {
    input: String,
}

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid coordinate {:?}: expected \"(row,col)\" with digits 0-6", self.input)
    }
}

impl std::error::Error for ParseCoordError {}

/// Parses `"(r,c)"`, allowing whitespace around each digit.
///
/// Each component must be a single digit in `0..=6`, so `"(10,3)"` and
/// `"(7,0)"` are rejected along with anything not wrapped in parentheses.
///
/// ```
/// use kuba_engine::core::Coord;
///
/// assert_eq!("(2, 3)".parse::<Coord>(), Ok(Coord::new(2, 3)));
/// assert!("(2,7)".parse::<Coord>().is_err());
/// assert!("2,3".parse::<Coord>().is_err());
/// ```
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError { input: s.to_string() };

        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let (row, col) = inner.split_once(',').ok_or_else(err)?;

        let digit = |part: &str| -> Option<i32> {
            let part = part.trim();
            let mut chars = part.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c.to_digit(10).map(|d| d as i32).filter(|d| *d < BOARD_SIZE),
                _ => None,
            }
        };

        match (digit(row), digit(col)) {
            (Some(row), Some(col)) => Ok(Coord::new(row, col)),
            _ => Err(err()),
        }
    }
}

/// Push direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward column 0.
    Left,
    /// Toward column 6.
    Right,
    /// Toward row 0.
    Forward,
    /// Toward row 6.
    Backward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// `(d_row, d_col)` for one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Single-letter code (`L`, `R`, `F`, `B`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Forward => 'F',
            Direction::Backward => 'B',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failure to parse a direction word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid direction {:?}: expected L, R, F/U or B/D", self.input)
    }
}

impl std::error::Error for ParseDirectionError {}

/// Accepts letter codes and full words, case-insensitive. `U`/`up` map to
/// `Forward` and `D`/`down` to `Backward`.
impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            "f" | "u" | "forward" | "up" => Ok(Direction::Forward),
            "b" | "d" | "backward" | "down" => Ok(Direction::Backward),
            _ => Err(ParseDirectionError { input: s.to_string() }),
        }
    }
}

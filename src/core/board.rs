//! The 7x7 Kuba grid and its push mechanics.
//!
//! `Board` knows nothing about players or turns. It holds cell contents,
//! reports counts, and slides runs of marbles. Rule checks live in
//! `games::kuba`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::coord::{Coord, Direction, BOARD_SIZE};

const CELLS: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marble {
    White,
    Black,
    /// Red marble owned by nobody; capturable by either player.
    Neutral,
    #[default]
    Empty,
}

impl Marble {
    /// Display symbol: `W`, `B`, `R` or `X`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Marble::White => 'W',
            Marble::Black => 'B',
            Marble::Neutral => 'R',
            Marble::Empty => 'X',
        }
    }

    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'W' => Some(Marble::White),
            'B' => Some(Marble::Black),
            'R' => Some(Marble::Neutral),
            'X' => Some(Marble::Empty),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Marble::Empty)
    }
}

impl fmt::Display for Marble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A player-owned marble color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[must_use]
    pub const fn marble(self) -> Marble {
        match self {
            Color::White => Marble::White,
            Color::Black => Marble::Black,
        }
    }

    /// The complementary color.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marble().symbol())
    }
}

/// Marbles of each kind remaining on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarbleCounts {
    pub white: u8,
    pub black: u8,
    pub neutral: u8,
}

impl MarbleCounts {
    /// Count for one player color.
    #[must_use]
    pub const fn of(&self, color: Color) -> u8 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.white as u32 + self.black as u32 + self.neutral as u32
    }

    /// `(white, black, neutral)`.
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.white, self.black, self.neutral)
    }
}

/// Canonical starting layout, one string per row.
const STARTING_ROWS: [&str; BOARD_SIZE as usize] = [
    "WWXXXBB",
    "WWXRXBB",
    "XXRRRXX",
    "XRRRRRX",
    "XXRRRXX",
    "BBXRXWW",
    "BBXXXWW",
];

/// 7x7 grid stored row-major.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "cells_serde")]
    cells: [Marble; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Marble::Empty; CELLS],
        }
    }

    /// The canonical Kuba starting position: 8 White, 8 Black, 13 Neutral.
    #[must_use]
    pub fn starting() -> Self {
        Self::from_rows(&STARTING_ROWS).unwrap_or_else(|| unreachable!("starting layout is well formed"))
    }

    /// Build a board from seven rows of `W`/`B`/`R`/`X` symbols.
    ///
    /// Returns `None` if there are not exactly seven rows of seven known symbols.
    #[must_use]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        if rows.len() != BOARD_SIZE as usize {
            return None;
        }
        let mut board = Self::empty();
        for (r, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.as_ref().chars().collect();
            if symbols.len() != BOARD_SIZE as usize {
                return None;
            }
            for (c, symbol) in symbols.into_iter().enumerate() {
                board.cells[r * BOARD_SIZE as usize + c] = Marble::from_symbol(symbol)?;
            }
        }
        Some(board)
    }

    /// Marble at `coord`, or `None` if off the board.
    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Marble> {
        coord.in_bounds().then(|| self.cells[coord.index()])
    }

    /// Overwrite a cell. Off-board coordinates are ignored.
    #[inline]
    pub fn set(&mut self, coord: Coord, marble: Marble) {
        if coord.in_bounds() {
            self.cells[coord.index()] = marble;
        }
    }

    /// True if `coord` is off the board or holds no marble.
    #[inline]
    #[must_use]
    pub fn is_vacant(&self, coord: Coord) -> bool {
        self.get(coord).map_or(true, Marble::is_empty)
    }

    #[must_use]
    pub fn counts(&self) -> MarbleCounts {
        self.cells.iter().fold(MarbleCounts::default(), |mut acc, m| {
            match m {
                Marble::White => acc.white += 1,
                Marble::Black => acc.black += 1,
                Marble::Neutral => acc.neutral += 1,
                Marble::Empty => {}
            }
            acc
        })
    }

    /// Rows as symbol strings, top (row 0) first.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(BOARD_SIZE as usize)
            .map(|row| row.iter().map(|m| m.symbol()).collect())
    }

    /// Slide the run starting at `origin` one cell in `direction`.
    ///
    /// The run extends from `origin` up to the first empty cell. If no empty
    /// cell exists before the edge, the edge marble leaves the board and is
    /// returned. `origin` is always vacated.
    ///
    /// No rule checks are made; pushing from an empty or off-board origin is a
    /// no-op returning `None`.
    pub fn push(&mut self, origin: Coord, direction: Direction) -> Option<Marble> {
        if self.is_vacant(origin) {
            return None;
        }

        let mut run: SmallVec<[Coord; BOARD_SIZE as usize]> = SmallVec::new();
        let mut cursor = origin;
        while let Some(marble) = self.get(cursor) {
            if marble.is_empty() {
                break;
            }
            run.push(cursor);
            cursor = cursor.step(direction);
        }

        // `cursor` is now either the gap that absorbs the run or off the board.
        let ejected = if cursor.in_bounds() {
            None
        } else {
            run.last().and_then(|&edge| self.get(edge))
        };

        let mut dest = cursor;
        for &from in run.iter().rev() {
            if dest.in_bounds() {
                self.cells[dest.index()] = self.cells[from.index()];
            }
            dest = from;
        }
        self.cells[origin.index()] = Marble::Empty;

        ejected
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

/// serde only derives arrays up to 32 elements; the grid is stored as a row string list.
mod cells_serde {
    use super::{Marble, BOARD_SIZE, CELLS};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(cells: &[Marble; CELLS], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            cells
                .chunks(BOARD_SIZE as usize)
                .map(|row| row.iter().map(|m| m.symbol()).collect::<String>()),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[Marble; CELLS], D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        super::Board::from_rows(&rows)
            .map(|board| board.cells)
            .ok_or_else(|| D::Error::custom("expected 7 rows of 7 W/B/R/X symbols"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; 7]) -> Board {
        Board::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_starting_layout() {
        let b = Board::starting();

        assert_eq!(b.get(Coord::new(0, 0)), Some(Marble::White));
        assert_eq!(b.get(Coord::new(0, 6)), Some(Marble::Black));
        assert_eq!(b.get(Coord::new(6, 0)), Some(Marble::Black));
        assert_eq!(b.get(Coord::new(6, 6)), Some(Marble::White));
        assert_eq!(b.get(Coord::new(1, 3)), Some(Marble::Neutral));
        assert_eq!(b.get(Coord::new(3, 3)), Some(Marble::Neutral));
        assert_eq!(b.get(Coord::new(0, 3)), Some(Marble::Empty));
        assert_eq!(b.get(Coord::new(7, 0)), None);

        assert_eq!(b.counts().as_tuple(), (8, 8, 13));
    }

    #[test]
    fn test_display_matches_layout() {
        let expected = STARTING_ROWS.join("\n");
        assert_eq!(Board::starting().to_string(), expected);
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Board::from_rows(&["WWXXXBB"]).is_none());
        let mut rows = STARTING_ROWS;
        rows[2] = "XXRRQXX";
        assert!(Board::from_rows(&rows).is_none());
        rows[2] = "XXRRRX";
        assert!(Board::from_rows(&rows).is_none());
    }

    #[test]
    fn test_is_vacant() {
        let b = Board::starting();
        assert!(b.is_vacant(Coord::new(0, 2)));
        assert!(b.is_vacant(Coord::new(-1, 0)));
        assert!(!b.is_vacant(Coord::new(0, 0)));
    }

    #[test]
    fn test_push_into_gap() {
        let mut b = Board::starting();

        // Row 0: W W X X X B B, push (0,0) right: run W W, gap at (0,2).
        let ejected = b.push(Coord::new(0, 0), Direction::Right);

        assert_eq!(ejected, None);
        assert_eq!(b.rows().next().unwrap(), "XWWXXBB");
        assert_eq!(b.counts().as_tuple(), (8, 8, 13));
    }

    #[test]
    fn test_push_single_marble() {
        let mut b = board([
            "XXXXXXX", "XXXXXXX", "XXXXXXX", "XXXWXXX", "XXXXXXX", "XXXXXXX", "XXXXXXX",
        ]);

        assert_eq!(b.push(Coord::new(3, 3), Direction::Forward), None);
        assert_eq!(b.get(Coord::new(3, 3)), Some(Marble::Empty));
        assert_eq!(b.get(Coord::new(2, 3)), Some(Marble::White));
    }

    #[test]
    fn test_push_off_edge() {
        let mut b = board([
            "XXXXXXX", "XXXXXXX", "XXXXXXX", "XXXWRBR", "XXXXXXX", "XXXXXXX", "XXXXXXX",
        ]);

        let ejected = b.push(Coord::new(3, 3), Direction::Right);

        assert_eq!(ejected, Some(Marble::Neutral));
        assert_eq!(b.rows().nth(3).unwrap(), "XXXXWRB");
        assert_eq!(b.counts().as_tuple(), (1, 1, 1));
    }

    #[test]
    fn test_push_along_column_off_edge() {
        let mut b = board([
            "XXBXXXX", "XXRXXXX", "XXWXXXX", "XXXXXXX", "XXXXXXX", "XXXXXXX", "XXXXXXX",
        ]);

        let ejected = b.push(Coord::new(2, 2), Direction::Forward);

        assert_eq!(ejected, Some(Marble::Black));
        assert_eq!(b.get(Coord::new(0, 2)), Some(Marble::Neutral));
        assert_eq!(b.get(Coord::new(1, 2)), Some(Marble::White));
        assert_eq!(b.get(Coord::new(2, 2)), Some(Marble::Empty));
    }

    #[test]
    fn test_push_full_line() {
        let mut b = board([
            "XXXXXXX", "XXXXXXX", "XXXXXXX", "XXXXXXX", "XXXXXXX", "XXXXXXX", "BRRRRRW",
        ]);

        let ejected = b.push(Coord::new(6, 6), Direction::Left);

        assert_eq!(ejected, Some(Marble::Black));
        assert_eq!(b.rows().nth(6).unwrap(), "RRRRRWX");
    }

    #[test]
    fn test_push_from_empty_is_noop() {
        let mut b = Board::starting();
        let before = b;
        assert_eq!(b.push(Coord::new(0, 3), Direction::Left), None);
        assert_eq!(b.push(Coord::new(9, 9), Direction::Left), None);
        assert_eq!(b, before);
    }

    #[test]
    fn test_board_serialization() {
        let b = Board::starting();
        let json = serde_json::to_string(&b).unwrap();
        assert!(json.contains("\"WWXXXBB\""));
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, deserialized);
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(Color::White.other(), Color::Black);
        assert_eq!(Color::Black.marble(), Marble::Black);
        let counts = Board::starting().counts();
        assert_eq!(counts.of(Color::White), 8);
        assert_eq!(counts.total(), 29);
    }
}

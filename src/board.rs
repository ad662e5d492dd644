//! The 4x13 playing grid.
//!
//! A [`Board`] stores one optional card per cell together with the derived
//! [`CellFlags`], an inverse index from card to location, and the set of
//! empty cells. Every write keeps the three views consistent; rule
//! evaluation in [`crate::rules`] reads from them without rescanning.

use crate::cards::{Card, CardParseError};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const ROWS: usize = 4;
pub const COLS: usize = 13;
pub const CELLS: usize = ROWS * COLS;

/// A grid address. Rows run `0..4`, columns `0..13`; points order row-major.
///
/// `Point::new` does not validate, so presentation can hand the engine any
/// address; the board rejects out-of-range ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    row: usize,
    col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < ROWS && col < COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub const fn row(self) -> usize {
        self.row
    }
    pub const fn col(self) -> usize {
        self.col
    }

    pub const fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    pub fn left(self) -> Option<Point> {
        if self.col > 0 {
            Point::try_new(self.row, self.col - 1)
        } else {
            None
        }
    }

    pub fn right(self) -> Option<Point> {
        Point::try_new(self.row, self.col + 1)
    }

    pub fn above(self) -> Option<Point> {
        if self.row > 0 {
            Point::try_new(self.row - 1, self.col)
        } else {
            None
        }
    }

    pub fn below(self) -> Option<Point> {
        Point::try_new(self.row + 1, self.col)
    }

    /// Every grid address in row-major order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Point::new(row, col)))
    }

    fn index(self) -> usize {
        self.row * COLS + self.col
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

bitflags::bitflags! {
    /// Derived per-cell state, recomputed by every refresh.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        const MOVABLE = 0b001;
        const SELECTED = 0b010;
        const CORRECT = 0b100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    card: Option<Card>,
    flags: CellFlags,
}

impl Cell {
    const EMPTY: Cell = Cell { card: None, flags: CellFlags::empty() };

    pub fn card(&self) -> Option<Card> {
        self.card
    }

    pub fn flags(&self) -> CellFlags {
        self.flags
    }
}

/// Internal invariant failures. These indicate a programming error in the
/// caller, never a user mistake.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("address {0} is outside the grid")]
    OutOfBounds(Point),
    #[error("cell {addr} already holds {card}")]
    Occupied { addr: Point, card: Card },
    #[error("{card} is already placed at {at}")]
    AlreadyPlaced { card: Card, at: Point },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardParseError {
    #[error("expected 4 rows, got {0}")]
    RowCount(usize),
    #[error("row {row}: expected 13 cells, got {got}")]
    ColumnCount { row: usize, got: usize },
    #[error(transparent)]
    Card(#[from] CardParseError),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Every placed card and its address, sorted by address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    placements: Vec<(Point, Card)>,
}

impl BoardSnapshot {
    pub fn placements(&self) -> &[(Point, Card)] {
        &self.placements
    }

    pub fn card_at(&self, addr: Point) -> Option<Card> {
        self.placements
            .binary_search_by_key(&addr, |&(p, _)| p)
            .ok()
            .map(|i| self.placements[i].1)
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    locations: HashMap<Card, Point>,
    empty: Vec<Point>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty grid: all 52 cells free, no card placed.
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::EMPTY; CELLS],
            locations: HashMap::with_capacity(CELLS),
            empty: Point::all().collect(),
        }
    }

    /// Build a board from explicit placements, validating each write.
    pub fn from_placements<I>(placements: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Point, Card)>,
    {
        let mut board = Self::new();
        for (addr, card) in placements {
            board.set_card(addr, card)?;
        }
        Ok(board)
    }

    pub fn cell(&self, addr: Point) -> Result<&Cell, BoardError> {
        if !addr.in_bounds() {
            return Err(BoardError::OutOfBounds(addr));
        }
        Ok(&self.cells[addr.index()])
    }

    fn cell_mut(&mut self, addr: Point) -> Result<&mut Cell, BoardError> {
        if !addr.in_bounds() {
            return Err(BoardError::OutOfBounds(addr));
        }
        Ok(&mut self.cells[addr.index()])
    }

    /// Place `card` on the empty cell at `addr`.
    pub fn set_card(&mut self, addr: Point, card: Card) -> Result<(), BoardError> {
        if let Some(&at) = self.locations.get(&card) {
            return Err(BoardError::AlreadyPlaced { card, at });
        }
        let cell = self.cell_mut(addr)?;
        if let Some(existing) = cell.card {
            return Err(BoardError::Occupied { addr, card: existing });
        }
        cell.card = Some(card);
        self.locations.insert(card, addr);
        self.empty.retain(|&p| p != addr);
        Ok(())
    }

    /// Empty the cell at `addr`, returning the card it held.
    pub fn clear_card(&mut self, addr: Point) -> Result<Option<Card>, BoardError> {
        let cell = self.cell_mut(addr)?;
        let card = cell.card.take();
        if let Some(card) = card {
            self.locations.remove(&card);
            self.empty.push(addr);
        }
        Ok(card)
    }

    /// Remove every card, leaving flags untouched.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.card = None;
        }
        self.locations.clear();
        self.empty = Point::all().collect();
    }

    pub fn get_card(&self, addr: Point) -> Result<Option<Card>, BoardError> {
        self.cell(addr).map(|c| c.card)
    }

    /// Card at `addr`; `None` for an empty or out-of-range address.
    pub fn card_at(&self, addr: Point) -> Option<Card> {
        self.cell(addr).ok().and_then(|c| c.card)
    }

    pub fn location(&self, card: Card) -> Option<Point> {
        self.locations.get(&card).copied()
    }

    /// Empty cells, in the order they became empty.
    pub fn empty_points(&self) -> &[Point] {
        &self.empty
    }

    pub fn occupied_count(&self) -> usize {
        self.locations.len()
    }

    pub fn flags(&self, addr: Point) -> CellFlags {
        self.cell(addr).map(|c| c.flags).unwrap_or(CellFlags::empty())
    }

    pub(crate) fn set_flags(&mut self, addr: Point, flags: CellFlags) -> Result<(), BoardError> {
        self.cell_mut(addr)?.flags = flags;
        Ok(())
    }

    pub fn is_empty(&self, addr: Point) -> bool {
        matches!(self.cell(addr), Ok(Cell { card: None, .. }))
    }

    pub fn is_movable(&self, addr: Point) -> bool {
        self.flags(addr).contains(CellFlags::MOVABLE)
    }

    pub fn is_correct(&self, addr: Point) -> bool {
        self.flags(addr).contains(CellFlags::CORRECT)
    }

    pub fn is_selected(&self, addr: Point) -> bool {
        self.flags(addr).contains(CellFlags::SELECTED)
    }

    /// Placed cards sorted by address.
    pub fn placements(&self) -> Vec<(Point, Card)> {
        Point::all().filter_map(|p| self.card_at(p).map(|c| (p, c))).collect()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot { placements: self.placements() }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            let tokens: Vec<String> = (0..COLS)
                .map(|col| match self.card_at(Point::new(row, col)) {
                    Some(card) => card.to_string(),
                    None => "--".to_string(),
                })
                .collect();
            writeln!(f, "{}", tokens.join(" "))?;
        }
        Ok(())
    }
}

/// Parses the `Display` form: four lines of thirteen tokens, `--` for a gap.
///
/// ```
/// use addiction::board::{Board, Point};
///
/// let text = "\
/// 2C 3C 4C 5C 6C 7C 8C 9C TC JC QC KC --
/// 2D 3D 4D 5D 6D 7D 8D 9D TD JD QD KD --
/// 2H 3H 4H 5H 6H 7H 8H 9H TH JH QH KH --
/// 2S 3S 4S 5S 6S 7S 8S 9S TS JS QS KS --";
/// let board: Board = text.parse().unwrap();
/// assert_eq!(board.occupied_count(), 48);
/// assert!(board.is_empty(Point::new(0, 12)));
/// ```
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount(rows.len()));
        }
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != COLS {
                return Err(BoardParseError::ColumnCount { row, got: tokens.len() });
            }
            for (col, token) in tokens.into_iter().enumerate() {
                if token == "--" {
                    continue;
                }
                let card = Card::from_str(token)?;
                board.set_card(Point::new(row, col), card)?;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Face, Suit};

    fn card(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    #[test]
    fn point_neighbours_stop_at_edges() {
        let corner = Point::new(0, 0);
        assert_eq!(corner.left(), None);
        assert_eq!(corner.above(), None);
        assert_eq!(corner.right(), Some(Point::new(0, 1)));
        assert_eq!(corner.below(), Some(Point::new(1, 0)));

        let far = Point::new(3, 12);
        assert_eq!(far.right(), None);
        assert_eq!(far.below(), None);
        assert_eq!(far.left(), Some(Point::new(3, 11)));
        assert_eq!(far.above(), Some(Point::new(2, 12)));
    }

    #[test]
    fn all_points_are_row_major() {
        let pts: Vec<Point> = Point::all().collect();
        assert_eq!(pts.len(), CELLS);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[13], Point::new(1, 0));
        let mut sorted = pts.clone();
        sorted.sort();
        assert_eq!(pts, sorted);
    }

    #[test]
    fn set_and_clear_keep_index_consistent() {
        let mut b = Board::new();
        let c = card("7H");
        let p = Point::new(2, 4);
        b.set_card(p, c).unwrap();
        assert_eq!(b.location(c), Some(p));
        assert_eq!(b.get_card(p).unwrap(), Some(c));
        assert!(!b.empty_points().contains(&p));
        assert_eq!(b.empty_points().len(), CELLS - 1);

        assert_eq!(b.clear_card(p).unwrap(), Some(c));
        assert_eq!(b.location(c), None);
        assert!(b.is_empty(p));
        assert_eq!(b.empty_points().len(), CELLS);
    }

    #[test]
    fn set_rejects_occupied_and_duplicate() {
        let mut b = Board::new();
        let p = Point::new(0, 3);
        b.set_card(p, card("5D")).unwrap();
        assert_eq!(
            b.set_card(p, card("6D")),
            Err(BoardError::Occupied { addr: p, card: card("5D") })
        );
        assert_eq!(
            b.set_card(Point::new(1, 1), card("5D")),
            Err(BoardError::AlreadyPlaced { card: card("5D"), at: p })
        );
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut b = Board::new();
        let bad = Point::new(4, 0);
        assert_eq!(b.get_card(bad), Err(BoardError::OutOfBounds(bad)));
        assert_eq!(b.clear_card(Point::new(0, 13)), Err(BoardError::OutOfBounds(Point::new(0, 13))));
        assert!(!b.is_empty(bad));
        assert_eq!(b.card_at(bad), None);
    }

    #[test]
    fn clearing_an_empty_cell_does_not_duplicate_it() {
        let mut b = Board::new();
        assert_eq!(b.clear_card(Point::new(0, 0)).unwrap(), None);
        assert_eq!(b.empty_points().len(), CELLS);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let b = Board::from_placements([
            (Point::new(0, 0), Card::new(Suit::Clubs, Face::Two)),
            (Point::new(3, 12), Card::new(Suit::Spades, Face::King)),
        ])
        .unwrap();
        let parsed: Board = b.to_string().parse().unwrap();
        assert_eq!(parsed.snapshot(), b.snapshot());
    }

    #[test]
    fn parse_rejects_bad_shapes() {
        assert!(matches!("2C".parse::<Board>(), Err(BoardParseError::RowCount(1))));
        let short = "2C\n--\n--\n--";
        assert!(matches!(
            short.parse::<Board>(),
            Err(BoardParseError::ColumnCount { row: 0, got: 1 })
        ));
    }

    #[test]
    fn flags_are_projected() {
        let mut b = Board::new();
        let p = Point::new(1, 1);
        b.set_flags(p, CellFlags::MOVABLE | CellFlags::SELECTED).unwrap();
        assert!(b.is_movable(p));
        assert!(b.is_selected(p));
        assert!(!b.is_correct(p));
    }
}

//! Cursor movement between movable cells.
//!
//! Rows form a ring (moving up from row 0 reaches row 3) while columns are a
//! plain line. Both searches take a predicate rather than a board so the
//! engine can hand in its current movable set.

use crate::board::{Point, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

/// The three other rows, nearest first, walking downward around the ring.
fn rows_below(row: usize) -> impl DoubleEndedIterator<Item = usize> {
    (1..ROWS).map(move |i| (row + i) % ROWS)
}

/// Movable cell in `row` nearest to `col`; ties go left.
fn nearest_in_row<F: Fn(Point) -> bool>(row: usize, col: usize, is_movable: &F) -> Option<Point> {
    let left = (0..=col).rev().map(|c| Point::new(row, c)).find(|&p| is_movable(p));
    let right = (col..COLS).map(|c| Point::new(row, c)).find(|&p| is_movable(p));
    match (left, right) {
        (Some(l), Some(r)) => {
            if col - l.col() <= r.col() - col {
                Some(l)
            } else {
                Some(r)
            }
        }
        (l, r) => l.or(r),
    }
}

fn first_in<F, I>(row: usize, cols: I, is_movable: &F) -> Option<Point>
where
    F: Fn(Point) -> bool,
    I: IntoIterator<Item = usize>,
{
    cols.into_iter().map(|c| Point::new(row, c)).find(|&p| is_movable(p))
}

/// Next movable cell from `from` in `direction`, or `None` if there is none.
pub fn next_movable<F: Fn(Point) -> bool>(
    from: Point,
    direction: Direction,
    is_movable: F,
) -> Option<Point> {
    let (row, col) = (from.row(), from.col());
    match direction {
        Direction::Up => rows_below(row).rev().find_map(|r| nearest_in_row(r, col, &is_movable)),
        Direction::Down => rows_below(row).find_map(|r| nearest_in_row(r, col, &is_movable)),
        Direction::Left => first_in(row, (0..col).rev(), &is_movable)
            .or_else(|| rows_below(row).rev().find_map(|r| first_in(r, (0..COLS).rev(), &is_movable)))
            .or_else(|| first_in(row, (col + 1..COLS).rev(), &is_movable)),
        Direction::Right => first_in(row, col + 1..COLS, &is_movable)
            .or_else(|| rows_below(row).find_map(|r| first_in(r, 0..COLS, &is_movable)))
            .or_else(|| first_in(row, 0..col, &is_movable)),
    }
}

/// Movable cell closest to a stale cursor, used after the board changes.
///
/// Search order: the cursor's row from its column rightwards, then each row
/// below (wrapping) nearest-left then right of the column, then the cursor's
/// row leftwards.
pub fn nearest_movable<F: Fn(Point) -> bool>(from: Point, is_movable: F) -> Option<Point> {
    let (row, col) = (from.row(), from.col().min(COLS - 1));
    first_in(row, col..COLS, &is_movable)
        .or_else(|| {
            rows_below(row).find_map(|r| {
                first_in(r, (0..=col).rev(), &is_movable)
                    .or_else(|| first_in(r, col + 1..COLS, &is_movable))
            })
        })
        .or_else(|| first_in(row, (0..col).rev(), &is_movable))
}

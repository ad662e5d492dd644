//! Pure rule evaluation over a [`Board`]: correct runs, the movable set,
//! move destinations and the shuffle layout. Nothing here mutates state.

use crate::board::{Board, Point, COLS, ROWS};
use crate::cards::{Card, Face, Suit};
use crate::deck::Deck;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Longest possible correct run in one row (Two through King).
pub const MAX_RUN: usize = COLS - 1;

/// Correct cells on a finished board: every non-Ace card in place.
pub const WINNING_CORRECT: usize = MAX_RUN * ROWS;

/// Length of the correct run of `row`: the prefix where column `k` holds the
/// card of column 0's suit with face `k + 2`.
pub fn correct_run_len(board: &Board, row: usize) -> usize {
    let Some(anchor) = board.card_at(Point::new(row, 0)) else {
        return 0;
    };
    let suit = anchor.suit();
    (0..MAX_RUN)
        .take_while(|&col| board.card_at(Point::new(row, col)) == expected_card(suit, col))
        .count()
}

fn expected_card(suit: Suit, col: usize) -> Option<Card> {
    Face::from_value(col as u8 + 2).map(|face| Card::new(suit, face))
}

/// Every cell that belongs to some row's correct run, row-major.
pub fn correct_points(board: &Board) -> Vec<Point> {
    (0..ROWS)
        .flat_map(|row| (0..correct_run_len(board, row)).map(move |col| Point::new(row, col)))
        .collect()
}

fn any_head_empty(board: &Board) -> bool {
    (0..ROWS).any(|row| board.is_empty(Point::new(row, 0)))
}

/// Addresses of every movable card, row-major.
///
/// Only the tracked empty cells are inspected: a gap in column 0 frees all
/// four Twos, and a gap elsewhere frees the successor of the card to its left.
pub fn movable_points(board: &Board) -> Vec<Point> {
    let mut found: HashSet<Point> = HashSet::new();
    if any_head_empty(board) {
        found.extend(Suit::ALL.iter().filter_map(|&s| board.location(Card::new(s, Face::Two))));
    }
    for &gap in board.empty_points() {
        let Some(left) = gap.left() else {
            continue;
        };
        if let Some(succ) = board.card_at(left).and_then(Card::successor) {
            if let Some(at) = board.location(succ) {
                found.insert(at);
            }
        }
    }
    let mut out: Vec<Point> = found.into_iter().collect();
    out.sort();
    out
}

/// Whether `card` may move on `board`, evaluated from the definition rather
/// than from the empty-cell index.
pub fn is_movable_card(board: &Board, card: Card) -> bool {
    if board.location(card).is_none() {
        return false;
    }
    if card.face() == Face::Two && any_head_empty(board) {
        return true;
    }
    let Some(pred) = card.predecessor() else {
        return false;
    };
    board
        .location(pred)
        .and_then(Point::right)
        .is_some_and(|right| board.is_empty(right))
}

/// Where the card at `src` goes when moved, if it can move at all.
///
/// A Two takes the first empty column-0 cell scanning rows from the one below
/// `src`, wrapping around. Any other card takes the gap right of its
/// predecessor.
pub fn destination(board: &Board, src: Point) -> Option<Point> {
    let card = board.card_at(src)?;
    if card.face() == Face::Two {
        return (1..=ROWS)
            .map(|i| Point::new((src.row() + i) % ROWS, 0))
            .find(|&p| board.is_empty(p));
    }
    let pred = card.predecessor()?;
    let right = board.location(pred)?.right()?;
    board.is_empty(right).then_some(right)
}

/// A redeal of every cell outside the correct runs.
///
/// The loose cards and the loose addresses are permuted independently and
/// paired up; the address paired with an Ace is left empty.
pub fn shuffle_layout<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Vec<(Point, Option<Card>)> {
    let fixed: HashSet<Point> = correct_points(board).into_iter().collect();
    let fixed_cards: HashSet<Card> = fixed.iter().filter_map(|&p| board.card_at(p)).collect();

    let mut cards = Deck::without(|c| fixed_cards.contains(&c));
    let mut addrs: Vec<Point> = Point::all().filter(|p| !fixed.contains(p)).collect();
    cards.shuffle_with(rng);
    addrs.shuffle(rng);

    addrs
        .into_iter()
        .zip(cards)
        .map(|(addr, card)| (addr, (!card.is_ace()).then_some(card)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::str::FromStr;

    fn card(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    fn solved() -> Board {
        "2C 3C 4C 5C 6C 7C 8C 9C TC JC QC KC --
         2D 3D 4D 5D 6D 7D 8D 9D TD JD QD KD --
         2H 3H 4H 5H 6H 7H 8H 9H TH JH QH KH --
         2S 3S 4S 5S 6S 7S 8S 9S TS JS QS KS --"
            .parse()
            .unwrap()
    }

    #[test]
    fn solved_board_is_fully_correct_with_nothing_movable() {
        let b = solved();
        assert_eq!(correct_points(&b).len(), WINNING_CORRECT);
        assert!(movable_points(&b).is_empty());
    }

    #[test]
    fn correct_run_stops_at_first_mismatch() {
        let b: Board = "2C 3C 4C 6C 5C 7C 8C 9C TC JC QC KC --
                        3D 2D 4D 5D 6D 7D 8D 9D TD JD QD KD --
                        -- 2H 3H 4H 5H 6H 7H 8H 9H TH JH QH KH
                        2S 3S 4S 5S 6S 7S 8S 9S TS JS QS KS --"
            .parse()
            .unwrap();
        assert_eq!(correct_run_len(&b, 0), 3);
        assert_eq!(correct_run_len(&b, 1), 0);
        assert_eq!(correct_run_len(&b, 2), 0);
        assert_eq!(correct_run_len(&b, 3), 12);
    }

    #[test]
    fn gap_after_a_card_frees_its_successor() {
        let b = Board::from_placements([
            (Point::new(2, 4), card("7H")),
            (Point::new(0, 9), card("8H")),
            (Point::new(0, 0), card("2C")),
            (Point::new(1, 0), card("2D")),
            (Point::new(2, 0), card("2H")),
            (Point::new(3, 0), card("2S")),
        ])
        .unwrap();
        let movable = movable_points(&b);
        assert!(movable.contains(&Point::new(0, 9)));
        assert_eq!(destination(&b, Point::new(0, 9)), Some(Point::new(2, 5)));
        assert!(is_movable_card(&b, card("8H")));
    }

    #[test]
    fn kings_free_nothing() {
        let b = Board::from_placements([
            (Point::new(0, 0), card("2C")),
            (Point::new(1, 0), card("2D")),
            (Point::new(2, 0), card("2H")),
            (Point::new(3, 0), card("2S")),
            (Point::new(1, 5), card("KD")),
        ])
        .unwrap();
        // the only cards with an empty right neighbour are Twos and a King;
        // every successor of a Two is absent
        assert!(movable_points(&b).is_empty());
    }

    #[test]
    fn empty_head_frees_all_twos() {
        let b = Board::from_placements([
            (Point::new(0, 3), card("2C")),
            (Point::new(1, 7), card("2D")),
            (Point::new(2, 1), card("2H")),
            (Point::new(3, 12), card("2S")),
        ])
        .unwrap();
        let movable = movable_points(&b);
        for p in [Point::new(0, 3), Point::new(1, 7), Point::new(2, 1), Point::new(3, 12)] {
            assert!(movable.contains(&p), "{p} should be movable");
        }
    }

    #[test]
    fn two_goes_to_first_empty_head_after_its_row() {
        let b = Board::from_placements([
            (Point::new(1, 0), card("3S")),
            (Point::new(2, 0), card("4S")),
            (Point::new(1, 5), card("2H")),
        ])
        .unwrap();
        // rows scanned: 2, 3, 0, 1
        assert_eq!(destination(&b, Point::new(1, 5)), Some(Point::new(3, 0)));
    }

    #[test]
    fn destination_of_empty_or_stuck_cell_is_none() {
        let b = Board::from_placements([(Point::new(0, 4), card("9C")), (Point::new(0, 5), card("JD"))])
            .unwrap();
        assert_eq!(destination(&b, Point::new(2, 2)), None);
        // 8C is absent, so 9C has nowhere to go
        assert_eq!(destination(&b, Point::new(0, 4)), None);
    }

    #[test]
    fn shuffle_layout_keeps_runs_and_drops_aces() {
        let b: Board = "2C 3C 4C KD 5D 6D 7D 8D 9D TD JD QD --
                        4H 5H 6H 7H 8H 9H TH JH QH KH 2D 3D --
                        2S 3S 4S 5S 6S 7S 8S 9S TS JS QS KS --
                        5C 6C 7C 8C 9C TC JC QC KC 2H 3H 4D --"
            .parse()
            .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let layout = shuffle_layout(&b, &mut rng);
        let fixed = correct_points(&b);
        assert_eq!(fixed.len(), 15);
        assert_eq!(layout.len(), 52 - 15);
        assert!(layout.iter().all(|(p, _)| !fixed.contains(p)));
        assert_eq!(layout.iter().filter(|(_, c)| c.is_none()).count(), 4);
        let placed: HashSet<Card> = layout.iter().filter_map(|(_, c)| *c).collect();
        assert_eq!(placed.len(), 52 - 15 - 4);
    }
}

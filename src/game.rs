use crate::board::{Board, CellFlags, Point};
use crate::cards::{Card, Face, Suit};
use crate::engine::{GameObserver, NoopObserver};
use crate::history::{UndoEntry, UndoHistory};
use crate::navigation::{self, Direction};
use crate::rules;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::str::FromStr;

/// How many shuffles a game allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShuffleLimit {
    Limited(u32),
    Unlimited,
}

impl ShuffleLimit {
    pub const DEFAULT: ShuffleLimit = ShuffleLimit::Limited(3);

    pub fn is_exhausted(self, used: u32) -> bool {
        match self {
            ShuffleLimit::Limited(max) => used >= max,
            ShuffleLimit::Unlimited => false,
        }
    }

    /// Shuffles still available after `used`, or `None` when unlimited.
    pub fn remaining(self, used: u32) -> Option<u32> {
        match self {
            ShuffleLimit::Limited(max) => Some(max.saturating_sub(used)),
            ShuffleLimit::Unlimited => None,
        }
    }
}

impl Default for ShuffleLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ShuffleLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShuffleLimit::Limited(n) => write!(f, "{n}"),
            ShuffleLimit::Unlimited => f.write_str("unlimited"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShuffleLimitParseError {
    #[error("invalid shuffle limit: '{0}' (expected a count or \"unlimited\")")]
    Invalid(String),
}

impl FromStr for ShuffleLimit {
    type Err = ShuffleLimitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("unlimited") {
            return Ok(ShuffleLimit::Unlimited);
        }
        t.parse::<u32>()
            .map(ShuffleLimit::Limited)
            .map_err(|_| ShuffleLimitParseError::Invalid(s.to_string()))
    }
}

/// Engine configuration, fixed at construction and replaced through
/// [`Game::apply_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub shuffles: ShuffleLimit,
    /// Seed for deals and shuffles; random when `None`.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no game in progress")]
    NotInProgress,
    #[error("cell {0} is empty")]
    EmptyCell(Point),
    #[error("card at {0} cannot move")]
    NotMovable(Point),
    #[error("nothing is selected")]
    NoSelection,
    #[error("card at {0} has no destination")]
    NoDestination(Point),
    #[error("no shuffles left")]
    ShufflesExhausted,
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("layout must hold the 48 cards without Aces (found {cards} cards, {aces} Aces)")]
    InvalidLayout { cards: usize, aces: usize },
    #[error(transparent)]
    Board(#[from] crate::board::BoardError),
}

/// One game session: board, undo history and counters, reporting every
/// change to an observer `O`.
#[derive(Debug)]
pub struct Game<O = NoopObserver> {
    config: GameConfig,
    board: Board,
    history: UndoHistory,
    status: GameStatus,
    selected: Option<Point>,
    moves: u32,
    shuffles_used: u32,
    movable_count: usize,
    correct_count: usize,
    quit_requested: bool,
    rng: ChaCha8Rng,
    observer: O,
}

impl Game<NoopObserver> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: GameObserver> Game<O> {
    pub fn with_observer(config: GameConfig, observer: O) -> Self {
        Self {
            config,
            board: Board::new(),
            history: UndoHistory::new(),
            status: GameStatus::NotStarted,
            selected: None,
            moves: 0,
            shuffles_used: 0,
            movable_count: 0,
            correct_count: 0,
            quit_requested: false,
            rng: Self::make_rng(config.seed),
            observer,
        }
    }

    fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// Returns the active configuration
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn selected(&self) -> Option<Point> {
        self.selected
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn shuffles_used(&self) -> u32 {
        self.shuffles_used
    }

    /// Shuffles still available, or `None` when unlimited
    pub fn shuffles_left(&self) -> Option<u32> {
        self.config.shuffles.remaining(self.shuffles_used)
    }

    pub fn movable_count(&self) -> usize {
        self.movable_count
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// True while a game is running but nothing can move.
    pub fn is_stuck(&self) -> bool {
        self.status == GameStatus::InProgress && self.movable_count == 0
    }

    pub fn has_quit(&self) -> bool {
        self.quit_requested
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Replace the configuration. A new limit is checked immediately, so a
    /// stuck game whose shuffles are now exhausted ends here.
    pub fn apply_config(&mut self, config: GameConfig) -> Result<(), ActionError> {
        if config.seed.is_some() && config.seed != self.config.seed {
            self.rng = Self::make_rng(config.seed);
        }
        self.config = config;
        self.observer.shuffles_changed(self.shuffles_used);
        if self.status == GameStatus::InProgress {
            self.refresh(self.selected)?;
        }
        Ok(())
    }

    /// Clear the board and deal a fresh game.
    pub fn new_game(&mut self) -> Result<(), ActionError> {
        self.reset_session()?;
        self.redeal()?;
        log::info!("new game dealt (shuffles: {})", self.config.shuffles);
        self.refresh(None)
    }

    /// Start a game from a prearranged layout instead of a random deal. The
    /// layout must hold every card except the Aces.
    pub fn new_game_with(&mut self, board: Board) -> Result<(), ActionError> {
        let aces = Suit::ALL
            .iter()
            .filter(|&&s| board.location(Card::new(s, Face::Ace)).is_some())
            .count();
        let cards = board.occupied_count();
        if aces > 0 || cards != rules::WINNING_CORRECT {
            return Err(ActionError::InvalidLayout { cards, aces });
        }
        self.reset_session()?;
        for (addr, card) in board.placements() {
            self.place(addr, card)?;
        }
        log::info!("new game from layout with {} cards", board.occupied_count());
        self.refresh(None)
    }

    fn reset_session(&mut self) -> Result<(), ActionError> {
        self.history.clear();
        self.observer.undo_changed(0);
        self.deselect()?;
        self.clear_board()?;
        self.moves = 0;
        self.shuffles_used = 0;
        self.quit_requested = false;
        self.status = GameStatus::InProgress;
        self.observer.game_new();
        self.observer.moves_changed(self.moves);
        self.observer.shuffles_changed(self.shuffles_used);
        Ok(())
    }

    pub fn quit(&mut self) {
        log::info!("quit after {} moves", self.moves);
        self.quit_requested = true;
        self.observer.quit();
    }

    /// Make `addr` the selection. It must hold a movable card.
    pub fn select(&mut self, addr: Point) -> Result<(), ActionError> {
        self.ensure_in_progress()?;
        self.board.get_card(addr)?.ok_or(ActionError::EmptyCell(addr))?;
        if !self.board.is_movable(addr) {
            return Err(ActionError::NotMovable(addr));
        }
        if self.selected != Some(addr) {
            self.select_unchecked(addr)?;
        }
        Ok(())
    }

    /// Move the selection to the next movable cell in `direction`. Leaves it
    /// unchanged when there is none, including when nothing is selected.
    pub fn move_selected(&mut self, direction: Direction) -> Result<(), ActionError> {
        self.ensure_in_progress()?;
        let Some(from) = self.selected else {
            return Ok(());
        };
        let board = &self.board;
        if let Some(next) = navigation::next_movable(from, direction, |p| board.is_movable(p)) {
            self.select_unchecked(next)?;
        }
        Ok(())
    }

    /// Move the selected card.
    pub fn move_selected_card(&mut self) -> Result<(), ActionError> {
        self.ensure_in_progress()?;
        let src = self.selected.ok_or(ActionError::NoSelection)?;
        self.move_card(src)
    }

    /// Move the card at `src` onto its gap.
    pub fn move_card(&mut self, src: Point) -> Result<(), ActionError> {
        self.ensure_in_progress()?;
        let card = self.board.get_card(src)?.ok_or(ActionError::EmptyCell(src))?;
        if !self.board.is_movable(src) {
            return Err(ActionError::NotMovable(src));
        }
        let dst = rules::destination(&self.board, src).ok_or(ActionError::NoDestination(src))?;
        let cursor = self.selected;
        self.relocate(src, dst)?;
        self.history.push(UndoEntry::Move { src, dst, cursor });
        self.observer.undo_changed(self.history.len());
        self.moves += 1;
        self.observer.moves_changed(self.moves);
        log::debug!("move {card} {src} -> {dst}");
        self.refresh(Some(src))
    }

    /// Redeal every card outside the correct runs.
    pub fn shuffle(&mut self) -> Result<(), ActionError> {
        self.ensure_in_progress()?;
        if self.config.shuffles.is_exhausted(self.shuffles_used) {
            return Err(ActionError::ShufflesExhausted);
        }
        let cursor = self.selected;
        self.history.push(UndoEntry::Shuffle { snapshot: self.board.snapshot(), cursor });
        self.observer.undo_changed(self.history.len());
        self.shuffles_used += 1;
        self.observer.shuffles_changed(self.shuffles_used);
        self.redeal()?;
        log::debug!("shuffle {} of {}", self.shuffles_used, self.config.shuffles);
        self.refresh(cursor)
    }

    /// Revert the most recent move or shuffle.
    pub fn undo(&mut self) -> Result<(), ActionError> {
        if self.status != GameStatus::InProgress {
            self.observer.nothing_to_undo();
            return Err(ActionError::NotInProgress);
        }
        let Some(entry) = self.history.pop() else {
            self.observer.nothing_to_undo();
            return Err(ActionError::NothingToUndo);
        };
        self.observer.undo_changed(self.history.len());
        log::debug!("undo {}", entry.label());
        self.replay(entry)
    }

    fn replay(&mut self, entry: UndoEntry) -> Result<(), ActionError> {
        match entry {
            UndoEntry::Move { src, dst, cursor } => {
                self.relocate(dst, src)?;
                self.moves = self.moves.saturating_sub(1);
                self.observer.moves_changed(self.moves);
                self.refresh(cursor.or(Some(src)))
            }
            UndoEntry::Shuffle { snapshot, cursor } => {
                self.clear_board()?;
                for &(addr, card) in snapshot.placements() {
                    self.place(addr, card)?;
                }
                self.shuffles_used = self.shuffles_used.saturating_sub(1);
                self.observer.shuffles_changed(self.shuffles_used);
                self.refresh(cursor)
            }
        }
    }

    /// Recompute every derived flag from the board, then decide between
    /// won, lost, stuck and a fresh selection near `hint`.
    fn refresh(&mut self, hint: Option<Point>) -> Result<(), ActionError> {
        self.deselect()?;
        for addr in Point::all() {
            self.write_flags(addr, CellFlags::empty())?;
        }

        let correct = rules::correct_points(&self.board);
        for &addr in &correct {
            self.write_flags(addr, CellFlags::CORRECT)?;
        }
        self.correct_count = correct.len();
        self.observer.correct_count_changed(self.correct_count);

        if self.correct_count == rules::WINNING_CORRECT {
            self.movable_count = 0;
            self.finish(true);
            return Ok(());
        }

        let movable = rules::movable_points(&self.board);
        for &addr in &movable {
            let flags = self.board.flags(addr) | CellFlags::MOVABLE;
            self.write_flags(addr, flags)?;
        }
        self.movable_count = movable.len();
        self.observer.movable_count_changed(self.movable_count);

        let Some(&first) = movable.first() else {
            if self.config.shuffles.is_exhausted(self.shuffles_used) {
                self.finish(false);
            } else {
                self.observer.no_moves(self.shuffles_left());
            }
            return Ok(());
        };

        let board = &self.board;
        let target = match hint {
            Some(h) if board.is_movable(h) => h,
            Some(h) => navigation::nearest_movable(h, |p| board.is_movable(p)).unwrap_or(first),
            None => first,
        };
        self.select_unchecked(target)
    }

    fn finish(&mut self, won: bool) {
        self.status = if won { GameStatus::Won } else { GameStatus::Lost };
        self.history.clear();
        self.observer.undo_changed(0);
        log::info!(
            "game over ({}): {} moves, {} shuffles",
            if won { "won" } else { "lost" },
            self.moves,
            self.shuffles_used
        );
        self.observer.game_over(won);
    }

    fn ensure_in_progress(&self) -> Result<(), ActionError> {
        if self.status != GameStatus::InProgress {
            return Err(ActionError::NotInProgress);
        }
        Ok(())
    }

    fn select_unchecked(&mut self, addr: Point) -> Result<(), ActionError> {
        self.deselect()?;
        let flags = self.board.flags(addr) | CellFlags::SELECTED;
        self.write_flags(addr, flags)?;
        self.selected = Some(addr);
        self.observer.selection_changed(self.selected);
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), ActionError> {
        if let Some(addr) = self.selected.take() {
            let flags = self.board.flags(addr) - CellFlags::SELECTED;
            self.write_flags(addr, flags)?;
            self.observer.selection_changed(None);
        }
        Ok(())
    }

    fn write_flags(&mut self, addr: Point, flags: CellFlags) -> Result<(), ActionError> {
        if self.board.flags(addr) != flags {
            self.board.set_flags(addr, flags)?;
            self.observer.cell_flags_changed(addr, flags);
        }
        Ok(())
    }

    fn place(&mut self, addr: Point, card: Card) -> Result<(), ActionError> {
        self.board.set_card(addr, card)?;
        self.observer.cell_card_changed(addr, Some(card));
        Ok(())
    }

    fn take(&mut self, addr: Point) -> Result<Option<Card>, ActionError> {
        let card = self.board.clear_card(addr)?;
        if card.is_some() {
            self.observer.cell_card_changed(addr, None);
        }
        Ok(card)
    }

    fn relocate(&mut self, src: Point, dst: Point) -> Result<(), ActionError> {
        let card = self.take(src)?.ok_or(ActionError::EmptyCell(src))?;
        self.place(dst, card)
    }

    fn clear_board(&mut self) -> Result<(), ActionError> {
        for addr in Point::all() {
            self.take(addr)?;
        }
        Ok(())
    }

    fn redeal(&mut self) -> Result<(), ActionError> {
        let layout = rules::shuffle_layout(&self.board, &mut self.rng);
        for &(addr, _) in &layout {
            self.take(addr)?;
        }
        for (addr, card) in layout {
            if let Some(card) = card {
                self.place(addr, card)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EventLog, GameEvent};

    fn mk_game(shuffles: ShuffleLimit) -> Game<EventLog> {
        Game::with_observer(GameConfig { shuffles, seed: Some(7) }, EventLog::new())
    }

    fn layout(text: &str) -> Board {
        text.parse().expect("valid layout")
    }

    #[test]
    fn new_game_deals_48_cards_and_selects() {
        let mut g = mk_game(ShuffleLimit::DEFAULT);
        g.new_game().unwrap();
        assert_eq!(g.board().occupied_count(), 48);
        assert_eq!(g.board().empty_points().len(), 4);
        for s in Suit::ALL {
            assert_eq!(g.board().location(Card::new(s, Face::Ace)), None);
        }
        assert!(g.observer().contains(&GameEvent::GameNew));
        if g.movable_count() > 0 {
            let sel = g.selected().expect("selection with movable cards");
            assert!(g.board().is_movable(sel));
            assert!(g.board().is_selected(sel));
        }
    }

    #[test]
    fn seeded_games_deal_identically() {
        let mut a = mk_game(ShuffleLimit::DEFAULT);
        let mut b = mk_game(ShuffleLimit::DEFAULT);
        a.new_game().unwrap();
        b.new_game().unwrap();
        assert_eq!(a.board().snapshot(), b.board().snapshot());
    }

    #[test]
    fn commands_require_a_running_game() {
        let mut g = mk_game(ShuffleLimit::DEFAULT);
        assert_eq!(g.shuffle(), Err(ActionError::NotInProgress));
        assert_eq!(g.move_card(Point::new(0, 0)), Err(ActionError::NotInProgress));
        assert_eq!(g.undo(), Err(ActionError::NotInProgress));
        assert_eq!(g.observer().last(), Some(&GameEvent::NothingToUndo));
    }

    #[test]
    fn moving_a_card_updates_counters_and_history() {
        let mut g = mk_game(ShuffleLimit::DEFAULT);
        g.new_game_with(layout(
            "2C 3C 4C 5C 6C 7C 8C 9C TC JC QC -- KC
             2D 3D 4D 5D 6D 7D 8D 9D TD JD QD KD --
             2H 3H 4H 5H 6H 7H 8H 9H TH JH QH KH --
             2S 3S 4S 5S 6S 7S 8S 9S TS JS QS KS --",
        ))
        .unwrap();
        assert_eq!(g.movable_count(), 1);
        assert_eq!(g.selected(), Some(Point::new(0, 12)));
        g.move_selected_card().unwrap();
        assert_eq!(g.status(), GameStatus::Won);
        assert_eq!(g.moves(), 1);
        // game over clears the history
        assert!(g.history().is_empty());
        assert_eq!(g.observer().last(), Some(&GameEvent::GameOver { won: true }));
    }

    #[test]
    fn move_then_undo_restores_board_and_cursor() {
        let mut g = mk_game(ShuffleLimit::DEFAULT);
        g.new_game_with(layout(
            "2C 3C 4C -- 5C 6C 7C 8C 9C TC JC QC KC
             2D 3D 4D 5D 6D 7D 8D 9D TD JD QD KD --
             2H 3H 4H 5H 6H 7H 8H 9H TH JH QH KH --
             2S 3S 4S 5S 6S 7S 8S 9S TS JS QS KS --",
        ))
        .unwrap();
        let before = g.board().snapshot();
        let cursor = g.selected();
        assert_eq!(cursor, Some(Point::new(0, 4)));
        assert_eq!(g.correct_count(), 36 + 3);
        g.move_card(Point::new(0, 4)).unwrap();
        assert_eq!(g.board().card_at(Point::new(0, 3)), Some(Card::new(Suit::Clubs, Face::Five)));
        assert_eq!(g.correct_count(), 36 + 4);
        assert!(g.board().is_correct(Point::new(0, 3)));
        assert_eq!(g.history().len(), 1);
        g.undo().unwrap();
        assert_eq!(g.board().snapshot(), before);
        assert_eq!(g.selected(), cursor);
        assert_eq!(g.moves(), 0);
        assert_eq!(g.correct_count(), 36 + 3);
        assert!(g.history().is_empty());
    }

    #[test]
    fn layouts_with_aces_or_missing_cards_are_rejected() {
        let mut g = mk_game(ShuffleLimit::DEFAULT);
        let with_ace = layout(
            "AC -- -- -- -- -- -- -- -- -- -- -- --
             3D -- -- -- -- 2C -- -- -- -- -- -- --
             4D -- -- -- -- -- -- -- -- -- -- -- --
             5D -- -- -- -- -- -- -- -- -- -- -- --",
        );
        assert_eq!(
            g.new_game_with(with_ace),
            Err(ActionError::InvalidLayout { cards: 5, aces: 1 })
        );
        assert_eq!(g.status(), GameStatus::NotStarted);
        assert_eq!(g.board().occupied_count(), 0);
        assert!(g.observer().events().is_empty());

        let short = layout(
            "2C 3C 4C 5C 6C 7C 8C 9C TC JC QC KC --
             2D 3D 4D 5D 6D 7D 8D 9D TD JD QD KD --
             2H 3H 4H 5H 6H 7H 8H 9H TH JH QH KH --
             2S 3S 4S 5S 6S 7S 8S 9S TS JS QS -- --",
        );
        assert_eq!(
            g.new_game_with(short),
            Err(ActionError::InvalidLayout { cards: 47, aces: 0 })
        );
    }

    #[test]
    fn directional_move_without_a_selection_is_a_no_op() {
        let mut g = mk_game(ShuffleLimit::Limited(1));
        g.new_game_with(layout(
            "3C 4C 5C 6C 7C 8C 9C TC JC QC KC -- 2C
             3D 4D 5D 6D 7D 8D 9D TD JD QD KD -- 2D
             3H 4H 5H 6H 7H 8H 9H TH JH QH KH -- 2H
             3S 4S 5S 6S 7S 8S 9S TS JS QS KS -- 2S",
        ))
        .unwrap();
        assert!(g.is_stuck());
        g.observer_mut().clear();
        assert_eq!(g.move_selected(Direction::Left), Ok(()));
        assert_eq!(g.selected(), None);
        assert!(g.observer().events().is_empty());
    }

    #[test]
    fn non_movable_cells_are_rejected_without_change() {
        let mut g = mk_game(ShuffleLimit::DEFAULT);
        g.new_game().unwrap();
        let before = g.board().snapshot();
        let stuck = Point::all()
            .find(|&p| g.board().card_at(p).is_some() && !g.board().is_movable(p))
            .expect("some card is not movable");
        assert_eq!(g.move_card(stuck), Err(ActionError::NotMovable(stuck)));
        assert_eq!(g.select(stuck), Err(ActionError::NotMovable(stuck)));
        let gap = g.board().empty_points()[0];
        assert_eq!(g.move_card(gap), Err(ActionError::EmptyCell(gap)));
        assert!(matches!(g.move_card(Point::new(9, 9)), Err(ActionError::Board(_))));
        assert_eq!(g.board().snapshot(), before);
        assert_eq!(g.moves(), 0);
    }

    #[test]
    fn shuffle_then_undo_restores_everything() {
        let mut g = mk_game(ShuffleLimit::Limited(2));
        g.new_game().unwrap();
        let before = g.board().snapshot();
        let cursor = g.selected();
        g.shuffle().unwrap();
        assert_eq!(g.shuffles_used(), 1);
        assert_eq!(g.shuffles_left(), Some(1));
        g.undo().unwrap();
        assert_eq!(g.board().snapshot(), before);
        assert_eq!(g.selected(), cursor);
        assert_eq!(g.shuffles_used(), 0);
    }

    #[test]
    fn shuffle_respects_the_limit() {
        let mut g = mk_game(ShuffleLimit::Limited(0));
        g.new_game().unwrap();
        if g.status() == GameStatus::InProgress {
            assert_eq!(g.shuffle(), Err(ActionError::ShufflesExhausted));
        }

        let mut u = mk_game(ShuffleLimit::Unlimited);
        u.new_game().unwrap();
        for _ in 0..10 {
            if u.status() != GameStatus::InProgress {
                break;
            }
            u.shuffle().unwrap();
        }
        assert_eq!(u.shuffles_left(), None);
    }

    #[test]
    fn stuck_with_shuffles_left_reports_no_moves() {
        let mut g = mk_game(ShuffleLimit::Limited(1));
        // every gap sits after a King; all heads are filled
        g.new_game_with(layout(
            "3C 4C 5C 6C 7C 8C 9C TC JC QC KC -- 2C
             3D 4D 5D 6D 7D 8D 9D TD JD QD KD -- 2D
             3H 4H 5H 6H 7H 8H 9H TH JH QH KH -- 2H
             3S 4S 5S 6S 7S 8S 9S TS JS QS KS -- 2S",
        ))
        .unwrap();
        assert!(g.is_stuck());
        assert_eq!(g.selected(), None);
        assert_eq!(g.observer().last(), Some(&GameEvent::NoMoves { shuffles_left: Some(1) }));
        assert_eq!(g.status(), GameStatus::InProgress);
    }

    #[test]
    fn lowering_the_limit_while_stuck_ends_the_game() {
        let mut g = mk_game(ShuffleLimit::Limited(1));
        g.new_game_with(layout(
            "3C 4C 5C 6C 7C 8C 9C TC JC QC KC -- 2C
             3D 4D 5D 6D 7D 8D 9D TD JD QD KD -- 2D
             3H 4H 5H 6H 7H 8H 9H TH JH QH KH -- 2H
             3S 4S 5S 6S 7S 8S 9S TS JS QS KS -- 2S",
        ))
        .unwrap();
        g.apply_config(GameConfig { shuffles: ShuffleLimit::Limited(0), seed: Some(7) }).unwrap();
        assert_eq!(g.status(), GameStatus::Lost);
    }

    #[test]
    fn quit_is_reported() {
        let mut g = mk_game(ShuffleLimit::DEFAULT);
        g.quit();
        assert!(g.has_quit());
        assert_eq!(g.observer().last(), Some(&GameEvent::Quit));
    }

    #[test]
    fn shuffle_limit_parses() {
        assert_eq!("unlimited".parse::<ShuffleLimit>().unwrap(), ShuffleLimit::Unlimited);
        assert_eq!(" 5 ".parse::<ShuffleLimit>().unwrap(), ShuffleLimit::Limited(5));
        assert!("many".parse::<ShuffleLimit>().is_err());
        assert_eq!(ShuffleLimit::Limited(2).to_string(), "2");
        assert!(ShuffleLimit::Limited(2).is_exhausted(2));
        assert!(!ShuffleLimit::Unlimited.is_exhausted(u32::MAX));
    }
}

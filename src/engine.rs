// Engine API boundary. `GameObserver` is the capability a front-end
// implements to hear about state changes; `SolitaireEngine` is the command
// surface it drives. Front-ends (TUI, tests, replays) depend on these two
// traits, never on engine internals.

use crate::board::{CellFlags, Point};
use crate::cards::Card;
use crate::game::ActionError;
use crate::navigation::Direction;

/// Change notifications emitted by the engine. Every method defaults to a
/// no-op so front-ends override only what they render.
pub trait GameObserver {
    fn cell_card_changed(&mut self, _addr: Point, _card: Option<Card>) {}
    fn cell_flags_changed(&mut self, _addr: Point, _flags: CellFlags) {}
    fn selection_changed(&mut self, _selected: Option<Point>) {}
    fn movable_count_changed(&mut self, _movable: usize) {}
    fn correct_count_changed(&mut self, _correct: usize) {}
    /// Shuffles used so far in this game.
    fn shuffles_changed(&mut self, _used: u32) {}
    fn moves_changed(&mut self, _moves: u32) {}
    fn game_new(&mut self) {}
    fn game_over(&mut self, _won: bool) {}
    /// Depth of the undo stack.
    fn undo_changed(&mut self, _undos: usize) {}
    fn nothing_to_undo(&mut self) {}
    /// Nothing can move but a shuffle is still available.
    fn no_moves(&mut self, _shuffles_left: Option<u32>) {}
    fn quit(&mut self) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// A recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameEvent {
    CellCard { addr: Point, card: Option<Card> },
    CellFlags { addr: Point, flags: CellFlags },
    Selection(Option<Point>),
    MovableCount(usize),
    CorrectCount(usize),
    Shuffles(u32),
    Moves(u32),
    GameNew,
    GameOver { won: bool },
    Undo(usize),
    NothingToUndo,
    NoMoves { shuffles_left: Option<u32> },
    Quit,
}

/// Observer that records every notification for later inspection.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    pub fn contains(&self, event: &GameEvent) -> bool {
        self.events.contains(event)
    }
}

impl GameObserver for EventLog {
    fn cell_card_changed(&mut self, addr: Point, card: Option<Card>) {
        self.events.push(GameEvent::CellCard { addr, card });
    }
    fn cell_flags_changed(&mut self, addr: Point, flags: CellFlags) {
        self.events.push(GameEvent::CellFlags { addr, flags });
    }
    fn selection_changed(&mut self, selected: Option<Point>) {
        self.events.push(GameEvent::Selection(selected));
    }
    fn movable_count_changed(&mut self, movable: usize) {
        self.events.push(GameEvent::MovableCount(movable));
    }
    fn correct_count_changed(&mut self, correct: usize) {
        self.events.push(GameEvent::CorrectCount(correct));
    }
    fn shuffles_changed(&mut self, used: u32) {
        self.events.push(GameEvent::Shuffles(used));
    }
    fn moves_changed(&mut self, moves: u32) {
        self.events.push(GameEvent::Moves(moves));
    }
    fn game_new(&mut self) {
        self.events.push(GameEvent::GameNew);
    }
    fn game_over(&mut self, won: bool) {
        self.events.push(GameEvent::GameOver { won });
    }
    fn undo_changed(&mut self, undos: usize) {
        self.events.push(GameEvent::Undo(undos));
    }
    fn nothing_to_undo(&mut self) {
        self.events.push(GameEvent::NothingToUndo);
    }
    fn no_moves(&mut self, shuffles_left: Option<u32>) {
        self.events.push(GameEvent::NoMoves { shuffles_left });
    }
    fn quit(&mut self) {
        self.events.push(GameEvent::Quit);
    }
}

/// Commands a front-end issues, plus the queries it needs to render.
pub trait SolitaireEngine {
    // Session lifecycle
    fn new_game(&mut self) -> Result<(), ActionError>;
    fn quit(&mut self);

    // Player commands
    fn select(&mut self, addr: Point) -> Result<(), ActionError>;
    fn move_selected(&mut self, direction: Direction) -> Result<(), ActionError>;
    fn move_card(&mut self, src: Point) -> Result<(), ActionError>;
    fn move_selected_card(&mut self) -> Result<(), ActionError>;
    fn shuffle(&mut self) -> Result<(), ActionError>;
    fn undo(&mut self) -> Result<(), ActionError>;

    // Queries
    fn card_at(&self, addr: Point) -> Option<Card>;
    fn flags(&self, addr: Point) -> CellFlags;
    fn selected(&self) -> Option<Point>;
    fn status(&self) -> crate::game::GameStatus;
    fn moves(&self) -> u32;
    fn shuffles_used(&self) -> u32;
    fn shuffles_left(&self) -> Option<u32>;
    fn undo_len(&self) -> usize;
}

impl<O: GameObserver> SolitaireEngine for crate::game::Game<O> {
    fn new_game(&mut self) -> Result<(), ActionError> {
        self.new_game()
    }
    fn quit(&mut self) {
        self.quit();
    }

    fn select(&mut self, addr: Point) -> Result<(), ActionError> {
        self.select(addr)
    }
    fn move_selected(&mut self, direction: Direction) -> Result<(), ActionError> {
        self.move_selected(direction)
    }
    fn move_card(&mut self, src: Point) -> Result<(), ActionError> {
        self.move_card(src)
    }
    fn move_selected_card(&mut self) -> Result<(), ActionError> {
        self.move_selected_card()
    }
    fn shuffle(&mut self) -> Result<(), ActionError> {
        self.shuffle()
    }
    fn undo(&mut self) -> Result<(), ActionError> {
        self.undo()
    }

    fn card_at(&self, addr: Point) -> Option<Card> {
        self.board().card_at(addr)
    }
    fn flags(&self, addr: Point) -> CellFlags {
        self.board().flags(addr)
    }
    fn selected(&self) -> Option<Point> {
        self.selected()
    }
    fn status(&self) -> crate::game::GameStatus {
        self.status()
    }
    fn moves(&self) -> u32 {
        self.moves()
    }
    fn shuffles_used(&self) -> u32 {
        self.shuffles_used()
    }
    fn shuffles_left(&self) -> Option<u32> {
        self.shuffles_left()
    }
    fn undo_len(&self) -> usize {
        self.history().len()
    }
}

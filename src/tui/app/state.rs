use crate::clock::GameClock;
use crate::engine::{EventLog, GameEvent};
use crate::game::{ActionError, Game, GameStatus, ShuffleLimit};
use crate::navigation::Direction;
use crate::settings::Settings;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Board,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    NewGame,
    Navigate(Direction),
    MoveCard,
    Shuffle,
    Undo,
    Quit,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Core game engine instance; its event log is drained after each command
    pub game: Game<EventLog>,
    pub settings: Settings,
    pub clock: GameClock,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_shuffles: ShuffleLimit,
    pub cfg_highlight_movable: bool,
    pub cfg_highlight_correct: bool,
    settings_path: Option<PathBuf>,
    elapsed_secs: u64,
    help_open: bool,
    report: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
    quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default(), None)
    }
}

impl AppState {
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// Start in the menu scene. Settings applied from the menu are written
    /// back to `settings_path` when given.
    pub fn new(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        Self {
            scene: Scene::Menu,
            game: Game::with_observer(settings.game_config(), EventLog::new()),
            settings,
            clock: GameClock::new(),
            menu_index: 0,
            cfg_shuffles: settings.shuffles,
            cfg_highlight_movable: settings.highlight_movable,
            cfg_highlight_correct: settings.highlight_correct,
            settings_path,
            elapsed_secs: 0,
            help_open: false,
            report: None,
            action_error: None,
            action_error_at: None,
            quit: false,
        }
    }

    pub fn settings_path(&self) -> Option<&std::path::Path> {
        self.settings_path.as_deref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Latest game report (new game, no moves, game over).
    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    fn set_action_error(&mut self, err: &ActionError) {
        self.action_error = Some(err.to_string());
        self.action_error_at = Some(Instant::now());
    }

    /// Run an engine command, then fold the events it produced into the
    /// status line and clock. Returns whether the command was accepted.
    pub(crate) fn command<F>(&mut self, run: F) -> bool
    where
        F: FnOnce(&mut Game<EventLog>) -> Result<(), ActionError>,
    {
        let res = run(&mut self.game);
        self.absorb_events();
        match res {
            Ok(()) => {
                self.clear_action_error();
                true
            }
            Err(ActionError::NothingToUndo) | Err(ActionError::NotInProgress) => false,
            Err(err) => {
                log::debug!("rejected command: {err}");
                self.set_action_error(&err);
                false
            }
        }
    }

    fn absorb_events(&mut self) {
        for event in self.game.observer_mut().drain() {
            match event {
                GameEvent::GameNew => {
                    self.clock.start();
                    self.report = Some("New game dealt.".to_string());
                }
                GameEvent::GameOver { won } => {
                    self.clock.stop();
                    self.report = Some(if won {
                        "You won! Press N for a new game.".to_string()
                    } else {
                        "No moves and no shuffles left. Game over.".to_string()
                    });
                }
                GameEvent::NoMoves { shuffles_left } => {
                    self.report = Some(match shuffles_left {
                        Some(n) => format!("No moves left. Press S to shuffle ({n} left)."),
                        None => "No moves left. Press S to shuffle.".to_string(),
                    });
                }
                GameEvent::NothingToUndo => {
                    self.report = Some("Nothing to undo.".to_string());
                }
                GameEvent::Quit => self.clock.stop(),
                _ => {}
            }
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Board {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NewGame => self.scene == Scene::Board && self.new_game(),
            InputAction::Navigate(direction) => {
                self.scene == Scene::Board && self.command(|g| g.move_selected(direction))
            }
            InputAction::MoveCard => {
                self.scene == Scene::Board && self.command(Game::move_selected_card)
            }
            InputAction::Shuffle => self.scene == Scene::Board && self.command(Game::shuffle),
            InputAction::Undo => self.scene == Scene::Board && self.command(Game::undo),
            InputAction::Quit => {
                self.game.quit();
                self.absorb_events();
                self.quit = true;
                true
            }
        }
    }

    pub fn new_game(&mut self) -> bool {
        self.help_open = false;
        self.command(Game::new_game)
    }

    /// Periodic work between key presses: advance the clock display and
    /// expire stale errors.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if let Some(secs) = self.clock.poll() {
            self.elapsed_secs = secs;
        }
    }

    /// Whether the game is over and waiting for a new deal.
    pub fn game_finished(&self) -> bool {
        self.game.status().is_over()
    }

    pub fn game_started(&self) -> bool {
        self.game.status() != GameStatus::NotStarted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> AppState {
        let settings = Settings { seed: Some(3), ..Settings::default() };
        let mut app = AppState::new(settings, None);
        app.apply_menu();
        app
    }

    #[test]
    fn board_commands_ignored_in_menu() {
        let mut app = AppState::default();
        assert!(!app.handle_input(InputAction::Shuffle));
        assert!(!app.handle_input(InputAction::NewGame));
        assert_eq!(app.game.status(), GameStatus::NotStarted);
    }

    #[test]
    fn applying_the_menu_deals_and_starts_the_clock() {
        let app = seeded();
        assert_eq!(app.scene, Scene::Board);
        assert!(app.game_started());
        assert!(app.clock.is_running() || app.game_finished());
        assert!(app.report().is_some());
    }

    #[test]
    fn undo_with_empty_history_reports_without_error() {
        let mut app = seeded();
        if app.game.status() != GameStatus::InProgress {
            return;
        }
        assert!(!app.handle_input(InputAction::Undo));
        assert_eq!(app.report(), Some("Nothing to undo."));
        assert_eq!(app.action_error(), None);
    }

    #[test]
    fn quit_stops_the_clock() {
        let mut app = seeded();
        assert!(app.handle_input(InputAction::Quit));
        assert!(app.should_quit());
        assert!(!app.clock.is_running());
    }
}

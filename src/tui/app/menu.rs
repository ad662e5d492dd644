use crate::game::{GameStatus, ShuffleLimit};

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Shuffles,
    HighlightMovable,
    HighlightCorrect,
}

const MENU_ITEMS: [MenuItem; 3] =
    [MenuItem::Shuffles, MenuItem::HighlightMovable, MenuItem::HighlightCorrect];

/// Largest finite limit offered before switching to unlimited.
const MAX_FINITE_SHUFFLES: u32 = 9;

fn on_off(flag: bool) -> &'static str {
    if flag {
        "On"
    } else {
        "Off"
    }
}

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Shuffles => format!("Shuffles: {}", app.cfg_shuffles),
            MenuItem::HighlightMovable => {
                format!("Highlight movable cards: {}", on_off(app.cfg_highlight_movable))
            }
            MenuItem::HighlightCorrect => {
                format!("Highlight fixed cards: {}", on_off(app.cfg_highlight_correct))
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Shuffles => {
                app.cfg_shuffles = match app.cfg_shuffles {
                    ShuffleLimit::Limited(n) if n >= MAX_FINITE_SHUFFLES => ShuffleLimit::Unlimited,
                    ShuffleLimit::Limited(n) => ShuffleLimit::Limited(n + 1),
                    ShuffleLimit::Unlimited => ShuffleLimit::Unlimited,
                };
            }
            MenuItem::HighlightMovable => app.cfg_highlight_movable = !app.cfg_highlight_movable,
            MenuItem::HighlightCorrect => app.cfg_highlight_correct = !app.cfg_highlight_correct,
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Shuffles => {
                app.cfg_shuffles = match app.cfg_shuffles {
                    ShuffleLimit::Unlimited => ShuffleLimit::Limited(MAX_FINITE_SHUFFLES),
                    ShuffleLimit::Limited(n) => ShuffleLimit::Limited(n.saturating_sub(1)),
                };
            }
            MenuItem::HighlightMovable => app.cfg_highlight_movable = !app.cfg_highlight_movable,
            MenuItem::HighlightCorrect => app.cfg_highlight_correct = !app.cfg_highlight_correct,
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Board,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_shuffles = self.settings.shuffles;
        self.cfg_highlight_movable = self.settings.highlight_movable;
        self.cfg_highlight_correct = self.settings.highlight_correct;
        self.scene = super::Scene::Menu;
    }

    /// Commit the edited settings, hand the engine its new config, persist
    /// when a settings file is known, and deal if no game has started.
    pub fn apply_menu(&mut self) {
        self.settings.shuffles = self.cfg_shuffles;
        self.settings.highlight_movable = self.cfg_highlight_movable;
        self.settings.highlight_correct = self.cfg_highlight_correct;

        let config = self.settings.game_config();
        let _ = self.command(|g| g.apply_config(config));

        if let Some(path) = self.settings_path() {
            if let Err(err) = self.settings.save(path) {
                log::warn!("could not save settings: {err}");
            }
        }

        self.scene = super::Scene::Board;
        if self.game.status() == GameStatus::NotStarted {
            self.new_game();
        }
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Board;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}

use crate::navigation::Direction;
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key to an action. Returns true when the app should exit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    let action = match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => Some(InputAction::MenuPrev),
            KeyCode::Down => Some(InputAction::MenuNext),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Some(InputAction::MenuInc),
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => Some(InputAction::MenuDec),
            KeyCode::Enter => Some(InputAction::MenuApply),
            KeyCode::Esc => Some(InputAction::MenuCancel),
            KeyCode::Char('m') | KeyCode::Char('M') => Some(InputAction::ToggleMenu),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputAction::Quit),
            _ => None,
        },
        Scene::Board => match code {
            KeyCode::Up | KeyCode::Char('k') => Some(InputAction::Navigate(Direction::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(InputAction::Navigate(Direction::Down)),
            KeyCode::Left | KeyCode::Char('h') => Some(InputAction::Navigate(Direction::Left)),
            KeyCode::Right | KeyCode::Char('l') => Some(InputAction::Navigate(Direction::Right)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::MoveCard),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(InputAction::Shuffle),
            KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => {
                Some(InputAction::Undo)
            }
            KeyCode::Char('n') | KeyCode::Char('N') => Some(InputAction::NewGame),
            KeyCode::Char('m') | KeyCode::Char('M') => Some(InputAction::ToggleMenu),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputAction::Quit),
            _ => None,
        },
    };

    if let Some(action) = action {
        let _ = app.handle_input(action);
    }
    app.should_quit()
}

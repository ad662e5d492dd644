use crate::game::GameStatus;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
    _       _     _ _      _   _
   / \   __| | __| (_) ___| |_(_) ___  _ __
  / _ \ / _` |/ _` | |/ __| __| |/ _ \| '_ \
 / ___ \ (_| | (_| | | (__| |_| | (_) | | | |
/_/   \_\__,_|\__,_|_|\___|\__|_|\___/|_| |_|
"#;

const HINT: &str = "[Enter] Apply  [Esc] Back  [↑/↓] Select  [+/-] Change  [Q] Quit";

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(80, 80, f.area());
    let title = format!("addiction-rs {}", crate::VERSION);
    f.render_widget(Clear, area);
    f.render_widget(Block::default().title(title).borders(Borders::ALL), area);

    let logo_lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::styled(l.to_string(), Style::default().fg(Color::Green)))
        .collect();
    let logo_height = logo_lines.len() as u16;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(logo_height + 1),
            Constraint::Min(4),
            Constraint::Length(2),
        ])
        .split(inner(area));

    f.render_widget(Paragraph::new(logo_lines).alignment(Alignment::Center), rows[0]);
    f.render_widget(
        Paragraph::new(settings_lines(app)).wrap(Wrap { trim: true }).alignment(Alignment::Center),
        rows[1],
    );
    f.render_widget(
        Paragraph::new(vec![
            Line::from(game_summary(app)),
            Line::styled(HINT, Style::default().add_modifier(Modifier::DIM)),
        ])
        .alignment(Alignment::Center),
        rows[2],
    );
}

fn settings_lines(app: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled("Settings", Style::default().add_modifier(Modifier::BOLD))];
    for (i, item) in app.menu_items_display().into_iter().enumerate() {
        lines.push(if i == app.menu_index {
            Line::styled(
                format!("› {item} ‹"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Line::from(item)
        });
    }
    if let Some(path) = app.settings_path() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("saved to {}", path.display()),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    lines
}

fn game_summary(app: &AppState) -> String {
    let game = &app.game;
    match game.status() {
        GameStatus::NotStarted => "Apply to deal the first game.".to_string(),
        GameStatus::InProgress => format!(
            "Game in progress: {} moves, {} shuffles used.",
            game.moves(),
            game.shuffles_used()
        ),
        GameStatus::Won => "Last game won.".to_string(),
        GameStatus::Lost => "Last game lost.".to_string(),
    }
}

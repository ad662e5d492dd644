use crate::board::{CellFlags, Point, COLS, ROWS};
use crate::cards::{Card, Face, Suit};
use crate::clock::format_elapsed;
use crate::game::GameStatus;
use crate::rules::WINNING_CORRECT;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, grid, inner};

pub(super) fn draw_board(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_height: u16 = 2 + 2;
    let status_height: u16 = 2 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(3 * ROWS as u16 + 2),
            Constraint::Length(status_height),
        ])
        .split(size);

    let game = &app.game;
    let shuffles_left = match game.shuffles_left() {
        Some(n) => n.to_string(),
        None => "∞".to_string(),
    };
    let undo = match game.history().last() {
        Some(entry) => format!("{} ({})", game.history().len(), entry.label()),
        None => "0".to_string(),
    };
    let header_lines = vec![
        Line::from(format!(
            "Moves: {}   Shuffles left: {}   Undo: {}   Time: {}",
            game.moves(),
            shuffles_left,
            undo,
            format_elapsed(app.elapsed_secs()),
        )),
        Line::from(format!(
            "Movable: {}   Fixed: {}/{}   {}",
            game.movable_count(),
            game.correct_count(),
            WINNING_CORRECT,
            status_label(game.status()),
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("addiction-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let board_area = chunks[1];
    f.render_widget(Block::default().title("Board").borders(Borders::ALL), board_area);
    let cells = grid(inner(board_area), ROWS, COLS);
    for (addr, area) in Point::all().zip(cells) {
        render_cell(f, area, game.board().card_at(addr), game.board().flags(addr), app);
    }

    let status_area = chunks[2];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner(status_area));

    let mut left_info = vec![Line::from(
        app.report().unwrap_or("Press N to deal a new game.").to_string(),
    )];
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);

    let right_keys = vec![
        Line::from("Enter move • S shuffle • U undo"),
        Line::from("N new • ? help • M menu • Q quit"),
    ];
    f.render_widget(Paragraph::new(right_keys).alignment(Alignment::Right), cols[1]);

    if app.help_open() {
        draw_help(f);
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::NotStarted => "Not started",
        GameStatus::InProgress => "In progress",
        GameStatus::Won => "Won",
        GameStatus::Lost => "Lost",
    }
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Goal:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("Build each row from 2 to K in one suit, leaving the last cell empty."),
        Line::from("A card moves into the gap right of its predecessor (same suit, one lower)."),
        Line::from("Twos move into an empty first column. Nothing follows a King."),
        Line::from(""),
        Line::from(Span::styled("Board:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Arrows / h j k l: select next movable card"),
        Line::from("- Enter / Space: move the selected card"),
        Line::from("- S: shuffle cards outside the fixed runs"),
        Line::from("- U / Backspace: undo"),
        Line::from("- N: new game"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    let glyph = match s {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Spades => '♠',
        Suit::Clubs => '♣',
    };
    let color = if s.is_red() { Color::Red } else { Color::White };
    (glyph, Style::default().fg(color))
}

fn face_label(face: Face) -> String {
    match face {
        Face::Ten => "10".to_string(),
        other => other.to_char().to_string(),
    }
}

fn render_cell(f: &mut Frame, area: Rect, card: Option<Card>, flags: CellFlags, app: &AppState) {
    let border = if flags.contains(CellFlags::SELECTED) {
        Some(Color::Yellow)
    } else if flags.contains(CellFlags::MOVABLE) && app.settings.highlight_movable {
        Some(Color::Green)
    } else if flags.contains(CellFlags::CORRECT) && app.settings.highlight_correct {
        Some(Color::Blue)
    } else {
        None
    };
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    f.render_widget(block, area);

    let content = match card {
        Some(c) => {
            let (glyph, mut style) = suit_glyph_and_style(c.suit());
            if flags.contains(CellFlags::SELECTED) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            Line::from(Span::styled(format!("{}{}", face_label(c.face()), glyph), style))
        }
        None => Line::from(Span::styled("·", Style::default().add_modifier(Modifier::DIM))),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner(area));
}

use ratatui::layout::Constraint;
use ratatui::prelude::{Layout, Rect};

/// Area inside a one-cell border.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(ratatui::prelude::Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(ratatui::prelude::Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Split `area` into `rows` x `cols` equal cells, row-major.
pub(super) fn grid(area: Rect, rows: usize, cols: usize) -> Vec<Rect> {
    let row_areas = Layout::default()
        .direction(ratatui::prelude::Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Ratio(1, rows as u32)).collect::<Vec<_>>())
        .split(area);
    row_areas
        .iter()
        .flat_map(|&row| {
            Layout::default()
                .direction(ratatui::prelude::Direction::Horizontal)
                .constraints(
                    (0..cols).map(|_| Constraint::Ratio(1, cols as u32)).collect::<Vec<_>>(),
                )
                .split(row)
                .to_vec()
        })
        .collect()
}

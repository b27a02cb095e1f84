use ratatui::layout::Constraint;
use ratatui::prelude::{Direction, Layout, Rect};

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
    let band = |dir: Direction, pct: u16, area: Rect| {
        Layout::default()
            .direction(dir)
            .constraints([
                Constraint::Percentage((100 - pct) / 2),
                Constraint::Percentage(pct),
                Constraint::Percentage((100 - pct) / 2),
            ])
            .split(area)[1]
    };
    band(Direction::Horizontal, percent_x, band(Direction::Vertical, percent_y, r))
}

/// Split `area` into `n` equal slots along `dir`.
pub(super) fn even_split(area: Rect, n: usize, dir: Direction) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let constraints = (0..n).map(|_| Constraint::Ratio(1, n as u32)).collect::<Vec<_>>();
    Layout::default().direction(dir).constraints(constraints).split(area).to_vec()
}

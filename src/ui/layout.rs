use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub title: Rect,
    pub input_box: Rect,
    pub error_banner: Rect,
    pub todo_list: Rect,
    pub status_bar: Rect,
}

/// Split the screen top to bottom. The error banner collapses to zero
/// height when there is nothing to show.
pub fn compute_layout(area: Rect, show_error: bool) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + gap
            Constraint::Length(3), // Add field
            Constraint::Length(if show_error { 3 } else { 0 }),
            Constraint::Min(3),    // List
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        title: chunks[0],
        input_box: chunks[1],
        error_banner: chunks[2],
        todo_list: chunks[3],
        status_bar: chunks[4],
    }
}

/// Center a `width` x `height` box inside `area`, shrinking to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_banner_collapses() {
        let area = Rect::new(0, 0, 80, 24);
        let hidden = compute_layout(area, false);
        assert_eq!(hidden.error_banner.height, 0);
        let shown = compute_layout(area, true);
        assert_eq!(shown.error_banner.height, 3);
        assert_eq!(hidden.todo_list.height, shown.todo_list.height + 3);
        assert_eq!(shown.status_bar.y, 23);
    }

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered(area, 100, 7);
        assert_eq!(r.width, 38);
        assert_eq!(r.height, 7);
        assert_eq!(r.x, 1);
        assert!(r.bottom() <= area.bottom());
    }
}

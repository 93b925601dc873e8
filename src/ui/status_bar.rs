use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    )];

    let hints: &[(&str, &str)] = if state.edit.is_open() {
        &[("Enter", "update"), ("Esc", "cancel")]
    } else {
        match state.focus {
            FocusPanel::Input => &[("Enter", "add"), ("Tab", "list"), ("^C", "quit")],
            FocusPanel::List => &[
                ("↑↓", "select"),
                ("e", "edit"),
                ("d", "delete"),
                ("Tab", "add"),
                ("q", "quit"),
            ],
        }
    };
    for (key, label) in hints {
        parts.push(Span::styled(
            format!(" {}", key),
            Theme::key_hint().bg(Theme::BORDER_DIM),
        ));
        parts.push(Span::styled(format!(" {} ", label), Theme::status_bar()));
    }

    // Focus indicator
    let focus_name = if state.edit.is_open() {
        "EDIT"
    } else {
        match state.focus {
            FocusPanel::Input => "INPUT",
            FocusPanel::List => "LIST",
        }
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BORDER_DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

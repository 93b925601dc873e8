mod edit_overlay;
mod input_box;
mod layout;
mod status_bar;
mod theme;
mod todo_list;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    // The overlay shows its own error line.
    let banner = state.error.is_some() && !state.edit.is_open();
    let app_layout = layout::compute_layout(area, banner);

    render_title(frame, app_layout.title, state);
    input_box::render(frame, app_layout.input_box, state);
    if banner {
        render_error_banner(frame, app_layout.error_banner, state);
    }
    todo_list::render(frame, app_layout.todo_list, state);
    status_bar::render(frame, app_layout.status_bar, state);
    edit_overlay::render(frame, state);
}

fn render_title(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = Paragraph::new(Span::styled(
        state.config.ui.title.as_str(),
        Theme::title(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, Rect::new(area.x, area.y, area.width, 1.min(area.height)));
}

fn render_error_banner(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(ref err) = state.error else {
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::ERROR_RED))
        .padding(Padding::horizontal(1))
        .style(Theme::error_banner());
    let line = Line::from(vec![
        Span::styled("Error! ", Theme::error_label()),
        Span::styled(err.message.as_str(), Theme::error_banner()),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::InputState;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(state: &AppState) -> String {
        screen_sized(state, 80, 20)
    }

    fn screen_sized(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_default_view() {
        let state = AppState::new(AppConfig::default());
        let text = screen(&state);
        assert!(text.contains("Welcome to your To-Do List!"));
        assert!(text.contains("Your current To-Do List"));
        assert!(text.contains("This is a default."));
        assert!(text.contains("Enter a to-do item"));
    }

    #[test]
    fn test_renders_empty_list_and_error() {
        let mut cfg = AppConfig::default();
        cfg.seed_items.clear();
        let mut state = AppState::new(cfg);
        assert!(screen(&state).contains("No to-do items."));

        let _ = state.submit_add();
        assert!(screen(&state).contains("Error! Please enter a to-do item."));
    }

    #[test]
    fn test_renders_edit_overlay() {
        let mut state = AppState::new(AppConfig::default());
        let id = state.todos.list()[0].id;
        state.open_edit(id);
        let text = screen(&state);
        assert!(text.contains("Edit to-do item"));
        assert!(text.contains("Update"));
    }

    #[test]
    fn test_very_long_input_scrolls() {
        let mut state = AppState::new(AppConfig::default());
        let text = format!("{}XYZ", "a".repeat(65534));
        state.input = InputState::with_text(&text);
        let screen = screen(&state);
        assert!(screen.contains("aaXYZ"));
        assert!(!screen.contains("Enter a to-do item"));
    }

    #[test]
    fn test_short_terminal_keeps_edit_field() {
        let mut state = AppState::new(AppConfig::default());
        let id = state.todos.list()[0].id;
        state.open_edit(id);
        state.active_input_mut().clear();
        let _ = state.confirm_edit();
        assert!(state.error.is_some());

        let text = screen_sized(&state, 80, 7);
        assert!(text.contains("Enter new to-do item"));
        assert!(text.contains("Error! Please enter a to-do item."));
    }
}

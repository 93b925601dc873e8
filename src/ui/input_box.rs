use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Prompt chevron drawn before the text.
const PROMPT: &str = "❯ ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Input && !state.edit.is_open();
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .title(" Add ")
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_field(
        frame,
        inner,
        &state.input,
        &state.config.ui.add_placeholder,
        focused,
    );
}

/// Draw a single-line field with its prompt, showing `placeholder` while
/// empty. Text wider than the field scrolls so the cursor stays visible.
/// Places the terminal cursor when `focused`.
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    input: &InputState,
    placeholder: &str,
    focused: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let prompt_width = PROMPT.width();
    let text_width = (area.width as usize).saturating_sub(prompt_width);
    let (visible, cursor_col) = visible_window(input, text_width);

    let body = if input.text.is_empty() {
        Span::styled(placeholder, Theme::placeholder())
    } else {
        Span::styled(visible, Theme::input_text())
    };
    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(Theme::ACCENT_TEAL)),
        body,
    ]);
    frame.render_widget(Paragraph::new(line), Rect::new(area.x, area.y, area.width, 1));

    if focused {
        let offset = (prompt_width + cursor_col).min(area.width as usize - 1);
        let cursor_x = area.x.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
        frame.set_cursor_position((cursor_x.min(area.right() - 1), area.y));
    }
}

/// The part of `input` that fits in `width` columns with the cursor in
/// view, and the cursor's column within that part.
pub fn visible_window(input: &InputState, width: usize) -> (&str, usize) {
    if width == 0 {
        return ("", 0);
    }
    let text = input.text.as_str();
    let before = input.cursor_column();
    // Keep one column free after the cursor.
    let skip = (before + 1).saturating_sub(width);

    let mut start = 0;
    let mut skipped = 0;
    for (i, c) in text[..input.cursor].char_indices() {
        if skipped >= skip {
            break;
        }
        skipped += c.width().unwrap_or(0);
        start = i + c.len_utf8();
    }

    let mut end = start;
    let mut used = 0;
    for (i, c) in text[start..].char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        end = start + i + c.len_utf8();
    }

    (&text[start..end], before - skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_not_scrolled() {
        let input = InputState::with_text("milk");
        assert_eq!(visible_window(&input, 20), ("milk", 4));
    }

    #[test]
    fn test_long_text_scrolls_to_cursor() {
        let input = InputState::with_text("abcdefghij");
        let (visible, col) = visible_window(&input, 5);
        assert_eq!(visible, "ghij");
        assert_eq!(col, 4);
    }

    #[test]
    fn test_cursor_at_start_shows_head() {
        let mut input = InputState::with_text("abcdefghij");
        input.move_home();
        assert_eq!(visible_window(&input, 5), ("abcde", 0));
    }

    #[test]
    fn test_wide_chars_fit_the_window() {
        let input = InputState::with_text("買い物リスト");
        let (visible, col) = visible_window(&input, 5);
        assert_eq!(visible, "スト");
        assert!(col < 5);
        assert!(visible.width() <= 5);
    }

    #[test]
    fn test_huge_text_cursor_stays_in_window() {
        let input = InputState::with_text(&"a".repeat(70_000));
        let (visible, col) = visible_window(&input, 76);
        assert_eq!(visible.len(), 75);
        assert_eq!(col, 75);
    }
}

use crate::app::state::*;
use crate::ui::input_box::render_field;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let EditOverlay::Editing { target, input } = &state.edit else {
        return;
    };
    let Some(item) = state.todos.get(*target) else {
        return;
    };

    let area = frame.area();
    let popup_w = ((u32::from(area.width) * 70 / 100) as u16).max(40);
    let popup_area = centered(area, popup_w, 8);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", state.config.ui.edit_title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let rows = overlay_rows(inner.height, state.error.is_some());
    for (i, row) in rows.iter().enumerate() {
        let y = match row {
            // Help sticks to the bottom edge
            OverlayRow::Help => inner.y + inner.height - 1,
            _ => inner.y + i as u16,
        };
        let line_area = Rect::new(inner.x, y, inner.width, 1);
        match row {
            OverlayRow::Heading => {
                let current = Paragraph::new(Span::styled(item.text.as_str(), Theme::heading()))
                    .alignment(Alignment::Center);
                frame.render_widget(current, line_area);
            }
            OverlayRow::Separator => {
                let sep = Paragraph::new(Span::styled(
                    "─".repeat(inner.width as usize),
                    Style::default().fg(Theme::BORDER_DIM),
                ));
                frame.render_widget(sep, line_area);
            }
            OverlayRow::Field => {
                render_field(
                    frame,
                    line_area,
                    input,
                    &state.config.ui.edit_placeholder,
                    true,
                );
            }
            OverlayRow::Error => {
                if let Some(ref err) = state.error {
                    let line = Line::from(vec![
                        Span::styled("Error! ", Theme::error_label()),
                        Span::styled(err.message.as_str(), Theme::error_banner()),
                    ]);
                    frame.render_widget(Paragraph::new(line), line_area);
                }
            }
            OverlayRow::Help => {
                let help = Line::from(vec![
                    Span::styled("Enter", Theme::key_hint()),
                    Span::styled(" Update  ", Theme::hint_text()),
                    Span::styled("Esc", Theme::key_hint()),
                    Span::styled(" Cancel", Theme::hint_text()),
                ]);
                frame.render_widget(Paragraph::new(help), line_area);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum OverlayRow {
    Heading,
    Separator,
    Field,
    Error,
    Help,
}

/// Rows to draw in a popup `height` rows tall, top to bottom. The field is
/// always kept; help goes first when space runs out, then the separator,
/// the heading and finally the error line.
fn overlay_rows(height: u16, has_error: bool) -> Vec<OverlayRow> {
    let mut rows = vec![OverlayRow::Heading, OverlayRow::Separator, OverlayRow::Field];
    if has_error {
        rows.push(OverlayRow::Error);
    }
    rows.push(OverlayRow::Help);

    for drop in [
        OverlayRow::Help,
        OverlayRow::Separator,
        OverlayRow::Heading,
        OverlayRow::Error,
    ] {
        if rows.len() <= height as usize {
            break;
        }
        rows.retain(|r| *r != drop);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::OverlayRow::*;

    #[test]
    fn test_full_height_keeps_everything() {
        assert_eq!(
            overlay_rows(6, true),
            vec![Heading, Separator, Field, Error, Help]
        );
        assert_eq!(overlay_rows(6, false), vec![Heading, Separator, Field, Help]);
    }

    #[test]
    fn test_help_dropped_before_error() {
        assert_eq!(overlay_rows(4, true), vec![Heading, Separator, Field, Error]);
        assert_eq!(overlay_rows(3, true), vec![Heading, Field, Error]);
    }

    #[test]
    fn test_field_always_kept() {
        assert_eq!(overlay_rows(2, true), vec![Field, Error]);
        assert_eq!(overlay_rows(1, true), vec![Field]);
        assert_eq!(overlay_rows(1, false), vec![Field]);
    }
}

use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::List && !state.edit.is_open();
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };
    let ui = &state.config.ui;

    let block = Block::default()
        .title(format!(" {} ", ui.list_heading))
        .title_alignment(Alignment::Center)
        .title_style(Theme::heading())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    if state.todos.is_empty() {
        let empty = Paragraph::new(Span::styled(ui.empty_text.as_str(), Theme::hint_text()))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .todos
        .list()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut spans = Vec::new();
            if ui.show_timestamps {
                spans.push(Span::styled(
                    format!(" {} ", item.timestamp(&ui.timestamp_format)),
                    Theme::timestamp(),
                ));
            }
            spans.push(Span::styled(format!(" {}", item.text), Theme::item_text()));
            if focused && i == state.selected {
                spans.push(Span::raw("  "));
                spans.push(Span::styled("[e]", Theme::key_hint()));
                spans.push(Span::styled(" Edit ", Theme::hint_text()));
                spans.push(Span::styled("[d]", Theme::key_hint()));
                spans.push(Span::styled(" Delete", Theme::hint_text()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let highlight = if focused {
        Theme::item_selected()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("▸");

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

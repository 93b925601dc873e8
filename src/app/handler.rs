use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::InputClosed { reason } => {
            warn!(%reason, "terminal input closed");
            vec![Action::Quit]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Edit overlay captures all input when open
    if state.edit.is_open() {
        return handle_edit_key(state, key);
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Input => handle_input_key(state, key),
        FocusPanel::List => handle_list_key(state, key),
    }
}

fn handle_edit_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            if state.confirm_edit().is_err() {
                return rejected(state);
            }
        }
        KeyCode::Esc => state.cancel_edit(),
        _ => edit_field(state, key),
    }
    vec![]
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            if state.submit_add().is_err() {
                return rejected(state);
            }
        }
        KeyCode::Esc => {
            if state.error.is_some() {
                state.dismiss_error();
            } else {
                state.cycle_focus();
            }
        }
        KeyCode::Down | KeyCode::Up => {
            state.focus = FocusPanel::List;
            state.dirty = true;
        }
        _ => edit_field(state, key),
    }
    vec![]
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Home | KeyCode::Char('g') => state.select_first(),
        KeyCode::End | KeyCode::Char('G') => state.select_last(),
        KeyCode::Enter | KeyCode::Char('e') => {
            state.open_edit_selected();
        }
        KeyCode::Delete | KeyCode::Char('d') => {
            state.delete_selected();
        }
        KeyCode::Esc | KeyCode::Char('a') | KeyCode::Char('i') => {
            state.focus = FocusPanel::Input;
            state.dirty = true;
        }
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn rejected(state: &AppState) -> Vec<Action> {
    if state.config.behavior.bell_on_error {
        vec![Action::Bell]
    } else {
        vec![]
    }
}

/// Route a key to whichever text field is active. Any change to the text
/// clears the error banner.
fn edit_field(state: &mut AppState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let input = state.active_input_mut();
    let changed = match key.code {
        KeyCode::Char('w') if ctrl => input.delete_word_back(),
        KeyCode::Char('u') if ctrl => input.clear(),
        KeyCode::Char(c) if !ctrl && !alt => {
            input.insert_char(c);
            true
        }
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_home();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    };
    if changed {
        state.input_changed();
    } else {
        state.dirty = true;
    }
}

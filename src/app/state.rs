use crate::config::AppConfig;
use crate::todo::{TodoError, TodoId, TodoItem, TodoList, ValidationError, Validator};
use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

/// Single-line text field with a byte-indexed cursor.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let next = self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len());
        self.text.drain(self.cursor..next);
        true
    }

    pub fn delete_word_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let before = &self.text[..self.cursor];
        let trimmed = before.trim_end_matches(' ');
        let start = trimmed.rfind(' ').map(|i| i + 1).unwrap_or(0);
        self.text.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.cursor = 0;
        true
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Terminal columns between the start of the field and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

/// Modal edit state. At most one item is edited at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditOverlay {
    #[default]
    Closed,
    Editing { target: TodoId, input: InputState },
}

impl EditOverlay {
    pub fn is_open(&self) -> bool {
        matches!(self, EditOverlay::Editing { .. })
    }

    pub fn target(&self) -> Option<TodoId> {
        match self {
            EditOverlay::Editing { target, .. } => Some(*target),
            EditOverlay::Closed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Input,
    List,
}

pub struct AppState {
    pub config: AppConfig,
    pub todos: TodoList,
    pub validator: Validator,
    pub input: InputState,
    pub edit: EditOverlay,
    pub error: Option<ValidationError>,
    pub focus: FocusPanel,
    pub selected: usize,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let validator = Validator::new(config.validation.clone());
        let todos = TodoList::seeded(config.seed_items.iter().cloned(), &validator);
        Self {
            config,
            todos,
            validator,
            input: InputState::new(),
            edit: EditOverlay::Closed,
            error: None,
            focus: FocusPanel::Input,
            selected: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Add the text in the add field to the list. On success the field is
    /// cleared and the new item selected; on failure the error is shown and
    /// the field is left as typed.
    pub fn submit_add(&mut self) -> Result<TodoId, TodoError> {
        self.dirty = true;
        match self.todos.add(&self.input.text, &self.validator) {
            Ok(id) => {
                self.input.take_text();
                self.error = None;
                self.selected = self.todos.len() - 1;
                if self.config.behavior.focus_list_after_add {
                    self.focus = FocusPanel::List;
                }
                info!(%id, count = self.todos.len(), "item added");
                Ok(id)
            }
            Err(e) => {
                info!(error = %e, "add rejected");
                self.error = Some(self.validator.error(e.clone()));
                Err(e)
            }
        }
    }

    /// Remove `id`. Closes the edit overlay if it targeted that item.
    pub fn delete(&mut self, id: TodoId) -> Option<TodoItem> {
        let removed = self.todos.remove(id)?;
        if self.edit.target() == Some(id) {
            self.edit = EditOverlay::Closed;
        }
        self.clamp_selection();
        self.dirty = true;
        info!(%id, count = self.todos.len(), "item deleted");
        Some(removed)
    }

    pub fn delete_selected(&mut self) -> Option<TodoItem> {
        let id = self.selected_id()?;
        self.delete(id)
    }

    /// Open the edit overlay on `id`, replacing any session already open.
    /// Returns false if there is no such item.
    pub fn open_edit(&mut self, id: TodoId) -> bool {
        let Some(item) = self.todos.get(id) else {
            debug!(%id, "edit requested for missing item");
            return false;
        };
        let input = if self.config.ui.prefill_edit {
            InputState::with_text(&item.text)
        } else {
            InputState::new()
        };
        self.edit = EditOverlay::Editing { target: id, input };
        self.error = None;
        self.dirty = true;
        debug!(%id, "edit opened");
        true
    }

    pub fn open_edit_selected(&mut self) -> bool {
        match self.selected_id() {
            Some(id) => self.open_edit(id),
            None => false,
        }
    }

    /// Apply the pending edit text and close the overlay. When edits are
    /// validated and the text is rejected, the overlay stays open.
    pub fn confirm_edit(&mut self) -> Result<(), TodoError> {
        let EditOverlay::Editing { target, input } =
            std::mem::replace(&mut self.edit, EditOverlay::Closed)
        else {
            return Ok(());
        };
        self.dirty = true;

        let text = if self.validator.validates_edits() {
            match self.validator.check(&self.todos, &input.text, Some(target)) {
                Ok(text) => text,
                Err(e) => {
                    info!(%target, error = %e, "edit rejected");
                    self.error = Some(self.validator.error(e.clone()));
                    self.edit = EditOverlay::Editing { target, input };
                    return Err(e);
                }
            }
        } else {
            self.validator.normalize(&input.text)
        };

        match self.todos.update(target, text) {
            Ok(()) => {
                self.error = None;
                info!(%target, "item updated");
                Ok(())
            }
            Err(e) => {
                self.error = Some(self.validator.error(e.clone()));
                Err(e)
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.edit.target() {
            debug!(%id, "edit cancelled");
        }
        self.edit = EditOverlay::Closed;
        self.error = None;
        self.dirty = true;
    }

    /// The field being typed into: the overlay's while it is open, the add
    /// field otherwise.
    pub fn active_input_mut(&mut self) -> &mut InputState {
        match &mut self.edit {
            EditOverlay::Editing { input, .. } => input,
            EditOverlay::Closed => &mut self.input,
        }
    }

    /// Called on every keystroke that changes a field's text.
    pub fn input_changed(&mut self) {
        self.error = None;
        self.dirty = true;
    }

    pub fn dismiss_error(&mut self) {
        if self.error.take().is_some() {
            self.dirty = true;
        }
    }

    pub fn selected_id(&self) -> Option<TodoId> {
        self.todos.list().get(self.selected).map(|i| i.id)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.todos.len() {
            self.selected += 1;
            self.dirty = true;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.dirty = true;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.dirty = true;
    }

    pub fn select_last(&mut self) {
        self.selected = self.todos.len().saturating_sub(1);
        self.dirty = true;
    }

    fn clamp_selection(&mut self) {
        let len = self.todos.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::List,
            FocusPanel::List => FocusPanel::Input,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        match self.todos.len() {
            1 => "1 item".to_string(),
            n => format!("{} items", n),
        }
    }
}

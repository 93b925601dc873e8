use super::item::{TodoId, TodoItem};
use super::validate::Validator;
use super::TodoError;
use tracing::debug;

/// Ordered, in-memory list of to-do items. Insertion order is display order.
#[derive(Debug, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from seed texts. Seeds the validator rejects are skipped.
    pub fn seeded<I, S>(texts: I, validator: &Validator) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for text in texts {
            let text = text.into();
            if let Err(e) = list.add(text.as_str(), validator) {
                debug!(text = %text, error = %e, "seed item skipped");
            }
        }
        list
    }

    fn allocate_id(&mut self) -> TodoId {
        let id = TodoId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append `text` after running it through `validator`. Returns the id
    /// of the new item, which is always last.
    pub fn add(&mut self, text: &str, validator: &Validator) -> Result<TodoId, TodoError> {
        let text = validator.check(self, text, None)?;
        let id = self.allocate_id();
        debug!(%id, text = %text, "todo added");
        self.items.push(TodoItem::new(id, text));
        Ok(id)
    }

    /// Remove the item with `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: TodoId) -> Option<TodoItem> {
        let idx = self.position(id)?;
        debug!(%id, "todo removed");
        Some(self.items.remove(idx))
    }

    /// Replace the text of `id` in place. No validation happens here.
    pub fn update(&mut self, id: TodoId, text: impl Into<String>) -> Result<(), TodoError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(TodoError::NotFound(id))?;
        item.text = text.into();
        debug!(%id, text = %item.text, "todo updated");
        Ok(())
    }

    pub fn list(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether some item other than `except` already carries `text`.
    pub fn contains_text(&self, text: &str, except: Option<TodoId>) -> bool {
        self.items
            .iter()
            .any(|i| Some(i.id) != except && i.text == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &TodoList) -> Vec<&str> {
        list.list().iter().map(|i| i.text.as_str()).collect()
    }

    fn seeded(texts: &[&str]) -> TodoList {
        TodoList::seeded(texts.iter().copied(), &Validator::default())
    }

    #[test]
    fn test_add_appends_in_order() {
        let v = Validator::default();
        let mut list = seeded(&["This is a default."]);
        let id = list.add("Buy milk", &v).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.list().last().map(|i| i.id), Some(id));
        assert_eq!(texts(&list), vec!["This is a default.", "Buy milk"]);
    }

    #[test]
    fn test_add_rejects_empty_and_duplicate() {
        let v = Validator::default();
        let mut list = seeded(&["This is a default."]);
        list.add("Buy milk", &v).unwrap();

        assert_eq!(list.add("", &v), Err(TodoError::EmptyInput));
        assert_eq!(list.add("   ", &v), Err(TodoError::EmptyInput));
        assert_eq!(list.add("Buy milk", &v), Err(TodoError::DuplicateItem));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_only_matching_item() {
        let v = Validator::default();
        let mut list = TodoList::new();
        let a = list.add("a", &v).unwrap();
        let b = list.add("b", &v).unwrap();
        let c = list.add("c", &v).unwrap();

        let removed = list.remove(b).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(texts(&list), vec!["a", "c"]);
        assert!(list.get(a).is_some());
        assert!(list.get(c).is_some());

        assert!(list.remove(b).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let v = Validator::default();
        let mut list = TodoList::new();
        list.add("first", &v).unwrap();
        let id = list.add("second", &v).unwrap();
        list.add("third", &v).unwrap();

        list.update(id, "changed").unwrap();
        assert_eq!(list.position(id), Some(1));
        assert_eq!(list.get(id).map(|i| i.text.as_str()), Some("changed"));
        assert_eq!(texts(&list), vec!["first", "changed", "third"]);
    }

    #[test]
    fn test_update_missing_id() {
        let v = Validator::default();
        let mut list = TodoList::new();
        let id = list.add("gone", &v).unwrap();
        list.remove(id);
        assert_eq!(list.update(id, "x"), Err(TodoError::NotFound(id)));
    }

    #[test]
    fn test_ids_not_reused() {
        let v = Validator::default();
        let mut list = TodoList::new();
        let a = list.add("a", &v).unwrap();
        list.remove(a);
        let b = list.add("a", &v).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_seed_skips_invalid() {
        let list = seeded(&["one", "", "one", "two"]);
        assert_eq!(texts(&list), vec!["one", "two"]);
    }

    #[test]
    fn test_contains_text_excludes_self() {
        let v = Validator::default();
        let mut list = TodoList::new();
        let id = list.add("same", &v).unwrap();
        assert!(list.contains_text("same", None));
        assert!(!list.contains_text("same", Some(id)));
    }
}

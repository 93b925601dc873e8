use chrono::{DateTime, Local};
use std::fmt;

/// Identifier of a to-do item. Allocated by [`TodoList`](super::TodoList)
/// from a counter and never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(u64);

impl TodoId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub created_at: DateTime<Local>,
}

impl TodoItem {
    pub fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            created_at: Local::now(),
        }
    }

    pub fn timestamp(&self, format: &str) -> String {
        self.created_at.format(format).to_string()
    }
}

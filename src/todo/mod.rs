//! To-do domain: items, the ordered list that owns them, and validation of
//! user-entered text.

pub mod item;
pub mod store;
pub mod validate;

pub use item::{TodoId, TodoItem};
pub use store::TodoList;
pub use validate::{ValidationError, Validator};

use thiserror::Error;

/// Errors raised by list mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Please enter a to-do item.")]
    EmptyInput,
    #[error("This to-do item already exists.")]
    DuplicateItem,
    #[error("No to-do item with id {0}")]
    NotFound(TodoId),
}

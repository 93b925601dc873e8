use super::item::TodoId;
use super::store::TodoList;
use super::TodoError;
use crate::config::ValidationConfig;

/// User-facing validation failure shown in the error banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: TodoError,
    pub message: String,
}

/// Applies the configured rules to text entered in the add or edit field.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn validates_edits(&self) -> bool {
        self.config.validate_on_edit
    }

    /// Normalize `text` and check it against `list`. `except` excludes the
    /// item being edited from the duplicate check. Returns the text to store.
    pub fn check(
        &self,
        list: &TodoList,
        text: &str,
        except: Option<TodoId>,
    ) -> Result<String, TodoError> {
        let text = self.normalize(text);
        if self.config.reject_empty && text.trim().is_empty() {
            return Err(TodoError::EmptyInput);
        }
        if self.config.reject_duplicates && list.contains_text(&text, except) {
            return Err(TodoError::DuplicateItem);
        }
        Ok(text)
    }

    pub fn normalize(&self, text: &str) -> String {
        if self.config.trim_input {
            text.trim().to_string()
        } else {
            text.to_string()
        }
    }

    /// Attach the configured wording to a rejection.
    pub fn error(&self, kind: TodoError) -> ValidationError {
        let message = match kind {
            TodoError::EmptyInput => self.config.empty_message.clone(),
            TodoError::DuplicateItem => self.config.duplicate_message.clone(),
            TodoError::NotFound(_) => kind.to_string(),
        };
        ValidationError { kind, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages() {
        let v = Validator::default();
        assert_eq!(
            v.error(TodoError::EmptyInput).message,
            "Please enter a to-do item."
        );
        assert_eq!(
            v.error(TodoError::DuplicateItem).message,
            "This to-do item already exists."
        );
    }

    #[test]
    fn test_trims_before_duplicate_check() {
        let v = Validator::default();
        let list = TodoList::seeded(["Buy milk"], &v);
        assert_eq!(
            v.check(&list, "  Buy milk  ", None),
            Err(TodoError::DuplicateItem)
        );
        assert_eq!(v.check(&list, " Eggs ", None), Ok("Eggs".to_string()));
    }

    #[test]
    fn test_duplicate_is_case_sensitive() {
        let v = Validator::default();
        let list = TodoList::seeded(["Buy milk"], &v);
        assert!(v.check(&list, "buy milk", None).is_ok());
    }

    #[test]
    fn test_rules_can_be_disabled() {
        let v = Validator::new(ValidationConfig {
            reject_empty: false,
            reject_duplicates: false,
            trim_input: false,
            ..ValidationConfig::default()
        });
        let list = TodoList::seeded(["x"], &v);
        assert_eq!(v.check(&list, "", None), Ok(String::new()));
        assert_eq!(v.check(&list, "x", None), Ok("x".to_string()));
        assert_eq!(v.check(&list, " x ", None), Ok(" x ".to_string()));
    }

    #[test]
    fn test_custom_message() {
        let v = Validator::new(ValidationConfig {
            duplicate_message: "Already on the list".into(),
            ..ValidationConfig::default()
        });
        let err = v.error(TodoError::DuplicateItem);
        assert_eq!(err.kind, TodoError::DuplicateItem);
        assert_eq!(err.message, "Already on the list");
    }
}

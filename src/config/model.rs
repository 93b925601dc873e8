//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Items present when the application starts.
    #[serde(default = "default_seed_items")]
    pub seed_items: Vec<String>,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_items: default_seed_items(),
            ui: UiConfig::default(),
            validation: ValidationConfig::default(),
            behavior: BehaviorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Wording and appearance of the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_list_heading")]
    pub list_heading: String,
    #[serde(default = "default_empty_text")]
    pub empty_text: String,
    #[serde(default = "default_add_placeholder")]
    pub add_placeholder: String,
    #[serde(default = "default_edit_title")]
    pub edit_title: String,
    #[serde(default = "default_edit_placeholder")]
    pub edit_placeholder: String,
    /// Start the edit field with the item's current text.
    #[serde(default = "default_true")]
    pub prefill_edit: bool,
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            list_heading: default_list_heading(),
            empty_text: default_empty_text(),
            add_placeholder: default_add_placeholder(),
            edit_title: default_edit_title(),
            edit_placeholder: default_edit_placeholder(),
            prefill_edit: true,
            show_timestamps: true,
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Rules applied to entered text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_true")]
    pub reject_empty: bool,
    #[serde(default = "default_true")]
    pub reject_duplicates: bool,
    /// Strip surrounding whitespace before checking and storing.
    #[serde(default = "default_true")]
    pub trim_input: bool,
    /// Apply the add rules to edits too.
    #[serde(default = "default_true")]
    pub validate_on_edit: bool,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    #[serde(default = "default_duplicate_message")]
    pub duplicate_message: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reject_empty: true,
            reject_duplicates: true,
            trim_input: true,
            validate_on_edit: true,
            empty_message: default_empty_message(),
            duplicate_message: default_duplicate_message(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Ring the terminal bell when an entry is rejected.
    #[serde(default)]
    pub bell_on_error: bool,
    /// Move focus to the list after a successful add.
    #[serde(default)]
    pub focus_list_after_add: bool,
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs only
/// ever go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_seed_items() -> Vec<String> {
    vec!["This is a default.".to_string()]
}
fn default_true() -> bool {
    true
}
fn default_title() -> String {
    "Welcome to your To-Do List!".to_string()
}
fn default_list_heading() -> String {
    "Your current To-Do List".to_string()
}
fn default_empty_text() -> String {
    "No to-do items.".to_string()
}
fn default_add_placeholder() -> String {
    "Enter a to-do item".to_string()
}
fn default_edit_title() -> String {
    "Edit to-do item".to_string()
}
fn default_edit_placeholder() -> String {
    "Enter new to-do item".to_string()
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_empty_message() -> String {
    "Please enter a to-do item.".to_string()
}
fn default_duplicate_message() -> String {
    "This to-do item already exists.".to_string()
}
fn default_log_file() -> String {
    "~/.local/share/crabtodo/crabtodo.log".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.seed_items, vec!["This is a default.".to_string()]);
        assert_eq!(cfg.ui.title, "Welcome to your To-Do List!");
        assert!(cfg.validation.validate_on_edit);
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_tables() {
        let cfg: AppConfig = toml::from_str(
            r#"
            seed_items = []

            [validation]
            validate_on_edit = false
            duplicate_message = "Dupe!"

            [ui]
            show_timestamps = false
            "#,
        )
        .unwrap();
        assert!(cfg.seed_items.is_empty());
        assert!(!cfg.validation.validate_on_edit);
        assert!(cfg.validation.reject_empty);
        assert_eq!(cfg.validation.duplicate_message, "Dupe!");
        assert!(!cfg.ui.show_timestamps);
        assert_eq!(cfg.ui.timestamp_format, "%H:%M");
    }

    #[test]
    fn test_round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.ui.edit_placeholder, cfg.ui.edit_placeholder);
        assert_eq!(back.logging.level, "info");
    }
}

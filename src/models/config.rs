//! Editor configuration
//!
//! Supplied by JavaScript as a plain object. Every field is optional; missing
//! fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::format::{FormatCommand, FormatSpec};

/// Text the editor opens with when no initial text is configured
pub const WELCOME_TEXT: &str = "Welcome to the editor!\n\nSelect some text and press Bold, Italic or Heading, or just start typing. Undo and Redo walk through your changes.";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    /// Buffer content at initialization (also the undo floor)
    pub initial_text: String,
    pub bold: FormatSpec,
    pub italic: FormatSpec,
    /// Heading spec; its prefix is the line-start form
    pub heading: FormatSpec,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_text: WELCOME_TEXT.to_string(),
            bold: FormatSpec::bold(),
            italic: FormatSpec::italic(),
            heading: FormatSpec::heading(),
        }
    }
}

impl EditorConfig {
    /// Config with the default format table and custom initial text
    pub fn with_initial_text(text: impl Into<String>) -> Self {
        Self {
            initial_text: text.into(),
            ..Self::default()
        }
    }

    pub fn spec(&self, command: FormatCommand) -> &FormatSpec {
        match command {
            FormatCommand::Bold => &self.bold,
            FormatCommand::Italic => &self.italic,
            FormatCommand::Heading => &self.heading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_table() {
        let config = EditorConfig::default();
        assert_eq!(config.initial_text, WELCOME_TEXT);
        assert_eq!(config.spec(FormatCommand::Bold).prefix, "**");
        assert_eq!(config.spec(FormatCommand::Italic).default_text, "Italic text");
        assert_eq!(config.spec(FormatCommand::Heading).suffix, "");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{ "initial_text": "Draft" }"#).unwrap();
        assert_eq!(config.initial_text, "Draft");
        assert_eq!(config.bold, FormatSpec::bold());
    }

    #[test]
    fn test_format_override() {
        let json = r#"{
            "bold": { "prefix": "__", "suffix": "__", "default_text": "strong" }
        }"#;
        let config: EditorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.bold.prefix, "__");
        assert_eq!(config.initial_text, WELCOME_TEXT);
    }
}

//! JavaScript-facing editor class
//!
//! The page owns the textarea and the toolbar buttons; it forwards input and
//! selection events here and applies whatever [`EditOutcome`] comes back,
//! including the optional focus request.

use std::str::FromStr;

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize_or_default, serialize, to_js_error};
use crate::format::FormatCommand;
use crate::models::{EditOutcome, EditorConfig, EditorState, WELCOME_TEXT};

/// One editor instance, exported to JavaScript as `MarkdownEditor`
#[wasm_bindgen]
pub struct MarkdownEditor {
    state: EditorState,
}

#[wasm_bindgen]
impl MarkdownEditor {
    /// Create an editor
    ///
    /// `config` is an optional plain object (`initial_text`, `bold`,
    /// `italic`, `heading`); missing fields use the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<MarkdownEditor, JsValue> {
        let config: EditorConfig =
            deserialize_or_default(config, "Failed to read editor config").map_err(to_js_error)?;
        Ok(Self {
            state: EditorState::new(config),
        })
    }

    /// Forward the textarea's new content
    #[wasm_bindgen(js_name = onTextChange)]
    pub fn on_text_change(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let outcome = self.state.on_text_change(text);
        outcome_to_js(&outcome)
    }

    /// Forward `selectionStart`/`selectionEnd`
    #[wasm_bindgen(js_name = setSelection)]
    pub fn set_selection(&mut self, start: usize, end: usize) -> Result<JsValue, JsValue> {
        let selection = self.state.set_selection(start, end);
        serialize(&selection, "Failed to serialize selection")
    }

    #[wasm_bindgen(js_name = applyBold)]
    pub fn apply_bold(&mut self) -> Result<JsValue, JsValue> {
        self.format(FormatCommand::Bold)
    }

    #[wasm_bindgen(js_name = applyItalic)]
    pub fn apply_italic(&mut self) -> Result<JsValue, JsValue> {
        self.format(FormatCommand::Italic)
    }

    #[wasm_bindgen(js_name = applyHeading)]
    pub fn apply_heading(&mut self) -> Result<JsValue, JsValue> {
        self.format(FormatCommand::Heading)
    }

    /// Apply a format by name (`"bold"`, `"italic"` or `"heading"`)
    #[wasm_bindgen(js_name = applyFormat)]
    pub fn apply_format(&mut self, name: &str) -> Result<JsValue, JsValue> {
        let command = FormatCommand::from_str(name).map_err(to_js_error)?;
        self.format(command)
    }

    pub fn undo(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.state.undo();
        outcome_to_js(&outcome)
    }

    pub fn redo(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.state.redo();
        outcome_to_js(&outcome)
    }

    #[wasm_bindgen(js_name = clearHistory)]
    pub fn clear_history(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.state.clear_history();
        outcome_to_js(&outcome)
    }

    #[wasm_bindgen(getter, js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    #[wasm_bindgen(getter, js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.state.text().to_string()
    }

    #[wasm_bindgen(js_name = getSelection)]
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        serialize(&self.state.selection(), "Failed to serialize selection")
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.state.status()
    }

    /// Pretty-printed JSON of the editor state, for diagnostics
    #[wasm_bindgen(js_name = exportState)]
    pub fn export_state(&self) -> Result<String, JsValue> {
        self.state.snapshot().to_json().map_err(to_js_error)
    }
}

impl MarkdownEditor {
    fn format(&mut self, command: FormatCommand) -> Result<JsValue, JsValue> {
        let outcome = self.state.apply_format(command).map_err(to_js_error)?;
        outcome_to_js(&outcome)
    }
}

fn outcome_to_js(outcome: &EditOutcome) -> Result<JsValue, JsValue> {
    serialize(outcome, "Failed to serialize edit outcome")
}

/// The text a default-configured editor opens with
#[wasm_bindgen(js_name = defaultWelcomeText)]
pub fn default_welcome_text() -> String {
    WELCOME_TEXT.to_string()
}

/// Change the console log level (`"error"` through `"trace"`, or `"off"`)
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = log::LevelFilter::from_str(level)
        .map_err(|_| js_sys::Error::new(&format!("Unknown log level: '{}'", level)))?;
    log::set_max_level(filter);
    log::info!("Log level set to {}", filter);
    Ok(())
}

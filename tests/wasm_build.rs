//! WASM build test
//!
//! Exercises the JavaScript-facing `MarkdownEditor` class in a browser.
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use markdown_editor_wasm::api::{default_welcome_text, set_log_level};
use markdown_editor_wasm::models::EditOutcome;
use markdown_editor_wasm::MarkdownEditor;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn outcome(value: JsValue) -> EditOutcome {
    serde_wasm_bindgen::from_value(value).unwrap()
}

fn editor_with(text: &str) -> MarkdownEditor {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"initial_text".into(), &text.into()).unwrap();
    MarkdownEditor::new(config.into()).unwrap()
}

#[wasm_bindgen_test]
fn test_editor_creation_with_defaults() {
    let editor = MarkdownEditor::new(JsValue::UNDEFINED).unwrap();
    assert_eq!(editor.text(), default_welcome_text());
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
}

#[wasm_bindgen_test]
fn test_bold_through_js_api() {
    let mut editor = editor_with("abc");
    editor.set_selection(3, 3).unwrap();

    let result = outcome(editor.apply_bold().unwrap());
    assert_eq!(result.text, "abc**Bold text**");
    assert_eq!(result.selection.start, 16);
    assert!(result.focus.is_some());
}

#[wasm_bindgen_test]
fn test_apply_format_by_name() {
    let mut editor = editor_with("abcdef");
    editor.set_selection(0, 3).unwrap();
    editor.apply_format("italic").unwrap();
    assert_eq!(editor.text(), "_abc_def");

    assert!(editor.apply_format("strike").is_err());
    assert_eq!(editor.text(), "_abc_def");
}

#[wasm_bindgen_test]
fn test_undo_redo_through_js_api() {
    let mut editor = editor_with("C1");
    editor.on_text_change("C2").unwrap();
    assert!(editor.can_undo());

    editor.undo().unwrap();
    assert_eq!(editor.text(), "C1");
    assert!(editor.can_redo());

    editor.redo().unwrap();
    assert_eq!(editor.text(), "C2");

    editor.clear_history().unwrap();
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
    assert_eq!(editor.status(), "History cleared | Undo stack: 1 | Redo stack: 0");
}

#[wasm_bindgen_test]
fn test_invalid_config_is_rejected() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"initial_text".into(), &JsValue::from_f64(3.0)).unwrap();
    assert!(MarkdownEditor::new(config.into()).is_err());
}

#[wasm_bindgen_test]
fn test_export_state_is_json() {
    let editor = editor_with("x");
    let json = editor.export_state().unwrap();
    assert!(json.contains("\"text\": \"x\""));
}

#[wasm_bindgen_test]
fn test_set_log_level() {
    assert!(set_log_level("warn").is_ok());
    assert!(set_log_level("loud").is_err());
}

//! Unit tests for errors, diagnostics and the outline formatter.
mod common;
use common::*;
use screenflow::compiler::DiagnosticKind;
use screenflow::prelude::*;

#[test]
fn test_error_display() {
    let err = ConversionError::UnexpectedOptions {
        item_id: "1-2".to_string(),
        kind: "paragraph".to_string(),
    };
    assert!(err.to_string().contains("1-2"));
    assert!(err.to_string().contains("paragraph"));

    let parse_err = ConversionError::JsonParseError("EOF while parsing".to_string());
    assert!(parse_err.to_string().contains("EOF while parsing"));

    let io_err = ExportError::Io {
        path: "out.json".to_string(),
        message: "permission denied".to_string(),
    };
    assert!(io_err.to_string().contains("out.json"));
    assert!(io_err.to_string().contains("permission denied"));
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic {
        screen_index: 2,
        content_index: 5,
        item_id: "3-6".to_string(),
        kind: DiagnosticKind::UnsupportedContent {
            kind: "video".to_string(),
        },
    };
    let text = diagnostic.to_string();
    assert!(text.contains("screen 2"));
    assert!(text.contains("item 5"));
    assert!(text.contains("'3-6'"));
    assert!(text.contains("'video'"));
}

#[test]
fn test_outline_of_two_screen_flow() {
    let output = compile(&create_two_screen_flow());
    let outline = FlowOutline::new(&output).to_string();
    assert_eq!(
        outline,
        "flow (schema 6.0)\n\
         \x20 SCREEN_0 \"Feedback\" -> SCREEN_1 [fields: screen_0_Recommend__1, screen_0_Why__2]\n\
         \x20 SCREEN_1 \"Thanks\" (terminal) [fields: -]\n"
    );
}

#[test]
fn test_outline_of_empty_flow() {
    let output = compile(&FlowDocument::default());
    assert_eq!(
        FlowOutline::new(&output).to_string(),
        "flow (schema 6.0)\n  <no screens>\n"
    );
}

#[test]
fn test_content_item_accessors() {
    let item = ContentItem::Selection {
        id: "1-2".to_string(),
        heading: "Choose".to_string(),
        options: vec![],
    };
    assert_eq!(item.id(), "1-2");
    assert_eq!(item.heading(), "Choose");
    assert_eq!(item.kind_name(), "selection");
    assert!(item.is_field_bearing());

    let heading = ContentItem::LargeHeading {
        id: "1-1".to_string(),
        heading: "Hello".to_string(),
    };
    assert!(!heading.is_field_bearing());

    let unknown = ContentItem::Unsupported {
        id: "1-3".to_string(),
        heading: "Upload".to_string(),
        kind: "file".to_string(),
    };
    assert!(!unknown.is_field_bearing());
    assert_eq!(unknown.kind_name(), "file");
}

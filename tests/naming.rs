//! Tests for field-name synthesis and global name uniqueness.
mod common;
use common::*;
use screenflow::compiler::naming::{field_name, option_id, sanitize_heading};
use screenflow::prelude::*;
use std::collections::HashSet;

#[test]
fn test_sanitize_replaces_every_non_letter() {
    assert_eq!(sanitize_heading("Recommend?"), "Recommend_");
    assert_eq!(sanitize_heading("E-mail address"), "E_mail_address");
    assert_eq!(sanitize_heading("Step 2"), "Step__");
    assert_eq!(sanitize_heading("?!."), "___");
    assert_eq!(sanitize_heading(""), "");
}

#[test]
fn test_sanitize_treats_non_ascii_letters_as_punctuation() {
    // One underscore per character
    assert_eq!(sanitize_heading("Qué"), "Qu_");
    assert_eq!(sanitize_heading("¿Sí?"), "_S__");
}

#[test]
fn test_field_name_format() {
    assert_eq!(field_name(0, 0, "Recommend?"), "screen_0_Recommend__0");
    assert_eq!(field_name(3, 12, "Your name"), "screen_3_Your_name_12");
    assert_eq!(field_name(1, 2, ""), "screen_1__2");
}

#[test]
fn test_option_id_format() {
    assert_eq!(option_id(0, 1, 0), "0_1_0");
    assert_eq!(option_id(10, 2, 7), "10_2_7");
}

#[test]
fn test_recommend_heading_produces_expected_field_name() {
    let flow = FlowDocument::new(vec![Screen::new("1", "Survey").with_content(
        ContentItem::ShortAnswer {
            id: "1-1".to_string(),
            heading: "Recommend?".to_string(),
            placeholder: None,
        },
    )]);

    let output = compile(&flow);
    assert_eq!(output.field_names(), vec!["screen_0_Recommend__0"]);
}

#[test]
fn test_colliding_headings_stay_unique() {
    let duplicate = |id: &str, heading: &str| ContentItem::ShortAnswer {
        id: id.to_string(),
        heading: heading.to_string(),
        placeholder: None,
    };
    // "Name?" and "Name!" sanitize to the same text; blank headings sanitize to nothing.
    let flow = FlowDocument::new(vec![
        Screen::new("1", "One")
            .with_content(duplicate("1-1", "Name?"))
            .with_content(duplicate("1-2", "Name!"))
            .with_content(duplicate("1-3", ""))
            .with_content(duplicate("1-4", "")),
        Screen::new("2", "Two")
            .with_content(duplicate("2-1", "Name?"))
            .with_content(duplicate("2-2", "")),
    ]);

    let output = compile(&flow);
    let names = output.field_names();
    assert_eq!(
        names,
        vec![
            "screen_0_Name__0",
            "screen_0_Name__1",
            "screen_0__2",
            "screen_0__3",
            "screen_1_Name__0",
            "screen_1__1",
        ]
    );
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn test_field_names_unique_across_larger_document() {
    let output = compile(&create_linear_flow(25));
    let names = output.field_names();
    assert_eq!(names.len(), 25);
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), 25);
    assert_eq!(names[24], "screen_24_Answer_0");
}

#[test]
fn test_non_field_items_still_consume_content_indices() {
    let output = compile(&create_two_screen_flow());
    // Index 0 is a heading, so the selection is index 1 and the paragraph index 2.
    assert_eq!(
        output.field_names(),
        vec!["screen_0_Recommend__1", "screen_0_Why__2"]
    );
}

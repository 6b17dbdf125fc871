//! Common test utilities for building flow documents and editor JSON.
use screenflow::prelude::*;

/// Creates a single-screen flow with one of every field-bearing kind.
///
/// Layout: heading, short answer, paragraph, date picker, selection `["Yes", "No"]`.
#[allow(dead_code)]
pub fn create_single_screen_flow() -> FlowDocument {
    FlowDocument {
        screens: vec![Screen {
            id: "1".to_string(),
            title: "About you".to_string(),
            content: vec![
                ContentItem::LargeHeading {
                    id: "1-1".to_string(),
                    heading: "Tell us about yourself".to_string(),
                },
                ContentItem::ShortAnswer {
                    id: "1-2".to_string(),
                    heading: "Name".to_string(),
                    placeholder: Some("Enter text".to_string()),
                },
                ContentItem::Paragraph {
                    id: "1-3".to_string(),
                    heading: "Bio".to_string(),
                    placeholder: Some("A few words".to_string()),
                },
                ContentItem::DatePicker {
                    id: "1-4".to_string(),
                    heading: "Birthday".to_string(),
                },
                ContentItem::Selection {
                    id: "1-5".to_string(),
                    heading: "Subscribe".to_string(),
                    options: vec!["Yes".to_string(), "No".to_string()],
                },
            ],
        }],
    }
}

/// Creates a two-screen feedback flow.
///
/// Screen 0: small heading, selection "Recommend?" `["Yes", "No"]`, paragraph "Why?".
/// Screen 1: large heading only.
#[allow(dead_code)]
pub fn create_two_screen_flow() -> FlowDocument {
    FlowDocument {
        screens: vec![
            Screen {
                id: "1".to_string(),
                title: "Feedback".to_string(),
                content: vec![
                    ContentItem::SmallHeading {
                        id: "1-1".to_string(),
                        heading: "We value your opinion".to_string(),
                    },
                    ContentItem::Selection {
                        id: "1-2".to_string(),
                        heading: "Recommend?".to_string(),
                        options: vec!["Yes".to_string(), "No".to_string()],
                    },
                    ContentItem::Paragraph {
                        id: "1-3".to_string(),
                        heading: "Why?".to_string(),
                        placeholder: None,
                    },
                ],
            },
            Screen {
                id: "2".to_string(),
                title: "Thanks".to_string(),
                content: vec![ContentItem::LargeHeading {
                    id: "2-1".to_string(),
                    heading: "Thank you!".to_string(),
                }],
            },
        ],
    }
}

/// Creates a flow of `count` screens, each holding one short answer titled "Answer".
#[allow(dead_code)]
pub fn create_linear_flow(count: usize) -> FlowDocument {
    FlowDocument {
        screens: (0..count)
            .map(|i| Screen {
                id: (i + 1).to_string(),
                title: format!("Step {}", i + 1),
                content: vec![ContentItem::ShortAnswer {
                    id: format!("{}-1", i + 1),
                    heading: "Answer".to_string(),
                    placeholder: None,
                }],
            })
            .collect(),
    }
}

/// Editor JSON as the flow builder exports it, including one type the model does not know.
#[allow(dead_code)]
pub const EDITOR_JSON: &str = r#"{
  "screens": [
    {
      "id": "1",
      "title": "First Screen",
      "content": [
        { "id": "1-1", "type": "small-heading", "heading": "Would you recommend us to a friend?" },
        { "id": "1-2", "type": "selection", "heading": "Choose one", "options": ["Yes", "No"] },
        { "id": "1-3", "type": "video", "heading": "Watch this" }
      ]
    },
    {
      "id": "2",
      "title": "Feedback 2",
      "content": [
        { "id": "2-1", "type": "paragraph", "heading": "Your feedback", "placeholder": "Leave a comment (optional)" },
        { "id": "2-2", "type": "date-picker", "heading": "When did you visit?" }
      ]
    }
  ]
}"#;

/// Returns the components of the screen at `screen_index`, footer included.
#[allow(dead_code)]
pub fn components_of(document: &OutputDocument, screen_index: usize) -> &[OutputComponent] {
    document.screens[screen_index].components()
}

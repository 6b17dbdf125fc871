//! Constructors the editing surface uses when the author adds a screen or a block.

use super::definition::{ContentItem, ContentKind, FlowDocument, Screen};

pub const DEFAULT_SELECTION_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];
pub const DEFAULT_PLACEHOLDER: &str = "Enter text";

impl Screen {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: Vec::new(),
        }
    }

    /// An empty screen numbered the way the editor numbers new screens (`"Feedback 2"`, ...).
    pub fn numbered(number: usize) -> Self {
        Self::new(number.to_string(), format!("Feedback {}", number))
    }

    pub fn with_content(mut self, item: ContentItem) -> Self {
        self.content.push(item);
        self
    }

    /// Appends a defaulted block, numbering its id after the screen's id (`"2-3"`).
    pub fn push_default_content(&mut self, kind: ContentKind) {
        let id = format!("{}-{}", self.id, self.content.len() + 1);
        self.content.push(ContentItem::with_defaults(kind, id));
    }
}

impl ContentItem {
    /// Builds a freshly added block of the given kind.
    ///
    /// The heading reads `New <kind>` with only the first dash of the kind name turned into a
    /// space, so `date-picker` becomes `New date picker`.
    pub fn with_defaults(kind: ContentKind, id: impl Into<String>) -> Self {
        let id = id.into();
        let heading = format!("New {}", kind.as_str().replacen('-', " ", 1));
        match kind {
            ContentKind::LargeHeading => ContentItem::LargeHeading { id, heading },
            ContentKind::SmallHeading => ContentItem::SmallHeading { id, heading },
            ContentKind::Media => ContentItem::Media { id, heading },
            ContentKind::ShortAnswer => ContentItem::ShortAnswer {
                id,
                heading,
                placeholder: Some(DEFAULT_PLACEHOLDER.to_string()),
            },
            ContentKind::Paragraph => ContentItem::Paragraph {
                id,
                heading,
                placeholder: Some(DEFAULT_PLACEHOLDER.to_string()),
            },
            ContentKind::DatePicker => ContentItem::DatePicker { id, heading },
            ContentKind::Selection => ContentItem::Selection {
                id,
                heading,
                options: DEFAULT_SELECTION_OPTIONS
                    .iter()
                    .map(|o| o.to_string())
                    .collect(),
            },
        }
    }
}

impl FlowDocument {
    pub fn new(screens: Vec<Screen>) -> Self {
        Self { screens }
    }

    /// The feedback flow a new editor session starts with.
    pub fn starter() -> Self {
        let screen = Screen::new("1", "First Screen")
            .with_content(ContentItem::SmallHeading {
                id: "1-1".to_string(),
                heading: "Would you recommend us to a friend?".to_string(),
            })
            .with_content(ContentItem::Selection {
                id: "1-2".to_string(),
                heading: "Choose one".to_string(),
                options: vec!["Yes".to_string(), "No".to_string()],
            })
            .with_content(ContentItem::SmallHeading {
                id: "1-3".to_string(),
                heading: "How could we do better?".to_string(),
            })
            .with_content(ContentItem::Paragraph {
                id: "1-4".to_string(),
                heading: "Your feedback".to_string(),
                placeholder: Some("Leave a comment (optional)".to_string()),
            });
        Self::new(vec![screen])
    }

    /// Appends an empty, editor-numbered screen and returns a handle to it.
    pub fn push_numbered_screen(&mut self) -> &mut Screen {
        let screen = Screen::numbered(self.screens.len() + 1);
        self.screens.push(screen);
        let last = self.screens.len() - 1;
        &mut self.screens[last]
    }
}

use std::fmt;
use std::str::FromStr;

/// The complete, canonical definition of an authored flow, ready for compilation.
///
/// Screen order is navigation order: the first screen is the entry point and the last one
/// completes the flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowDocument {
    pub screens: Vec<Screen>,
}

/// One page of the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Authoring identifier assigned by the editor. Never emitted in compiled output.
    pub id: String,
    pub title: String,
    pub content: Vec<ContentItem>,
}

/// A single authored block within a screen.
///
/// Only `Selection` carries options and only `ShortAnswer` and `Paragraph` carry a
/// placeholder, so the "other variants never carry options" rule holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    LargeHeading {
        id: String,
        heading: String,
    },
    SmallHeading {
        id: String,
        heading: String,
    },
    Media {
        id: String,
        heading: String,
    },
    ShortAnswer {
        id: String,
        heading: String,
        placeholder: Option<String>,
    },
    Paragraph {
        id: String,
        heading: String,
        placeholder: Option<String>,
    },
    DatePicker {
        id: String,
        heading: String,
    },
    Selection {
        id: String,
        heading: String,
        options: Vec<String>,
    },
    /// Content whose kind this model does not know. Kept so that newer editors can still
    /// export through an older compiler.
    Unsupported {
        id: String,
        heading: String,
        kind: String,
    },
}

impl ContentItem {
    pub fn id(&self) -> &str {
        match self {
            ContentItem::LargeHeading { id, .. }
            | ContentItem::SmallHeading { id, .. }
            | ContentItem::Media { id, .. }
            | ContentItem::ShortAnswer { id, .. }
            | ContentItem::Paragraph { id, .. }
            | ContentItem::DatePicker { id, .. }
            | ContentItem::Selection { id, .. }
            | ContentItem::Unsupported { id, .. } => id,
        }
    }

    pub fn heading(&self) -> &str {
        match self {
            ContentItem::LargeHeading { heading, .. }
            | ContentItem::SmallHeading { heading, .. }
            | ContentItem::Media { heading, .. }
            | ContentItem::ShortAnswer { heading, .. }
            | ContentItem::Paragraph { heading, .. }
            | ContentItem::DatePicker { heading, .. }
            | ContentItem::Selection { heading, .. }
            | ContentItem::Unsupported { heading, .. } => heading,
        }
    }

    /// The kind of this item, or `None` for unsupported content.
    pub fn kind(&self) -> Option<ContentKind> {
        match self {
            ContentItem::LargeHeading { .. } => Some(ContentKind::LargeHeading),
            ContentItem::SmallHeading { .. } => Some(ContentKind::SmallHeading),
            ContentItem::Media { .. } => Some(ContentKind::Media),
            ContentItem::ShortAnswer { .. } => Some(ContentKind::ShortAnswer),
            ContentItem::Paragraph { .. } => Some(ContentKind::Paragraph),
            ContentItem::DatePicker { .. } => Some(ContentKind::DatePicker),
            ContentItem::Selection { .. } => Some(ContentKind::Selection),
            ContentItem::Unsupported { .. } => None,
        }
    }

    /// The editor's type name for this item, including unknown ones.
    pub fn kind_name(&self) -> &str {
        match self {
            ContentItem::Unsupported { kind, .. } => kind.as_str(),
            other => other.kind().map(ContentKind::as_str).unwrap_or_default(),
        }
    }

    /// Whether this item collects user input and therefore needs a field name.
    pub fn is_field_bearing(&self) -> bool {
        self.kind().is_some_and(ContentKind::is_field_bearing)
    }
}

/// The seven kinds of content an author can place on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    LargeHeading,
    SmallHeading,
    Media,
    ShortAnswer,
    Paragraph,
    DatePicker,
    Selection,
}

impl ContentKind {
    pub const ALL: [ContentKind; 7] = [
        ContentKind::LargeHeading,
        ContentKind::SmallHeading,
        ContentKind::Media,
        ContentKind::ShortAnswer,
        ContentKind::Paragraph,
        ContentKind::DatePicker,
        ContentKind::Selection,
    ];

    /// The kebab-case name the editor uses for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::LargeHeading => "large-heading",
            ContentKind::SmallHeading => "small-heading",
            ContentKind::Media => "media",
            ContentKind::ShortAnswer => "short-answer",
            ContentKind::Paragraph => "paragraph",
            ContentKind::DatePicker => "date-picker",
            ContentKind::Selection => "selection",
        }
    }

    pub fn is_field_bearing(self) -> bool {
        matches!(
            self,
            ContentKind::ShortAnswer
                | ContentKind::Paragraph
                | ContentKind::DatePicker
                | ContentKind::Selection
        )
    }

    pub fn accepts_placeholder(self) -> bool {
        matches!(self, ContentKind::ShortAnswer | ContentKind::Paragraph)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a type name is not one of the seven known kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContentKind(pub String);

impl FromStr for ContentKind {
    type Err = UnknownContentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownContentKind(s.to_string()))
    }
}

use crate::error::ConversionError;
use crate::flow::{ContentItem, ContentKind, FlowDocument, IntoFlow, Screen};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single content block as the editor stores it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiContentItem {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// A screen as the editor stores it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiScreen {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "components")]
    pub content: Vec<UiContentItem>,
}

/// Complete editor state, as exported from the flow builder.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UiFlow {
    #[serde(default)]
    pub screens: Vec<UiScreen>,
}

impl UiFlow {
    pub fn from_json(json: &str) -> Result<Self, ConversionError> {
        serde_json::from_str(json).map_err(|e| ConversionError::JsonParseError(e.to_string()))
    }
}

impl From<&FlowDocument> for UiFlow {
    fn from(document: &FlowDocument) -> Self {
        let screens = document
            .screens
            .iter()
            .map(|screen| UiScreen {
                id: screen.id.clone(),
                title: screen.title.clone(),
                content: screen.content.iter().map(UiContentItem::from).collect(),
            })
            .collect();
        UiFlow { screens }
    }
}

impl From<&ContentItem> for UiContentItem {
    fn from(item: &ContentItem) -> Self {
        let (options, placeholder) = match item {
            ContentItem::Selection { options, .. } => (Some(options.clone()), None),
            ContentItem::ShortAnswer { placeholder, .. }
            | ContentItem::Paragraph { placeholder, .. } => (None, placeholder.clone()),
            _ => (None, None),
        };
        UiContentItem {
            id: item.id().to_string(),
            content_type: item.kind_name().to_string(),
            heading: item.heading().to_string(),
            options,
            placeholder,
        }
    }
}

impl IntoFlow for UiFlow {
    fn into_flow(self) -> Result<FlowDocument, ConversionError> {
        let screens = self
            .screens
            .into_iter()
            .map(|ui_screen| -> Result<Screen, ConversionError> {
                let content = ui_screen
                    .content
                    .into_iter()
                    .map(convert_item)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Screen {
                    id: ui_screen.id,
                    title: ui_screen.title,
                    content,
                })
            })
            .collect::<Result<Vec<_>, ConversionError>>()?;

        Ok(FlowDocument { screens })
    }
}

/// Converts one editor block, rejecting attributes its kind cannot carry.
fn convert_item(item: UiContentItem) -> Result<ContentItem, ConversionError> {
    let UiContentItem {
        id,
        content_type,
        heading,
        options,
        placeholder,
    } = item;

    let Ok(kind) = ContentKind::from_str(&content_type) else {
        return Ok(ContentItem::Unsupported {
            id,
            heading,
            kind: content_type,
        });
    };

    if options.is_some() && kind != ContentKind::Selection {
        return Err(ConversionError::UnexpectedOptions {
            item_id: id,
            kind: content_type,
        });
    }
    if placeholder.is_some() && !kind.accepts_placeholder() {
        return Err(ConversionError::UnexpectedPlaceholder {
            item_id: id,
            kind: content_type,
        });
    }

    Ok(match kind {
        ContentKind::LargeHeading => ContentItem::LargeHeading { id, heading },
        ContentKind::SmallHeading => ContentItem::SmallHeading { id, heading },
        ContentKind::Media => ContentItem::Media { id, heading },
        ContentKind::ShortAnswer => ContentItem::ShortAnswer {
            id,
            heading,
            placeholder,
        },
        ContentKind::Paragraph => ContentItem::Paragraph {
            id,
            heading,
            placeholder,
        },
        ContentKind::DatePicker => ContentItem::DatePicker { id, heading },
        ContentKind::Selection => ContentItem::Selection {
            id,
            heading,
            options: options.unwrap_or_default(),
        },
    })
}

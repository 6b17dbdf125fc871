use super::diagnostics::{Diagnostic, DiagnosticKind};
use super::naming::{field_name, option_id};
use super::CompilerConfig;
use crate::flow::{ContentItem, Screen};
use crate::output::{DataSourceOption, InputType, OutputComponent};
use tracing::{trace, warn};

/// The components of one screen plus the field names it registered, in encounter order.
pub(super) struct MappedScreen {
    pub components: Vec<OutputComponent>,
    pub field_names: Vec<String>,
}

/// Maps the content of a single screen onto output components.
pub(super) struct ScreenMapper<'a> {
    config: &'a CompilerConfig,
    screen_index: usize,
    field_names: Vec<String>,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl<'a> ScreenMapper<'a> {
    pub(super) fn new(
        config: &'a CompilerConfig,
        screen_index: usize,
        diagnostics: &'a mut Vec<Diagnostic>,
    ) -> Self {
        Self {
            config,
            screen_index,
            field_names: Vec::new(),
            diagnostics,
        }
    }

    pub(super) fn map_screen(mut self, screen: &Screen) -> MappedScreen {
        let components = screen
            .content
            .iter()
            .enumerate()
            .map(|(content_index, item)| self.map_item(content_index, item))
            .collect();

        MappedScreen {
            components,
            field_names: self.field_names,
        }
    }

    fn map_item(&mut self, content_index: usize, item: &ContentItem) -> OutputComponent {
        match item {
            ContentItem::LargeHeading { heading, .. } => OutputComponent::TextHeading {
                text: heading.clone(),
            },
            ContentItem::SmallHeading { heading, .. } => OutputComponent::TextBody {
                text: heading.clone(),
            },
            ContentItem::Media { .. } => OutputComponent::Media {
                src: self.config.media_placeholder.clone(),
            },
            ContentItem::ShortAnswer { heading, .. } => OutputComponent::TextInput {
                label: heading.clone(),
                name: self.register_field(content_index, heading),
                input_type: InputType::Text,
                required: false,
            },
            ContentItem::Paragraph {
                heading,
                placeholder,
                ..
            } => OutputComponent::TextArea {
                label: heading.clone(),
                name: self.register_field(content_index, heading),
                placeholder: placeholder.clone(),
                required: false,
            },
            ContentItem::DatePicker { heading, .. } => OutputComponent::DatePicker {
                label: heading.clone(),
                name: self.register_field(content_index, heading),
                required: false,
            },
            ContentItem::Selection {
                heading, options, ..
            } => OutputComponent::RadioButtonsGroup {
                label: heading.clone(),
                name: self.register_field(content_index, heading),
                required: false,
                data_source: options
                    .iter()
                    .enumerate()
                    .map(|(option_index, title)| DataSourceOption {
                        id: option_id(self.screen_index, content_index, option_index),
                        title: title.clone(),
                    })
                    .collect(),
            },
            ContentItem::Unsupported { id, kind, .. } => {
                warn!(
                    screen_index = self.screen_index,
                    content_index,
                    item_id = %id,
                    kind = %kind,
                    "unsupported content type, emitting placeholder text"
                );
                self.diagnostics.push(Diagnostic {
                    screen_index: self.screen_index,
                    content_index,
                    item_id: id.clone(),
                    kind: DiagnosticKind::UnsupportedContent { kind: kind.clone() },
                });
                OutputComponent::TextBody {
                    text: self.config.fallback_text.clone(),
                }
            }
        }
    }

    fn register_field(&mut self, content_index: usize, heading: &str) -> String {
        let name = field_name(self.screen_index, content_index, heading);
        trace!(screen_index = self.screen_index, field = %name, "registered field");
        self.field_names.push(name.clone());
        name
    }
}

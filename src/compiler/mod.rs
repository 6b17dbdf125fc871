use crate::flow::FlowDocument;
use crate::output::{Layout, LayoutChild, OutputDocument, OutputScreen};
use serde_json::Map;
use tracing::debug;

mod diagnostics;
mod mapping;
pub mod naming;
pub mod navigation;

pub use diagnostics::{Diagnostic, DiagnosticKind};
use mapping::ScreenMapper;
use navigation::{build_footer, screen_id};

/// Schema version stamped on every output document.
pub const SCHEMA_VERSION: &str = "6.0";
/// Image source used for media blocks until the editor can bind real media.
pub const MEDIA_PLACEHOLDER_SRC: &str = "https://via.placeholder.com/150";
/// Body text emitted in place of content the compiler does not know.
pub const UNSUPPORTED_CONTENT_TEXT: &str = "Unsupported content type";
/// Name of the single form wrapping each screen's components.
pub const FORM_NAME: &str = "flow_path";

/// Fixed values written into the output. All of them default to the constants above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    pub version: String,
    pub media_placeholder: String,
    pub fallback_text: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            media_placeholder: MEDIA_PLACEHOLDER_SRC.to_string(),
            fallback_text: UNSUPPORTED_CONTENT_TEXT.to_string(),
        }
    }
}

/// The result of a compilation: the document plus anything worth telling the caller about.
#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    pub document: OutputDocument,
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Compiles flow documents into output documents.
///
/// A `Compiler` holds configuration only, so one instance can be shared and reused freely;
/// every call reads its input snapshot and allocates a fresh output.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

#[derive(Debug, Default)]
pub struct CompilerBuilder {
    config: CompilerConfig,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_version(mut self, version: &str) -> Self {
        self.config.version = version.to_string();
        self
    }
    pub fn with_media_placeholder(mut self, src: &str) -> Self {
        self.config.media_placeholder = src.to_string();
        self
    }
    pub fn with_fallback_text(mut self, text: &str) -> Self {
        self.config.fallback_text = text.to_string();
        self
    }
    pub fn build(self) -> Compiler {
        Compiler {
            config: self.config,
        }
    }
}

impl Compiler {
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn compile(&self, flow: &FlowDocument) -> Compilation {
        let mut diagnostics = Vec::new();
        let last_index = flow.screens.len().checked_sub(1);

        let screens = flow
            .screens
            .iter()
            .enumerate()
            .map(|(screen_index, screen)| {
                let is_last = Some(screen_index) == last_index;
                let mapped =
                    ScreenMapper::new(&self.config, screen_index, &mut diagnostics).map_screen(screen);

                let mut children = mapped.components;
                children.push(build_footer(screen_index, is_last, &mapped.field_names));

                debug!(
                    screen = screen_index,
                    components = children.len(),
                    fields = mapped.field_names.len(),
                    terminal = is_last,
                    "compiled screen"
                );

                OutputScreen {
                    id: screen_id(screen_index),
                    title: screen.title.clone(),
                    data: Map::new(),
                    layout: Layout::SingleColumnLayout {
                        children: vec![LayoutChild::Form {
                            name: FORM_NAME.to_string(),
                            children,
                        }],
                    },
                    terminal: is_last.then_some(true),
                }
            })
            .collect();

        Compilation {
            document: OutputDocument {
                version: self.config.version.clone(),
                screens,
            },
            diagnostics,
        }
    }
}

/// Compiles `flow` with the default configuration, discarding diagnostics.
pub fn compile(flow: &FlowDocument) -> OutputDocument {
    Compiler::default().compile(flow).document
}

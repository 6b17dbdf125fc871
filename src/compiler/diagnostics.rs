use std::fmt;

/// A non-fatal observation made while compiling.
///
/// Compilation never fails; diagnostics let callers notice content the compiler had to
/// substitute, which usually means the editor and the compiler disagree on the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub screen_index: usize,
    pub content_index: usize,
    pub item_id: String,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The item's kind is unknown and a placeholder body text was emitted instead.
    UnsupportedContent { kind: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnsupportedContent { kind } => write!(
                f,
                "screen {}, item {} ('{}'): unsupported content type '{}' replaced by a placeholder",
                self.screen_index, self.content_index, self.item_id, kind
            ),
        }
    }
}

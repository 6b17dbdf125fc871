use super::definition::FlowDocument;
use crate::error::ConversionError;

/// A trait for custom data models that can be converted into a screenflow `FlowDocument`.
///
/// This is the extension point that keeps the compiler independent of any one editor. The
/// bundled editor format (`crate::ui::UiFlow`) implements it; other editors provide their
/// own translation layer by implementing it on their state types.
///
/// # Example
///
/// ```rust,no_run
/// use screenflow::prelude::*;
/// use screenflow::error::ConversionError;
///
/// // 1. Your own editor state.
/// struct MyQuestion { text: String }
/// struct MySurvey { questions: Vec<MyQuestion> }
///
/// // 2. Translate it into screens and content items.
/// impl IntoFlow for MySurvey {
///     fn into_flow(self) -> std::result::Result<FlowDocument, ConversionError> {
///         if self.questions.is_empty() {
///             return Err(ConversionError::ValidationError("survey has no questions".to_string()));
///         }
///         let screens = self
///             .questions
///             .into_iter()
///             .enumerate()
///             .map(|(i, q)| Screen {
///                 id: i.to_string(),
///                 title: format!("Question {}", i + 1),
///                 content: vec![ContentItem::ShortAnswer {
///                     id: format!("{}-1", i),
///                     heading: q.text,
///                     placeholder: None,
///                 }],
///             })
///             .collect();
///         Ok(FlowDocument { screens })
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a compilable flow document.
    fn into_flow(self) -> Result<FlowDocument, ConversionError>;
}

impl IntoFlow for FlowDocument {
    fn into_flow(self) -> Result<FlowDocument, ConversionError> {
        Ok(self)
    }
}

use thiserror::Error;

/// Errors that can occur when converting an editor document into a screenflow `FlowDocument`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Failed to parse editor JSON: {0}")]
    JsonParseError(String),

    #[error("Content item '{item_id}' of type '{kind}' carries options, but only selections may")]
    UnexpectedOptions { item_id: String, kind: String },

    #[error(
        "Content item '{item_id}' of type '{kind}' carries a placeholder, but only short answers and paragraphs may"
    )]
    UnexpectedPlaceholder { item_id: String, kind: String },

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while turning a compiled `OutputDocument` into text or back.
#[derive(Error, Debug, Clone)]
pub enum ExportError {
    #[error("Failed to serialize output document: {0}")]
    Serialization(String),

    #[error("Failed to parse output document: {0}")]
    Deserialization(String),

    #[error("Could not write to '{path}': {message}")]
    Io { path: String, message: String },
}

//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the screenflow crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use screenflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let flow = FlowDocument::starter();
//! let output = compile(&flow);
//! std::fs::write("flow_output.json", output.to_json_pretty()?)?;
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{Compilation, Compiler, CompilerConfig, Diagnostic, compile};

// Document model
pub use crate::flow::{ContentItem, ContentKind, FlowDocument, IntoFlow, Screen};

// Editor interchange
pub use crate::ui::{UiContentItem, UiFlow, UiScreen};

// Output types
pub use crate::output::{
    Action, ActionName, DataSourceOption, FlowOutline, OutputComponent, OutputDocument,
    OutputScreen,
};

// Error types
pub use crate::error::{ConversionError, ExportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

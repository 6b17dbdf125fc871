//! # screenflow - Multi-Screen Form Compiler
//!
//! **screenflow** compiles a multi-screen form ("flow"), authored as an ordered list of
//! screens holding typed content blocks, into the versioned, declarative JSON document an
//! external rendering engine consumes.
//!
//! ## Core Workflow
//!
//! The compiler is editor-agnostic. It operates on a canonical in-memory model of the flow,
//! the `FlowDocument`. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse the editor state (the bundled `UiFlow` format, or your own structs).
//! 2.  **Convert to the Document Model**: `UiFlow` implements `IntoFlow`; implement it for your own format.
//! 3.  **Compile**: Call `compile` (or `Compiler::builder` for custom settings and diagnostics).
//! 4.  **Serialize**: Turn the `OutputDocument` into JSON and hand it to whatever delivers it.
//!
//! Compilation is total: it never fails. Position is identity. Screen `i` becomes
//! `SCREEN_<i>` and navigates to `SCREEN_<i+1>`; the last screen is terminal; every
//! input field is named `screen_<i>_<sanitized heading>_<j>`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use screenflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let editor_json = std::fs::read_to_string("flow.json")?;
//!
//!     // Parse the editor state and convert it into the document model.
//!     let flow = UiFlow::from_json(&editor_json)?.into_flow()?;
//!
//!     // Compile with a custom schema version and look at what got substituted.
//!     let compiler = Compiler::builder().with_version("6.0").build();
//!     let compilation = compiler.compile(&flow);
//!     for diagnostic in &compilation.diagnostics {
//!         eprintln!("warning: {}", diagnostic);
//!     }
//!
//!     println!("{}", compilation.document.to_json_pretty()?);
//!     println!("{}", FlowOutline::new(&compilation.document));
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod error;
pub mod flow;
pub mod output;
pub mod prelude;
pub mod ui;

pub use compiler::{Compilation, Compiler, compile};
pub use flow::{ContentItem, ContentKind, FlowDocument, IntoFlow, Screen};
pub use output::OutputDocument;

//! Core traits and types for configurable editors

mod config_editor;
mod configurable;
mod diagnostics;
pub mod document;
mod error;

pub use config_editor::{ConfigEditor, EditorMeta, ValueEditor};
pub use configurable::Configurable;
pub use diagnostics::{DiagnosticsSink, LogSink, RecordingSink};
pub use document::{int_document, int_field, DocumentExt};
pub use error::{EditorError, Result};

//! configurable: typed, constrained configuration values with editors
//!
//! This library provides:
//! - The `Configurable` capability for components that are set up from a
//!   JSON configuration document and can produce an editor for themselves
//! - The editor contract (`ConfigEditor`, `ValueEditor`) and the bounded
//!   integer editor `EditorInt`
//! - Widget hosts that render editors (a text host, and GTK4 behind the
//!   `gtk` feature)
//!
//! The serialized document, the editor's value and the rendered widget are
//! kept consistent: values are pushed into a live widget on every write and
//! pulled out of it on every read.

pub mod core;
pub mod editors;
pub mod ui;

// Re-export commonly used types
pub use configurable_types::{Diagnostic, HostKind, IntEditorSpec};
pub use crate::core::{
    ConfigEditor, Configurable, DiagnosticsSink, EditorError, EditorMeta, LogSink,
    RecordingSink, ValueEditor,
};
pub use crate::editors::EditorInt;
pub use crate::ui::{IntSpinSpec, IntWidget, TextHost, TextSpinner, WidgetHost};
#[cfg(feature = "gtk")]
pub use crate::ui::{GtkHost, GtkSpinner};

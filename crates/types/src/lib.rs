//! configurable-types: Shared data types for the configurable editor framework.
//!
//! This crate contains pure data types (host kinds, editor declarations,
//! diagnostics) that are shared by the editor crate and by applications that
//! store editor declarations in their own configuration. These types have no
//! GTK dependency, making them suitable as a foundation layer.

pub mod diagnostic;
pub mod editor_spec;
pub mod host;

// Re-export commonly used types at the crate root for convenience
pub use diagnostic::Diagnostic;
pub use editor_spec::IntEditorSpec;
pub use host::HostKind;

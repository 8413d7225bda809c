//! The capability of being configured from a document

use super::config_editor::ConfigEditor;
use serde_json::Value;

/// Trait for components that own configuration.
///
/// `C` is the context available at runtime, `D` the context available while
/// editing. Both are opaque to the editors.
pub trait Configurable<C: ?Sized, D: ?Sized> {
    /// Editor produced by [`Configurable::config_editor`]
    type Editor: ConfigEditor;

    /// Configure the component from `config`.
    ///
    /// A missing document leaves every field at its default, and a field of
    /// the wrong shape falls back to that field's default without affecting
    /// the others.
    fn configure(&mut self, config: Option<&Value>, context: &C, edit_ctx: &D);

    /// Get an editor reflecting the current configuration.
    ///
    /// Changing the editor may or may not change this component; call
    /// [`Configurable::apply_editor`] to write the edits back.
    fn config_editor(&self, context: &C, edit_ctx: &D) -> Self::Editor;

    /// Re-configure from the editor's current document
    fn apply_editor(&mut self, editor: &Self::Editor, context: &C, edit_ctx: &D) {
        let config = editor.get_config();
        self.configure(Some(&config), context, edit_ctx);
    }
}

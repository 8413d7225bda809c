//! Concrete editor implementations

mod int_editor;

pub use int_editor::EditorInt;

//! Editor contract shared by every editor type

use super::error::Result;
use crate::ui::WidgetHost;
use serde_json::Value;
use std::rc::Rc;

/// An editor for one configuration value.
///
/// An editor loads its value from a configuration document, writes it back
/// out, and renders into at most one widget host. Once a widget exists it is
/// the most recent source of truth: reads pull from it, writes push into it.
pub trait ConfigEditor {
    /// Handle type of the control this editor renders
    type Widget: ?Sized;

    /// Load the value from `config`.
    ///
    /// A missing or malformed document resets the value to the editor's
    /// default. This never fails.
    fn set_config<C: ?Sized, D: ?Sized>(&self, config: Option<&Value>, context: &C, edit_ctx: &D);

    /// Current value as a configuration document
    fn get_config(&self) -> Value;

    /// Get the widget for `host`, building it on first use.
    ///
    /// The first call commits the editor to the host's kind; asking a host of
    /// another kind afterwards is an error.
    fn widget(&self, host: &dyn WidgetHost) -> Result<Rc<Self::Widget>>;

    fn label(&self) -> &str;

    fn description(&self) -> &str;
}

/// An editor with a typed value
pub trait ValueEditor: ConfigEditor {
    type Value;

    /// Current value, read from the live widget if there is one
    fn value(&self) -> Self::Value;

    /// Replace the value and show it in the live widget if there is one
    fn set_value(&self, value: Self::Value);
}

/// Presentation metadata carried by every editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorMeta {
    label: String,
    description: String,
}

impl EditorMeta {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

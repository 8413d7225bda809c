//! Toolkit-free text host
//!
//! Renders bounded integers as a one-line spinner, for terminals and
//! headless editing sessions.

use super::widget_host::{clamp_to_bounds, IntSpinSpec, IntWidget, WidgetHost};
use configurable_types::HostKind;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Widget host producing [`TextSpinner`] controls
#[derive(Debug, Default, Clone, Copy)]
pub struct TextHost;

impl WidgetHost for TextHost {
    fn kind(&self) -> HostKind {
        HostKind::Text
    }

    fn build_bounded_int(&self, spec: IntSpinSpec) -> Rc<dyn IntWidget> {
        Rc::new(TextSpinner::new(spec))
    }
}

/// Text spinner control.
///
/// The value always stays inside `[min, max]`. Typed text is held in an edit
/// buffer until it is committed; text that does not parse leaves the value
/// unchanged.
#[derive(Debug)]
pub struct TextSpinner {
    min: i64,
    max: i64,
    step: i64,
    value: Cell<i64>,
    edit_text: RefCell<Option<String>>,
}

impl TextSpinner {
    pub fn new(spec: IntSpinSpec) -> Self {
        Self {
            min: spec.min,
            max: spec.max,
            step: spec.step,
            value: Cell::new(clamp_to_bounds(spec.value, spec.min, spec.max)),
            edit_text: RefCell::new(None),
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Increment the value by one step.
    pub fn step_up(&self) {
        self.set_displayed_value(self.value.get().saturating_add(self.step));
    }

    /// Decrement the value by one step.
    pub fn step_down(&self) {
        self.set_displayed_value(self.value.get().saturating_sub(self.step));
    }

    /// Start editing, seeding the buffer with the current value.
    pub fn begin_edit(&self) {
        *self.edit_text.borrow_mut() = Some(self.value.get().to_string());
    }

    /// Replace the edit buffer with `text`.
    pub fn edit_text(&self, text: &str) {
        *self.edit_text.borrow_mut() = Some(text.to_string());
    }

    pub fn is_editing(&self) -> bool {
        self.edit_text.borrow().is_some()
    }

    /// Finish editing and apply the typed value.
    ///
    /// Returns `true` if the buffer parsed as an integer.
    pub fn commit_edit(&self) -> bool {
        let Some(text) = self.edit_text.borrow_mut().take() else {
            return false;
        };
        match text.trim().parse::<i64>() {
            Ok(parsed) => {
                self.set_displayed_value(parsed);
                true
            }
            Err(e) => {
                log::debug!("Ignoring spinner text {:?}: {}", text, e);
                false
            }
        }
    }

    /// Drop the edit buffer without applying it.
    pub fn cancel_edit(&self) {
        self.edit_text.borrow_mut().take();
    }

    /// One-line rendering, e.g. `[- 5 +]`
    pub fn render(&self) -> String {
        match self.edit_text.borrow().as_deref() {
            Some(text) => format!("[- {}_ +]", text),
            None => format!("[- {} +]", self.value.get()),
        }
    }
}

impl IntWidget for TextSpinner {
    fn displayed_value(&self) -> i64 {
        self.value.get()
    }

    fn set_displayed_value(&self, value: i64) {
        self.value.set(clamp_to_bounds(value, self.min, self.max));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

//! Widget host interface
//!
//! A widget host is the toolkit side of an editor. Editors only ask a host to
//! build a control once, then push values into it and pull values out of it.

use configurable_types::HostKind;
use std::any::Any;
use std::rc::Rc;

/// Construction parameters for a bounded integer control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntSpinSpec {
    pub min: i64,
    pub max: i64,
    /// Initial value, already inside `[min, max]`
    pub value: i64,
    /// Increment applied by the up/down controls
    pub step: i64,
}

/// Handle to a live bounded integer control
pub trait IntWidget {
    /// Value the control currently shows
    fn displayed_value(&self) -> i64;

    /// Replace the value the control shows
    fn set_displayed_value(&self, value: i64);

    /// Access the concrete control, e.g. to pack a GTK widget into a container
    fn as_any(&self) -> &dyn Any;
}

/// A widget toolkit able to render editors
pub trait WidgetHost {
    /// Which toolkit this host renders into
    fn kind(&self) -> HostKind;

    /// Build an editable spinner: free-text entry plus increment/decrement by `step`
    fn build_bounded_int(&self, spec: IntSpinSpec) -> Rc<dyn IntWidget>;
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike `i64::clamp` this never panics; with `min > max` the result is `min`.
pub fn clamp_to_bounds(value: i64, min: i64, max: i64) -> i64 {
    value.min(max).max(min)
}

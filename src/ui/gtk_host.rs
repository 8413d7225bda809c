//! GTK4 widget host

use super::widget_host::{IntSpinSpec, IntWidget, WidgetHost};
use configurable_types::HostKind;
use gtk4::prelude::*;
use gtk4::{Adjustment, SpinButton, SpinButtonUpdatePolicy};
use std::any::Any;
use std::rc::Rc;

/// Widget host producing `SpinButton` controls
#[derive(Debug, Default, Clone, Copy)]
pub struct GtkHost;

impl WidgetHost for GtkHost {
    fn kind(&self) -> HostKind {
        HostKind::Gtk
    }

    fn build_bounded_int(&self, spec: IntSpinSpec) -> Rc<dyn IntWidget> {
        Rc::new(GtkSpinner::new(spec))
    }
}

/// Bounded integer control backed by a `SpinButton`.
///
/// The adjustment owned by the spin button keeps the typed text and the
/// value in sync, so the editor only reads and writes the value.
pub struct GtkSpinner {
    spin_button: SpinButton,
}

impl GtkSpinner {
    pub fn new(spec: IntSpinSpec) -> Self {
        let adjustment = Adjustment::new(
            spec.value as f64,
            spec.min as f64,
            spec.max as f64,
            spec.step as f64,
            spec.step.saturating_mul(10) as f64,
            0.0,
        );
        let spin_button = SpinButton::new(Some(&adjustment), spec.step as f64, 0);
        spin_button.set_numeric(true);
        spin_button.set_editable(true);
        spin_button.set_update_policy(SpinButtonUpdatePolicy::IfValid);
        spin_button.set_hexpand(true);

        Self { spin_button }
    }

    /// The GTK control, for packing into a container
    pub fn spin_button(&self) -> &SpinButton {
        &self.spin_button
    }
}

impl IntWidget for GtkSpinner {
    fn displayed_value(&self) -> i64 {
        // Commit text the user typed but has not activated yet
        self.spin_button.update();
        self.spin_button.value().round() as i64
    }

    fn set_displayed_value(&self, value: i64) {
        self.spin_button.set_value(value as f64);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

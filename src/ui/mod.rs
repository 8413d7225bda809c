//! Widget hosts that render editors

#[cfg(feature = "gtk")]
mod gtk_host;
mod text_host;
mod widget_host;

#[cfg(feature = "gtk")]
pub use gtk_host::{GtkHost, GtkSpinner};
pub use text_host::{TextHost, TextSpinner};
pub use widget_host::{clamp_to_bounds, IntSpinSpec, IntWidget, WidgetHost};

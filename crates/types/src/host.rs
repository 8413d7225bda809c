//! Widget host kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// The widget toolkit an editor renders into.
///
/// An editor commits to one kind the first time a widget is requested and
/// keeps it for the rest of its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    /// GTK4 controls
    Gtk,
    /// Toolkit-free text controls (terminals, headless sessions)
    Text,
}

impl HostKind {
    /// Human-readable toolkit name
    pub fn name(self) -> &'static str {
        match self {
            HostKind::Gtk => "GTK",
            HostKind::Text => "text",
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

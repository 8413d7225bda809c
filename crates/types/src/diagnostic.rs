//! Diagnostics raised by editors while they keep values consistent

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recoverable condition an editor corrected on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The stored value was outside `[min, max]` when a widget was built and
    /// has been replaced by `clamped`.
    ValueOutOfBounds {
        min: i64,
        max: i64,
        value: i64,
        clamped: i64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ValueOutOfBounds {
                min,
                max,
                value,
                clamped,
            } => write!(
                f,
                "min <= value <= max is false: {} <= {} <= {}, clamped to {}",
                min, value, max, clamped
            ),
        }
    }
}

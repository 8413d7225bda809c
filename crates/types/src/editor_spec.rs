//! Declarative description of a numeric editor.

use serde::{Deserialize, Serialize};

fn default_max() -> i64 {
    100
}

fn default_step() -> i64 {
    1
}

/// Numeric editor declaration, as stored in an application's own configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntEditorSpec {
    /// Inclusive lower bound
    #[serde(default)]
    pub min: i64,
    /// Inclusive upper bound
    #[serde(default = "default_max")]
    pub max: i64,
    /// Increment used by the widget's up/down controls
    #[serde(default = "default_step")]
    pub step: i64,
    /// Value used when no usable configuration is present
    #[serde(default)]
    pub default: i64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

impl Default for IntEditorSpec {
    fn default() -> Self {
        Self {
            min: 0,
            max: default_max(),
            step: default_step(),
            default: 0,
            label: String::new(),
            description: String::new(),
        }
    }
}

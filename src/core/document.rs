//! Configuration documents
//!
//! A configuration document is a `serde_json::Value`. Editors only need to
//! know whether a node is a number, read it as an integer, and build a number.

use serde_json::Value;

/// Numeric accessors on configuration documents
pub trait DocumentExt {
    /// True for JSON numbers; strings holding digits do not count.
    fn is_number_primitive(&self) -> bool;

    /// Integer value of a numeric node.
    ///
    /// Floating point numbers are truncated toward zero and values outside the
    /// `i64` range saturate. Returns `None` for anything that is not a number.
    fn as_int(&self) -> Option<i64>;
}

impl DocumentExt for Value {
    fn is_number_primitive(&self) -> bool {
        self.is_number()
    }

    fn as_int(&self) -> Option<i64> {
        let number = self.as_number()?;
        if let Some(i) = number.as_i64() {
            return Some(i);
        }
        if number.as_u64().is_some() {
            return Some(i64::MAX);
        }
        // `as` saturates for floats outside the range
        number.as_f64().map(|f| f as i64)
    }
}

/// Build a numeric primitive document
pub fn int_document(value: i64) -> Value {
    Value::from(value)
}

/// Read one integer field of an object document.
///
/// Falls back to `default` when the document is missing, is not an object,
/// lacks the key, or holds something other than a number under it.
pub fn int_field(config: Option<&Value>, key: &str, default: i64) -> i64 {
    config
        .and_then(|doc| doc.get(key))
        .and_then(DocumentExt::as_int)
        .unwrap_or(default)
}

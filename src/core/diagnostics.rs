//! Diagnostics sinks
//!
//! Editors report the values they had to correct to an injected sink rather
//! than a global logger, so the reports can be observed by the owner.

use configurable_types::Diagnostic;
use std::cell::RefCell;

/// Receiver for diagnostics raised by editors
pub trait DiagnosticsSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that forwards every diagnostic to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::ValueOutOfBounds { .. } => log::error!("{}", diagnostic),
        }
    }
}

/// Sink that keeps every diagnostic in memory.
///
/// Share it through an `Rc` to inspect what the editors reported.
#[derive(Debug, Default)]
pub struct RecordingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics reported so far, oldest first
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl DiagnosticsSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        log::debug!("Recording diagnostic: {}", diagnostic);
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

//! Bounded integer editor

use crate::core::{
    int_document, ConfigEditor, DiagnosticsSink, DocumentExt, EditorError, EditorMeta, LogSink,
    Result, ValueEditor,
};
use crate::ui::{clamp_to_bounds, IntSpinSpec, IntWidget, WidgetHost};
use configurable_types::{Diagnostic, HostKind, IntEditorSpec};
use once_cell::unsync::OnceCell;
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;

/// The host an editor committed to, and the widget it built there
struct RenderBinding {
    kind: HostKind,
    widget: Rc<dyn IntWidget>,
}

/// Editor for an integer bounded by `[min, max]`.
///
/// The stored value is only clamped when the widget is built; `set_config`
/// and `set_value` store whatever they are given, and `get_config` writes
/// out the clamped value. After that, the widget's
/// displayed value is the source of truth and every read pulls from it.
pub struct EditorInt {
    min: i64,
    max: i64,
    step: i64,
    default: i64,
    value: Cell<i64>,
    meta: EditorMeta,
    sink: Rc<dyn DiagnosticsSink>,
    /// Set once, on the first widget request
    binding: OnceCell<RenderBinding>,
}

impl EditorInt {
    /// Create an editor that reports diagnostics to the log
    pub fn new(
        min: i64,
        max: i64,
        step: i64,
        default: i64,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::with_sink(min, max, step, default, label, description, Rc::new(LogSink))
    }

    /// Create an editor that reports diagnostics to `sink`
    pub fn with_sink(
        min: i64,
        max: i64,
        step: i64,
        default: i64,
        label: impl Into<String>,
        description: impl Into<String>,
        sink: Rc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            min,
            max,
            step,
            default,
            value: Cell::new(default),
            meta: EditorMeta::new(label, description),
            sink,
            binding: OnceCell::new(),
        }
    }

    /// Create an editor from a declaration, rejecting empty ranges and
    /// non-positive steps.
    pub fn from_spec(spec: &IntEditorSpec, sink: Rc<dyn DiagnosticsSink>) -> Result<Self> {
        if spec.min > spec.max {
            return Err(EditorError::invalid_spec(format!(
                "min {} is greater than max {}",
                spec.min, spec.max
            )));
        }
        if spec.step <= 0 {
            return Err(EditorError::invalid_spec(format!(
                "step must be positive, got {}",
                spec.step
            )));
        }
        Ok(Self::with_sink(
            spec.min,
            spec.max,
            spec.step,
            spec.default,
            spec.label.clone(),
            spec.description.clone(),
            sink,
        ))
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

    pub fn default_value(&self) -> i64 {
        self.default
    }

    /// The host kind this editor is committed to, if any
    pub fn host_kind(&self) -> Option<HostKind> {
        self.binding.get().map(|binding| binding.kind)
    }

    pub fn is_bound(&self) -> bool {
        self.binding.get().is_some()
    }

    /// Restore the default value
    pub fn reset(&self) {
        self.set_value(self.default);
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.meta.set_label(label);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.meta.set_description(description);
    }

    fn create_widget(&self, host: &dyn WidgetHost) -> RenderBinding {
        let value = self.value.get();
        let clamped = clamp_to_bounds(value, self.min, self.max);
        if clamped != value {
            self.sink.report(Diagnostic::ValueOutOfBounds {
                min: self.min,
                max: self.max,
                value,
                clamped,
            });
            self.value.set(clamped);
        }

        log::debug!(
            "Building {} spinner for '{}' ({}..={}, step {})",
            host.kind(),
            self.meta.label(),
            self.min,
            self.max,
            self.step
        );
        let widget = host.build_bounded_int(IntSpinSpec {
            min: self.min,
            max: self.max,
            value: clamped,
            step: self.step,
        });
        widget.set_displayed_value(clamped);

        RenderBinding {
            kind: host.kind(),
            widget,
        }
    }

    /// Make the live widget, if any, show the stored value
    fn fill_widget(&self) {
        if let Some(binding) = self.binding.get() {
            binding.widget.set_displayed_value(self.value.get());
        }
    }
}

impl ConfigEditor for EditorInt {
    type Widget = dyn IntWidget;

    fn set_config<C: ?Sized, D: ?Sized>(
        &self,
        config: Option<&Value>,
        _context: &C,
        _edit_ctx: &D,
    ) {
        let value = match config.filter(|doc| doc.is_number_primitive()) {
            Some(doc) => doc.as_int().unwrap_or(self.default),
            None => {
                log::debug!(
                    "No numeric config for '{}', using default {}",
                    self.meta.label(),
                    self.default
                );
                self.default
            }
        };
        self.value.set(value);
        self.fill_widget();
    }

    /// Values stored out of bounds before a widget exists are written clamped;
    /// the stored value itself is left alone until the widget is built.
    fn get_config(&self) -> Value {
        int_document(clamp_to_bounds(self.value(), self.min, self.max))
    }

    fn widget(&self, host: &dyn WidgetHost) -> Result<Rc<dyn IntWidget>> {
        let requested = host.kind();
        if let Some(binding) = self.binding.get() {
            if binding.kind != requested {
                return Err(EditorError::host_conflict(binding.kind, requested));
            }
            return Ok(Rc::clone(&binding.widget));
        }

        let binding = self.binding.get_or_init(|| self.create_widget(host));
        Ok(Rc::clone(&binding.widget))
    }

    fn label(&self) -> &str {
        self.meta.label()
    }

    fn description(&self) -> &str {
        self.meta.description()
    }
}

impl ValueEditor for EditorInt {
    type Value = i64;

    fn value(&self) -> i64 {
        if let Some(binding) = self.binding.get() {
            self.value.set(binding.widget.displayed_value());
        }
        self.value.get()
    }

    fn set_value(&self, value: i64) {
        self.value.set(value);
        self.fill_widget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecordingSink;
    use crate::ui::{TextHost, TextSpinner};
    use serde_json::json;

    /// Reports itself as GTK but builds text spinners, so tests run without a display
    struct FakeGtkHost;

    impl WidgetHost for FakeGtkHost {
        fn kind(&self) -> HostKind {
            HostKind::Gtk
        }

        fn build_bounded_int(&self, spec: IntSpinSpec) -> Rc<dyn IntWidget> {
            TextHost.build_bounded_int(spec)
        }
    }

    fn editor_with_sink(
        min: i64,
        max: i64,
        step: i64,
        default: i64,
    ) -> (EditorInt, Rc<RecordingSink>) {
        let sink = Rc::new(RecordingSink::new());
        let editor =
            EditorInt::with_sink(min, max, step, default, "Value", "A value", sink.clone());
        (editor, sink)
    }

    #[test]
    fn test_new_editor_holds_default() {
        let editor = EditorInt::new(0, 10, 1, 5, "Count", "How many");
        assert_eq!(editor.value(), 5);
        assert_eq!(editor.get_config(), json!(5));
        assert_eq!(editor.label(), "Count");
        assert_eq!(editor.description(), "How many");
        assert!(!editor.is_bound());
        assert_eq!(editor.host_kind(), None);
    }

    #[test]
    fn test_round_trip_in_bounds() {
        let (editor, _) = editor_with_sink(-3, 12, 1, 0);
        for v in -3..=12 {
            editor.set_value(v);
            assert_eq!(editor.get_config().as_int(), Some(v));
        }

        editor.widget(&TextHost).unwrap();
        for v in -3..=12 {
            editor.set_value(v);
            assert_eq!(editor.get_config().as_int(), Some(v));
        }
    }

    #[test]
    fn test_set_config_falls_back_to_default() {
        let (editor, _) = editor_with_sink(0, 10, 1, 5);

        editor.set_value(8);
        editor.set_config(None, &(), &());
        assert_eq!(editor.value(), 5);

        for doc in [json!("7"), json!(true), json!(null), json!([7]), json!({"value": 7})] {
            editor.set_value(8);
            editor.set_config(Some(&doc), &(), &());
            assert_eq!(editor.value(), 5, "document {} should fall back", doc);
        }
    }

    #[test]
    fn test_set_config_reads_numbers() {
        let (editor, _) = editor_with_sink(0, 10, 1, 5);
        editor.set_config(Some(&json!(9)), &(), &());
        assert_eq!(editor.value(), 9);

        editor.set_config(Some(&json!(2.75)), &(), &());
        assert_eq!(editor.value(), 2);
    }

    #[test]
    fn test_clamp_when_widget_is_built() {
        let (editor, sink) = editor_with_sink(0, 10, 1, 5);
        editor.set_value(999);
        assert_eq!(editor.value(), 999);

        let widget = editor.widget(&TextHost).unwrap();
        assert_eq!(editor.value(), 10);
        assert_eq!(widget.displayed_value(), 10);
        assert_eq!(
            sink.diagnostics(),
            vec![Diagnostic::ValueOutOfBounds {
                min: 0,
                max: 10,
                value: 999,
                clamped: 10,
            }]
        );
    }

    #[test]
    fn test_get_config_stays_in_bounds() {
        let (editor, sink) = editor_with_sink(0, 10, 1, 5);

        editor.set_value(999);
        assert_eq!(editor.get_config(), json!(10));
        editor.set_config(Some(&json!(-40)), &(), &());
        assert_eq!(editor.get_config(), json!(0));

        // The stored value is only corrected once a widget is built
        assert_eq!(editor.value(), -40);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_in_bounds_value_builds_without_diagnostic() {
        let (editor, sink) = editor_with_sink(0, 10, 1, 5);
        editor.set_value(0);
        let widget = editor.widget(&TextHost).unwrap();
        assert_eq!(widget.displayed_value(), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_push_sync_on_set_value() {
        let (editor, _) = editor_with_sink(0, 10, 1, 5);
        let widget = editor.widget(&TextHost).unwrap();
        editor.set_value(7);
        assert_eq!(widget.displayed_value(), 7);
    }

    #[test]
    fn test_push_sync_on_set_config() {
        let (editor, _) = editor_with_sink(0, 10, 1, 5);
        let widget = editor.widget(&TextHost).unwrap();

        editor.set_config(Some(&json!(2)), &(), &());
        assert_eq!(widget.displayed_value(), 2);

        editor.set_config(Some(&json!("oops")), &(), &());
        assert_eq!(widget.displayed_value(), 5);
    }

    #[test]
    fn test_pull_sync_from_widget() {
        let (editor, _) = editor_with_sink(0, 10, 1, 5);
        let widget = editor.widget(&TextHost).unwrap();

        widget.set_displayed_value(3);
        assert_eq!(editor.value(), 3);
        assert_eq!(editor.get_config().as_int(), Some(3));
    }

    #[test]
    fn test_typed_text_reaches_editor() {
        let (editor, _) = editor_with_sink(0, 100, 5, 50);
        let widget = editor.widget(&TextHost).unwrap();
        let spinner = widget.as_any().downcast_ref::<TextSpinner>().unwrap();

        spinner.edit_text("42");
        assert!(spinner.commit_edit());
        assert_eq!(editor.value(), 42);

        spinner.step_up();
        assert_eq!(editor.get_config(), json!(47));
    }

    #[test]
    fn test_out_of_range_set_value_after_build_follows_widget() {
        let (editor, _) = editor_with_sink(0, 10, 1, 5);
        editor.widget(&TextHost).unwrap();
        editor.set_value(-20);
        assert_eq!(editor.value(), 0);
    }

    #[test]
    fn test_same_host_returns_cached_widget() {
        let (editor, _) = editor_with_sink(0, 10, 1, 5);
        let first = editor.widget(&TextHost).unwrap();
        let second = editor.widget(&TextHost).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(editor.host_kind(), Some(HostKind::Text));
    }

    #[test]
    fn test_host_conflict_is_rejected() {
        let (editor, _) = editor_with_sink(0, 10, 1, 5);
        let widget = editor.widget(&TextHost).unwrap();

        let err = editor.widget(&FakeGtkHost).err().unwrap();
        assert_eq!(
            err,
            EditorError::HostConflict {
                locked: HostKind::Text,
                requested: HostKind::Gtk,
            }
        );
        assert_eq!(err.to_string(), "Can not switch widget host from text to GTK");

        // Still bound to the first host
        assert_eq!(editor.host_kind(), Some(HostKind::Text));
        let again = editor.widget(&TextHost).unwrap();
        assert!(Rc::ptr_eq(&widget, &again));
    }

    #[test]
    fn test_host_conflict_other_direction() {
        let (editor, _) = editor_with_sink(0, 10, 1, 5);
        editor.widget(&FakeGtkHost).unwrap();
        assert!(matches!(
            editor.widget(&TextHost),
            Err(EditorError::HostConflict {
                locked: HostKind::Gtk,
                requested: HostKind::Text,
            })
        ));
    }

    #[test]
    fn test_reconfigure_is_idempotent() {
        let (editor, _) = editor_with_sink(0, 10, 1, 5);
        let widget = editor.widget(&TextHost).unwrap();
        let doc = json!(6);

        editor.set_config(Some(&doc), &(), &());
        let first = (editor.value(), widget.displayed_value());
        editor.set_config(Some(&doc), &(), &());
        let second = (editor.value(), widget.displayed_value());

        assert_eq!(first, (6, 6));
        assert_eq!(first, second);
    }

    #[test]
    fn test_clamp_only_at_render() {
        let (editor, sink) = editor_with_sink(0, 100, 5, 50);
        editor.set_config(Some(&json!(200)), &(), &());
        assert_eq!(editor.value(), 200);
        assert!(sink.is_empty());

        let widget = editor.widget(&TextHost).unwrap();
        assert_eq!(widget.displayed_value(), 100);
        assert_eq!(editor.value(), 100);
        assert_eq!(sink.len(), 1);

        let spinner = widget.as_any().downcast_ref::<TextSpinner>().unwrap();
        assert_eq!(spinner.step(), 5);
    }

    #[test]
    fn test_reset_restores_default() {
        let (editor, _) = editor_with_sink(0, 10, 1, 5);
        let widget = editor.widget(&TextHost).unwrap();
        widget.set_displayed_value(9);
        editor.reset();
        assert_eq!(editor.value(), 5);
        assert_eq!(widget.displayed_value(), 5);
    }

    #[test]
    fn test_from_spec() {
        let sink = Rc::new(RecordingSink::new());
        let spec: IntEditorSpec = serde_json::from_value(json!({
            "min": 1,
            "max": 9,
            "step": 2,
            "default": 4,
            "label": "Level"
        }))
        .unwrap();
        let editor = EditorInt::from_spec(&spec, sink).unwrap();
        assert_eq!((editor.min(), editor.max(), editor.step()), (1, 9, 2));
        assert_eq!(editor.default_value(), 4);
        assert_eq!(editor.value(), 4);
        assert_eq!(editor.label(), "Level");
    }

    #[test]
    fn test_from_spec_rejects_invalid_declarations() {
        let sink: Rc<dyn DiagnosticsSink> = Rc::new(RecordingSink::new());

        let inverted = IntEditorSpec {
            min: 10,
            max: 0,
            ..IntEditorSpec::default()
        };
        assert!(matches!(
            EditorInt::from_spec(&inverted, sink.clone()),
            Err(EditorError::InvalidSpec(_))
        ));

        let no_step = IntEditorSpec {
            step: 0,
            ..IntEditorSpec::default()
        };
        assert!(matches!(
            EditorInt::from_spec(&no_step, sink),
            Err(EditorError::InvalidSpec(_))
        ));
    }

    #[test]
    fn test_metadata_setters() {
        let mut editor = EditorInt::new(0, 10, 1, 5, "", "");
        editor.set_label("Retries");
        editor.set_description("Number of attempts");
        assert_eq!(editor.label(), "Retries");
        assert_eq!(editor.description(), "Number of attempts");
    }
}

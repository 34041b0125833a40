//! Presentation collaborators and the feedback markup builder
//!
//! The engine never touches a document directly. Render-mode runs
//! drive a caller-supplied [`Renderer`], and event cancellation goes
//! through a caller-supplied [`TriggerEvent`].

use tracing::debug;

use crate::config::Config;
use crate::feedback::{RenderRequest, Status};
use crate::field::Field;

/// Added to a failing field's container regardless of stage.
pub const FAILED_CLASS: &str = "validate-failed";
/// Added to containers implicated by the required stage.
pub const REQUIRED_ERROR_CLASS: &str = "validate-error-required";
/// Added to containers implicated by the format stage.
pub const INVALID_ERROR_CLASS: &str = "validate-error-invalid";
/// Added to both containers of a mismatched pair.
pub const MATCH_ERROR_CLASS: &str = "validate-error-match";

/// Separator between the two labels of a mismatched pair in error
/// listings.
pub const MATCH_LABEL_SEPARATOR: &str = "/";

/// The triggering event whose default action can be cancelled when
/// `stop_on_fail` is set. Cancellation is synchronous and best-effort.
pub trait TriggerEvent {
    fn prevent_default(&mut self);
}

/// Presentation operations the engine requests in render mode.
///
/// Implementations must treat removals of absent panels, lists and
/// classes as no-ops; the engine relies on that for cleanup
/// idempotence.
pub trait Renderer {
    /// Whether an error panel already exists under `anchor`.
    fn has_panel(&self, anchor: &str) -> bool;
    /// Create an error panel with an empty message slot under `anchor`.
    fn create_panel(&mut self, anchor: &str);
    /// Remove the error panel and everything in it.
    fn remove_panel(&mut self, anchor: &str);
    /// Add a class to the panel.
    fn add_panel_class(&mut self, anchor: &str, class: &str);
    /// Set the panel's message text.
    fn set_message(&mut self, anchor: &str, message: &str);
    /// Append an empty ordered error list to the panel.
    fn create_list(&mut self, anchor: &str);
    /// Append one entry to the panel's error list.
    fn append_list_item(&mut self, anchor: &str, label: &str);
    /// Remove the error list, leaving the panel and message intact.
    fn remove_list(&mut self, anchor: &str);
    /// Add a class to the container of the field with `field_id`.
    fn add_container_class(&mut self, field_id: &str, class: &str);
    /// Remove a class from the container of the field with `field_id`.
    fn remove_container_class(&mut self, field_id: &str, class: &str);
    /// Resolve a field's display label.
    fn label_for(&self, field_id: &str) -> Option<String>;
}

/// What cleanup removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupScope {
    /// Remove the whole panel and clear error classes from every
    /// selected field's container.
    All,
    /// Remove only the error list, before re-rendering a fresh
    /// failure.
    Fields,
}

/// Build the error markup for a failing run: ensure the panel exists,
/// mark each implicated field's container, tag the panel with the
/// status classes and select the matching message template. With
/// `list_fields` set, one label entry is appended per implicated
/// field, mismatch pairs joined with [`MATCH_LABEL_SEPARATOR`].
pub(crate) fn markup(renderer: &mut dyn Renderer, config: &Config, request: &RenderRequest<'_>) {
    let anchor = config.anchor.as_str();
    debug!(status = %request.status, fields = request.fields.len(), "building feedback markup");

    if !renderer.has_panel(anchor) {
        renderer.create_panel(anchor);
    }

    match request.status {
        Status::Valid => {}
        Status::MissingRequiredFields => {
            for field in request.fields.values() {
                renderer.add_container_class(&field.id, FAILED_CLASS);
                renderer.add_container_class(&field.id, REQUIRED_ERROR_CLASS);
            }
            renderer.add_panel_class(anchor, "failed");
            renderer.add_panel_class(anchor, "required-fields");
            renderer.set_message(anchor, &config.required_message);
        }
        Status::Invalid => {
            for field in request.fields.values() {
                renderer.add_container_class(&field.id, FAILED_CLASS);
                renderer.add_container_class(&field.id, INVALID_ERROR_CLASS);
            }
            renderer.add_panel_class(anchor, "failed");
            renderer.add_panel_class(anchor, "format");
            renderer.set_message(anchor, &config.format_message);
        }
        Status::Mismatch => {
            for field in request.fields.values() {
                renderer.add_container_class(&field.id, FAILED_CLASS);
                renderer.add_container_class(&field.id, MATCH_ERROR_CLASS);
                if let Some(match_id) = &field.match_id {
                    renderer.add_container_class(match_id, FAILED_CLASS);
                    renderer.add_container_class(match_id, MATCH_ERROR_CLASS);
                }
            }
            renderer.add_panel_class(anchor, "failed");
            renderer.add_panel_class(anchor, "match");
            renderer.set_message(anchor, &config.match_message);
        }
    }

    if config.list_fields {
        renderer.create_list(anchor);
        for field in request.fields.values() {
            let label = renderer
                .label_for(&field.id)
                .unwrap_or_else(|| field.id.clone());
            let entry = match &field.match_id {
                Some(match_id) => {
                    let match_label = renderer
                        .label_for(match_id)
                        .unwrap_or_else(|| match_id.clone());
                    format!("{}{}{}", label, MATCH_LABEL_SEPARATOR, match_label)
                }
                None => label,
            };
            renderer.append_list_item(anchor, &entry);
        }
    }
}

/// Remove previously rendered feedback. Scope `All` drops the panel
/// and clears every selected field's error classes; scope `Fields`
/// drops only the error list. Safe to call when nothing was rendered.
pub(crate) fn cleanup(
    renderer: &mut dyn Renderer,
    config: &Config,
    scope: CleanupScope,
    fields: &[Field],
    selected: &[usize],
) {
    debug!(?scope, "cleaning rendered feedback");
    match scope {
        CleanupScope::All => {
            renderer.remove_panel(&config.anchor);
            for &at in selected {
                let id = fields[at].id.as_str();
                renderer.remove_container_class(id, FAILED_CLASS);
                renderer.remove_container_class(id, REQUIRED_ERROR_CLASS);
                renderer.remove_container_class(id, INVALID_ERROR_CLASS);
                renderer.remove_container_class(id, MATCH_ERROR_CLASS);
            }
        }
        CleanupScope::Fields => {
            renderer.remove_list(&config.anchor);
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::collections::{HashMap, HashSet};

    use super::{Renderer, TriggerEvent};

    /// In-memory renderer recording everything the engine asked for.
    #[derive(Debug, Default)]
    pub(crate) struct MockRenderer {
        pub panels: HashSet<String>,
        pub panel_classes: Vec<String>,
        pub message: Option<String>,
        pub list_present: bool,
        pub list_items: Vec<String>,
        pub container_classes: HashMap<String, Vec<String>>,
        pub labels: HashMap<String, String>,
    }

    impl MockRenderer {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_label(mut self, field_id: &str, label: &str) -> Self {
            self.labels.insert(field_id.to_string(), label.to_string());
            self
        }

        pub(crate) fn classes_on(&self, field_id: &str) -> &[String] {
            self.container_classes
                .get(field_id)
                .map(|c| c.as_slice())
                .unwrap_or(&[])
        }
    }

    impl Renderer for MockRenderer {
        fn has_panel(&self, anchor: &str) -> bool {
            self.panels.contains(anchor)
        }

        fn create_panel(&mut self, anchor: &str) {
            self.panels.insert(anchor.to_string());
        }

        fn remove_panel(&mut self, anchor: &str) {
            self.panels.remove(anchor);
            self.panel_classes.clear();
            self.message = None;
            self.list_present = false;
            self.list_items.clear();
        }

        fn add_panel_class(&mut self, _anchor: &str, class: &str) {
            if !self.panel_classes.iter().any(|c| c == class) {
                self.panel_classes.push(class.to_string());
            }
        }

        fn set_message(&mut self, _anchor: &str, message: &str) {
            self.message = Some(message.to_string());
        }

        fn create_list(&mut self, _anchor: &str) {
            self.list_present = true;
        }

        fn append_list_item(&mut self, _anchor: &str, label: &str) {
            self.list_items.push(label.to_string());
        }

        fn remove_list(&mut self, _anchor: &str) {
            self.list_present = false;
            self.list_items.clear();
        }

        fn add_container_class(&mut self, field_id: &str, class: &str) {
            let classes = self.container_classes.entry(field_id.to_string()).or_default();
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }

        fn remove_container_class(&mut self, field_id: &str, class: &str) {
            if let Some(classes) = self.container_classes.get_mut(field_id) {
                classes.retain(|c| c != class);
            }
        }

        fn label_for(&self, field_id: &str) -> Option<String> {
            self.labels.get(field_id).cloned()
        }
    }

    /// Event stub counting cancellation requests.
    #[derive(Debug, Default)]
    pub(crate) struct MockEvent {
        pub prevented: usize,
    }

    impl TriggerEvent for MockEvent {
        fn prevent_default(&mut self) {
            self.prevented += 1;
        }
    }
}

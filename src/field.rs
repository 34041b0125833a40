//! Field model: one validatable input control

use serde::{Deserialize, Serialize};

/// Class marking a field (or its container) as required.
pub const REQUIRED_CLASS: &str = "required";

/// Class opting a field into the Luhn checksum.
pub const CREDIT_CARD_CLASS: &str = "credit-card-number";

/// Declared kind of an input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Password,
    Tel,
    Checkbox,
    Radio,
    File,
    Select,
    #[serde(rename = "textarea")]
    TextArea,
    Hidden,
    Submit,
    Reset,
    Other,
}

impl FieldKind {
    /// Kinds eligible for container scans. Hidden, submit and reset
    /// controls carry no user-entered value worth checking.
    pub(crate) fn is_selectable(self) -> bool {
        !matches!(self, FieldKind::Hidden | FieldKind::Submit | FieldKind::Reset)
    }

    /// Kinds the format stage never pattern-checks.
    pub(crate) fn skips_format(self) -> bool {
        matches!(
            self,
            FieldKind::Select
                | FieldKind::TextArea
                | FieldKind::Checkbox
                | FieldKind::Radio
                | FieldKind::File
        )
    }
}

/// One validatable input control.
///
/// Fields are plain data read from the host document. The engine only
/// ever writes back through [`value`](Field::value), and only for
/// telephone normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Identifier, unique within the document.
    pub id: String,
    pub kind: FieldKind,
    pub value: String,
    /// Checked state; only meaningful for checkbox controls.
    pub checked: bool,
    /// Explicit format pattern, used verbatim when present.
    pub pattern: Option<String>,
    /// Raw `required` attribute. `Some("")` is the legacy empty form,
    /// `Some("required")` the canonical explicit form.
    pub required: Option<String>,
    pub classes: Vec<String>,
    /// Classes on the field's immediate container.
    pub container_classes: Vec<String>,
    /// Identifier of another field this one's value must equal.
    pub match_field: Option<String>,
    /// Display label, resolved into error listings.
    pub label: Option<String>,
}

impl Field {
    /// Create a field of the given kind with empty attributes.
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            value: String::new(),
            checked: false,
            pattern: None,
            required: None,
            classes: Vec::new(),
            container_classes: Vec::new(),
            match_field: None,
            label: None,
        }
    }

    pub fn text(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Text)
    }

    pub fn email(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Email)
    }

    pub fn number(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Number)
    }

    pub fn password(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Password)
    }

    pub fn tel(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Tel)
    }

    pub fn checkbox(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Checkbox)
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Mark the field required via the canonical attribute form.
    pub fn required(mut self) -> Self {
        self.required = Some("required".to_string());
        self
    }

    /// Set the raw `required` attribute value (e.g. the legacy empty
    /// form `""`).
    pub fn required_attr(mut self, value: impl Into<String>) -> Self {
        self.required = Some(value.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn container_class(mut self, class: impl Into<String>) -> Self {
        self.container_classes.push(class.into());
        self
    }

    pub fn match_field(mut self, id: impl Into<String>) -> Self {
        self.match_field = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Whether the field must be present: required attribute in either
    /// the legacy or canonical form, or the `required` class on the
    /// field or its container.
    pub fn is_required(&self) -> bool {
        matches!(self.required.as_deref(), Some("") | Some("required"))
            || self.has_class(REQUIRED_CLASS)
            || self.container_classes.iter().any(|c| c == REQUIRED_CLASS)
    }

    pub(crate) fn is_credit_card(&self) -> bool {
        self.has_class(CREDIT_CARD_CLASS)
    }
}

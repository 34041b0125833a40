//! Required-presence stage

use tracing::debug;

use crate::feedback::{ErrorField, Feedback, Status};
use crate::field::{Field, FieldKind};

/// Record every required field that is missing a value. Checkbox
/// controls are judged by checked state, everything else by value;
/// whitespace-only values count as missing.
pub(crate) fn run(fields: &[Field], selected: &[usize], feedback: &mut Feedback) {
    for (index, &at) in selected.iter().enumerate() {
        let field = &fields[at];
        if !field.is_required() {
            continue;
        }
        let missing = if field.kind == FieldKind::Checkbox {
            !field.checked
        } else {
            field.value.trim().is_empty()
        };
        if missing {
            debug!(field = %field.id, "required field missing");
            feedback.record(Status::MissingRequiredFields, index, ErrorField::new(&field.id));
        }
    }
}

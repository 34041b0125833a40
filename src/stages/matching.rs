//! Cross-field match stage

use tracing::debug;

use crate::feedback::{ErrorField, Feedback, Status};
use crate::field::Field;

/// Compare each selected field that declares a match target against
/// the field with that identifier. The target is looked up across the
/// whole field slice, not just the selected subset; absent targets
/// are skipped. Inequality is strict string inequality.
pub(crate) fn run(fields: &[Field], selected: &[usize], feedback: &mut Feedback) {
    for (index, &at) in selected.iter().enumerate() {
        let field = &fields[at];
        let match_id = match &field.match_field {
            Some(id) => id,
            None => continue,
        };
        let target = match fields.iter().find(|f| &f.id == match_id) {
            Some(target) => target,
            None => continue,
        };
        if field.value != target.value {
            debug!(field = %field.id, target = %target.id, "match check failed");
            feedback.record(
                Status::Mismatch,
                index,
                ErrorField::mismatch(&field.id, &target.id),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_over(fields: &[Field]) -> Feedback {
        let selected: Vec<usize> = (0..fields.len()).collect();
        let mut feedback = Feedback::new();
        run(fields, &selected, &mut feedback);
        feedback
    }

    #[test]
    fn test_equal_values_pass() {
        let fields = vec![
            Field::password("password").value("hunter2"),
            Field::password("confirm").value("hunter2").match_field("password"),
        ];
        assert!(run_over(&fields).success);
    }

    #[test]
    fn test_unequal_values_record_both_identifiers() {
        let fields = vec![
            Field::password("password").value("hunter2"),
            Field::password("confirm").value("hunter3").match_field("password"),
        ];
        let feedback = run_over(&fields);
        assert!(!feedback.success);
        assert_eq!(feedback.status, Status::Mismatch);

        let entry = &feedback.error_fields[&1];
        assert_eq!(entry.id, "confirm");
        assert_eq!(entry.match_id.as_deref(), Some("password"));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let fields = vec![
            Field::text("a").value("Value"),
            Field::text("b").value("value").match_field("a"),
        ];
        assert!(!run_over(&fields).success);
    }

    #[test]
    fn test_fields_without_a_target_are_skipped() {
        let fields = vec![Field::text("a").value("x"), Field::text("b").value("y")];
        assert!(run_over(&fields).success);
    }

    #[test]
    fn test_missing_target_id_is_skipped() {
        let fields = vec![Field::text("a").value("x").match_field("nowhere")];
        assert!(run_over(&fields).success);
    }

    #[test]
    fn test_target_outside_selection_is_still_found() {
        // Only index 1 is selected, but its target at index 0 resolves.
        let fields = vec![
            Field::text("a").value("x"),
            Field::text("b").value("y").match_field("a"),
        ];
        let mut feedback = Feedback::new();
        run(&fields, &[1], &mut feedback);
        assert!(!feedback.success);
        // Scan index is the position within the selection.
        assert!(feedback.error_fields.contains_key(&0));
    }
}

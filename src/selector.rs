//! Target resolution and field selection

use crate::field::Field;

/// What a validation run operates on: exactly one input, or a
/// container whose eligible fields are scanned in order.
///
/// Mutable because telephone format validation writes the normalized
/// value back to the field.
#[derive(Debug)]
pub enum Target<'a> {
    Input(&'a mut Field),
    Container(&'a mut [Field]),
}

impl<'a> Target<'a> {
    pub(crate) fn into_parts(self) -> (&'a mut [Field], bool) {
        match self {
            Target::Input(field) => (std::slice::from_mut(field), true),
            Target::Container(fields) => (fields, false),
        }
    }
}

/// Produce the scan-ordered indices of the fields subject to
/// validation. A single-input target is validated as-is; container
/// scans drop hidden, submit and reset controls.
///
/// The position in the returned sequence is the scan index used in
/// error reporting.
pub(crate) fn select(fields: &[Field], single: bool) -> Vec<usize> {
    if single {
        return vec![0];
    }
    fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.kind.is_selectable())
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    #[test]
    fn test_container_scan_excludes_structural_controls() {
        let fields = vec![
            Field::text("name"),
            Field::new("token", FieldKind::Hidden),
            Field::email("email"),
            Field::new("go", FieldKind::Submit),
            Field::new("clear", FieldKind::Reset),
            Field::new("country", FieldKind::Select),
            Field::new("bio", FieldKind::TextArea),
        ];

        let selected = select(&fields, false);
        let ids: Vec<&str> = selected.iter().map(|&i| fields[i].id.as_str()).collect();
        assert_eq!(ids, vec!["name", "email", "country", "bio"]);
    }

    #[test]
    fn test_single_input_target_is_validated_even_when_hidden() {
        let fields = vec![Field::new("token", FieldKind::Hidden)];
        let selected = select(&fields, true);
        assert_eq!(selected, vec![0]);
    }

    #[test]
    fn test_scan_order_is_document_order() {
        let fields = vec![Field::text("a"), Field::text("b"), Field::text("c")];
        assert_eq!(select(&fields, false), vec![0, 1, 2]);
    }

    #[test]
    fn test_target_into_parts() {
        let mut field = Field::text("only");
        let (fields, single) = Target::Input(&mut field).into_parts();
        assert!(single);
        assert_eq!(fields.len(), 1);

        let mut fields = vec![Field::text("a"), Field::text("b")];
        let (fields, single) = Target::Container(&mut fields).into_parts();
        assert!(!single);
        assert_eq!(fields.len(), 2);
    }
}

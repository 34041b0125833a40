//! Format stage: pattern resolution, telephone normalization and the
//! Luhn checksum

use regex::Regex;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::feedback::{ErrorField, Feedback, Status};
use crate::field::{Field, FieldKind};

/// RFC-loose local@domain, allowing a bracketed IP form and requiring
/// a 2-4 letter or 1-3 digit TLD-like suffix.
const EMAIL_PATTERN: &str = r"^([a-zA-Z0-9_\-\.]+)@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.)|(([a-zA-Z0-9\-]+\.)+))([a-zA-Z]{2,4}|[0-9]{1,3})(\]?)$";

/// At least one digit bounded by word boundaries.
const NUMBER_PATTERN: &str = r"\b\d+\b";

/// Entire value within the 7-bit ASCII range.
const PASSWORD_PATTERN: &str = r"^[\x00-\x7F]+$";

/// 10 to 25 digits, applied after non-digits are stripped.
const TEL_PATTERN: &str = r"^\d{10,25}$";

/// Entire value within the 8-bit Latin-1 range.
const DEFAULT_PATTERN: &str = r"^[\x00-\x{FF}]+$";

/// Check each selected field's value against its resolved pattern,
/// and credit-card fields against the Luhn checksum. Telephone values
/// are digit-stripped and written back before matching.
pub(crate) fn run(
    fields: &mut [Field],
    selected: &[usize],
    feedback: &mut Feedback,
) -> EngineResult<()> {
    for (index, &at) in selected.iter().enumerate() {
        let field = &mut fields[at];

        if !field.kind.skips_format() && !field.value.is_empty() {
            if field.kind == FieldKind::Tel && field.pattern.is_none() {
                field.value.retain(|c| c.is_ascii_digit());
            }
            let regex = resolve_pattern(field)?;
            if !regex.is_match(&field.value) {
                debug!(field = %field.id, pattern = regex.as_str(), "format check failed");
                feedback.record(Status::Invalid, index, ErrorField::new(&field.id));
            }
        }

        if field.is_credit_card() && !luhn_passes(&field.value) {
            debug!(field = %field.id, "luhn checksum failed");
            feedback.record(Status::Invalid, index, ErrorField::new(&field.id));
        }
    }
    Ok(())
}

/// Resolve the pattern for a field: an explicit pattern attribute wins
/// verbatim, otherwise the declared kind chooses one. Matching uses
/// find semantics; the built-in patterns carry their own anchors.
fn resolve_pattern(field: &Field) -> EngineResult<Regex> {
    let pattern = match field.pattern.as_deref() {
        Some(pattern) => pattern,
        None => match field.kind {
            FieldKind::Email => EMAIL_PATTERN,
            FieldKind::Number => NUMBER_PATTERN,
            FieldKind::Password => PASSWORD_PATTERN,
            FieldKind::Tel => TEL_PATTERN,
            _ => DEFAULT_PATTERN,
        },
    };
    Regex::new(pattern).map_err(|source| EngineError::Pattern {
        field: field.id.clone(),
        source,
    })
}

/// Mod-10 checksum over the digits of `value`, ignoring any other
/// characters. Digits at the alternating position (right-aligned, so
/// the parity depends on the digit count) are doubled, with 9
/// subtracted from doubled values above 9; the sum must be a multiple
/// of 10. A value with no digits sums to zero and passes.
pub(crate) fn luhn_passes(value: &str) -> bool {
    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
    let parity = digits.len() % 2;
    let mut total = 0;
    for (i, &digit) in digits.iter().enumerate() {
        let mut digit = digit;
        if i % 2 == parity {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        total += digit;
    }
    total % 10 == 0
}

//! Native validity checks for text-like controls
//!
//! Mirrors what the browser's constraint validation reports for
//! `<input type="number">` and `<input type="email">`, so edits can be
//! checked the same way outside the DOM.

use super::field_type::FieldKind;

/// Check a raw control value against the field kind.
///
/// Empty input is always valid: it clears the field.
pub fn native_validity(kind: FieldKind, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }

    match kind {
        FieldKind::Text => Ok(()),
        FieldKind::Number => match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(()),
            _ => Err(format!("'{}' is not a valid number", value)),
        },
        FieldKind::Email => {
            if is_email(value) {
                Ok(())
            } else {
                Err(format!("'{}' is not a valid email address", value))
            }
        }
        FieldKind::Date | FieldKind::Boolean => {
            Err(format!("{} fields do not accept free text", kind.as_str()))
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

//! Helpers for turning `validator` failures into client-facing messages.

use validator::{ValidationErrors, ValidationErrorsKind};

/// Render validation failures as `field: reason` pairs, sorted by field name
/// so the message is stable across runs.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .errors()
        .iter()
        .map(|(field, kind)| format!("{field}: {}", reason(kind)))
        .collect();
    parts.sort();
    parts.join("; ")
}

fn reason(kind: &ValidationErrorsKind) -> String {
    match kind {
        ValidationErrorsKind::Field(errs) => errs
            .iter()
            .map(|e| match e.code.as_ref() {
                "length" => "must not be empty".to_string(),
                "required" => "is required".to_string(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        ValidationErrorsKind::Struct(inner) => describe(inner),
        ValidationErrorsKind::List(_) => "invalid entries".to_string(),
    }
}

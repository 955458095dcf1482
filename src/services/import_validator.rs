//! Batch validation for import records
//!
//! Field rules live on the request DTOs; this module runs them across a
//! whole batch, keys every failure to its 1-based source row, and adds the
//! cross-row rules a single record cannot express.

use std::collections::HashSet;

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::{
    handlers::admin::{request::ImportedProblem, response::ImportError},
    utils::validation,
};

/// Validates import batches before anything touches storage
pub struct ImportValidator;

impl ImportValidator {
    /// Validate every record in the batch, returning all detected errors
    pub fn validate_batch(problems: &[ImportedProblem]) -> Vec<ImportError> {
        let mut errors = Vec::new();
        let mut seen_slugs = HashSet::new();

        for (index, problem) in problems.iter().enumerate() {
            let row = (index + 1) as i32;

            if let Err(field_errors) = problem.validate() {
                flatten_errors(row, &field_errors, "", &mut errors);
            }

            // Only well-formed slugs participate in the uniqueness check;
            // malformed ones were already reported above
            if validation::validate_slug(&problem.slug).is_ok()
                && !seen_slugs.insert(problem.slug.clone())
            {
                errors.push(ImportError {
                    row,
                    field: "slug".to_string(),
                    message: "Duplicate slug".to_string(),
                });
            }
        }

        // ValidationErrors iterates a HashMap; sort so reports are stable
        errors.sort_by(|a, b| (a.row, &a.field).cmp(&(b.row, &b.field)));
        errors
    }
}

/// Walk a ValidationErrors tree, emitting one ImportError per leaf failure
/// with wire-format (camelCase) field paths like `testCases[0].input`
fn flatten_errors(row: i32, errors: &ValidationErrors, prefix: &str, out: &mut Vec<ImportError>) {
    for (field, kind) in errors.errors() {
        let name = wire_field_name(field.as_ref());
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}.{name}")
        };

        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    out.push(ImportError {
                        row,
                        field: path.clone(),
                        message: message_for(failure),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                flatten_errors(row, nested, &path, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_errors(row, nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

fn message_for(failure: &ValidationError) -> String {
    failure
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("Invalid value ({})", failure.code))
}

/// Convert a Rust field identifier to its wire (camelCase) spelling
fn wire_field_name(field: &str) -> String {
    let mut parts = field.split('_');
    let mut name = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.push(first.to_ascii_uppercase());
            name.extend(chars);
        }
    }
    name
}

use thiserror::Error;
use validator::ValidationErrors;

/// A stored record that does not match the shape the site renders.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid {collection} record: {details}")]
    Invalid {
        collection: &'static str,
        details: String,
    },

    #[error("invalid record id: {0:?}")]
    InvalidRecordId(String),

    #[error("invalid file reference id: {0:?}")]
    InvalidFileId(String),
}

impl ModelError {
    pub fn from_validation(collection: &'static str, errors: &ValidationErrors) -> Self {
        Self::Invalid {
            collection,
            details: format_errors(errors),
        }
    }
}

/// Trim `value`, rejecting it when nothing is left.
pub(crate) fn required_text(
    collection: &'static str,
    field: &str,
    value: &str,
) -> Result<String, ModelError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ModelError::Invalid {
            collection,
            details: format!("{field} is blank"),
        });
    }
    Ok(value.to_string())
}

fn format_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| format!("{field}: {msg}"))
                    .unwrap_or_else(|| format!("{field} is invalid ({})", error.code))
            })
        })
        .collect();
    fields.sort();
    fields.join(", ")
}

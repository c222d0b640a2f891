use crate::calculator::UnitError;
use thiserror::Error;

/// Edits the form refuses outright. The form state is left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum FormError {
    #[error("{field} accepts only digits and a single decimal point, got {text:?}")]
    InvalidInput { field: &'static str, text: String },

    #[error("Unsupported unit for {field} Space: {source}")]
    BadUnit {
        field: &'static str,
        #[source]
        source: UnitError,
    },

    #[error("Please fill in all fields before generating the email.")]
    MissingFields,

    #[error("Please fill in all fields: server name, volume name, and client abbreviation.")]
    MissingEmailDetails,
}

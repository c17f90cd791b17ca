use thiserror::Error;

use crate::component_framework::FrameworkError;
use crate::domain::FieldId;

/// Errors that can occur while handling registration form events.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("Submit is disabled, invalid fields: {}", join_fields(.fields))]
    SubmitDisabled { fields: Vec<FieldId> },
    #[error("User validation error: {}", .0.join(", "))]
    Invalid(Vec<String>),
    #[error("Component host error: {0}")]
    Host(#[from] FrameworkError),
}

fn join_fields(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|field| field.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

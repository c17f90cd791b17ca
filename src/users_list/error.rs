use thiserror::Error;

use crate::component_framework::FrameworkError;
use crate::registration_form::FormError;

/// Errors that can occur while handling users list events.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ListError {
    #[error("Registration form is hidden")]
    FormHidden,
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Unexpected outcome: {0}")]
    UnexpectedOutcome(String),
    #[error("Component host error: {0}")]
    Host(#[from] FrameworkError),
}

//! Typed event enums for component communication. Events are what the host
//! UI produces (input changes, focus loss, clicks); outcomes are what the
//! owner of a component learns back.

use crate::domain::{FieldCheck, FieldId, NewUser, UserRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Change { field: FieldId, value: String },
    Blur { field: FieldId },
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// A field was changed or blurred; carries its current check.
    FieldChecked {
        field: FieldId,
        check: FieldCheck,
        submit_enabled: bool,
    },
    /// The form was submitted and has been reset.
    Submitted(NewUser),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// Click on the `toggle-btn` control.
    ToggleForm,
    /// Event targeted at the mounted registration form.
    Form(FormEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    FormShown,
    FormHidden,
    FieldChecked {
        field: FieldId,
        check: FieldCheck,
        submit_enabled: bool,
    },
    UserAdded {
        record: UserRecord,
        form_visible: bool,
    },
}

impl FormEvent {
    pub fn change(field: FieldId, value: impl Into<String>) -> Self {
        FormEvent::Change {
            field,
            value: value.into(),
        }
    }
}

use tracing::{debug, info, instrument};

use super::error::FormError;
use crate::component_framework::Component;
use crate::domain::{all_valid, parse_experience, validation_messages, FieldCheck, FieldId, NewUser};
use crate::messages::{FormEvent, FormOutcome};
use crate::view::Node;
use validator::Validate;

/// Value and interaction state of one input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    pub value: String,
    /// Set once the field has been changed or blurred; errors are only shown
    /// for touched fields.
    pub touched: bool,
}

/// The registration form. Owns only its field values; the record it
/// produces is handed back to the owner as [`FormOutcome::Submitted`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    fields: [FieldState; FieldId::COUNT],
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FieldId) -> &FieldState {
        &self.fields[field as usize]
    }

    fn field_mut(&mut self, field: FieldId) -> &mut FieldState {
        &mut self.fields[field as usize]
    }

    pub fn value(&self, field: FieldId) -> &str {
        &self.field(field).value
    }

    pub fn check(&self, field: FieldId) -> FieldCheck {
        field.check(self.value(field))
    }

    /// Message to display next to `field`, if any.
    pub fn visible_error(&self, field: FieldId) -> Option<String> {
        if !self.field(field).touched {
            return None;
        }
        self.check(field).message().map(str::to_string)
    }

    pub fn checks(&self) -> Vec<FieldCheck> {
        FieldId::ALL.iter().map(|field| self.check(*field)).collect()
    }

    /// Whether the submit control is enabled; depends on values only.
    pub fn submit_enabled(&self) -> bool {
        all_valid(&self.checks())
    }

    pub fn invalid_fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|field| !self.check(*field).is_valid())
            .collect()
    }

    #[instrument(skip_all, fields(field = %field))]
    pub fn change(&mut self, field: FieldId, value: String) -> FormOutcome {
        let state = self.field_mut(field);
        state.value = value;
        state.touched = true;
        self.checked(field)
    }

    #[instrument(skip_all, fields(field = %field))]
    pub fn blur(&mut self, field: FieldId) -> FormOutcome {
        self.field_mut(field).touched = true;
        self.checked(field)
    }

    fn checked(&self, field: FieldId) -> FormOutcome {
        let check = self.check(field);
        let submit_enabled = self.submit_enabled();
        debug!(valid = check.is_valid(), submit_enabled, "Field checked");
        FormOutcome::FieldChecked {
            field,
            check,
            submit_enabled,
        }
    }

    /// Packages the current values and clears the form.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<NewUser, FormError> {
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            debug!(count = invalid.len(), "Submit ignored, form is invalid");
            return Err(FormError::SubmitDisabled { fields: invalid });
        }

        let user = self.package()?;
        user.validate()
            .map_err(|e| FormError::Invalid(validation_messages(&e)))?;

        self.reset();
        info!(email = %user.email, "Registration form submitted");
        Ok(user)
    }

    fn package(&self) -> Result<NewUser, FormError> {
        let text = |field: FieldId| self.value(field).trim().to_string();
        let experience = parse_experience(self.value(FieldId::Experience)).ok_or_else(|| {
            FormError::SubmitDisabled {
                fields: vec![FieldId::Experience],
            }
        })?;
        let contact = Some(text(FieldId::Contact)).filter(|c| !c.is_empty());

        Ok(NewUser {
            first_name: text(FieldId::FirstName),
            last_name: text(FieldId::LastName),
            email: text(FieldId::Email),
            contact,
            department: text(FieldId::Department),
            designation: text(FieldId::Designation),
            experience,
        })
    }

    pub fn reset(&mut self) {
        self.fields = Default::default();
    }
}

impl Component for RegistrationForm {
    type Props = ();
    type Event = FormEvent;
    type Outcome = FormOutcome;
    type Error = FormError;

    const NAME: &'static str = "registration_form";

    fn create(_props: ()) -> Self {
        Self::new()
    }

    fn update(&mut self, event: FormEvent) -> Result<FormOutcome, FormError> {
        match event {
            FormEvent::Change { field, value } => Ok(self.change(field, value)),
            FormEvent::Blur { field } => Ok(self.blur(field)),
            FormEvent::Submit => self.submit().map(FormOutcome::Submitted),
        }
    }

    fn view(&self) -> Node {
        super::view::render(self)
    }
}

use tracing::{debug, instrument};

use crate::component_framework::HostClient;
use crate::domain::{FieldId, NewUser};
use crate::messages::{FormEvent, FormOutcome};
use crate::registration_form::{FormError, RegistrationForm};

/// Client for a registration form hosted on its own, without a list.
#[derive(Clone)]
pub struct FormClient {
    inner: HostClient<RegistrationForm>,
}

impl_basic_client!(FormClient, RegistrationForm, FormError, form);

impl FormClient {
    #[instrument(skip(self, value))]
    pub async fn change(&self, field: FieldId, value: impl Into<String> + Send) -> Result<FormOutcome, FormError> {
        debug!("Sending request");
        self.inner.dispatch(FormEvent::change(field, value)).await
    }

    #[instrument(skip(self))]
    pub async fn blur(&self, field: FieldId) -> Result<FormOutcome, FormError> {
        debug!("Sending request");
        self.inner.dispatch(FormEvent::Blur { field }).await
    }

    /// Types `text` one character at a time and then tabs away, like
    /// [`UsersClient::type_text`](crate::clients::UsersClient::type_text).
    #[instrument(skip(self, text))]
    pub async fn type_text(&self, field: FieldId, text: &str) -> Result<FormOutcome, FormError> {
        let mut value = self.snapshot_form().await?.value(field).to_string();
        for ch in text.chars() {
            value.push(ch);
            self.change(field, value.clone()).await?;
        }
        self.blur(field).await
    }

    /// Clicks the submit control; returns the packaged user.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<NewUser, FormError> {
        debug!("Sending request");
        match self.inner.dispatch(FormEvent::Submit).await? {
            FormOutcome::Submitted(user) => Ok(user),
            other => Err(FormError::Invalid(vec![format!("Unexpected outcome: {:?}", other)])),
        }
    }
}

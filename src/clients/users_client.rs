use tracing::{debug, instrument};

use crate::component_framework::HostClient;
use crate::domain::{FieldId, UserRecord};
use crate::messages::{FormEvent, ListEvent, ListOutcome};
use crate::users_list::{ListError, UsersList};

/// Client for driving a hosted users list.
#[derive(Clone)]
pub struct UsersClient {
    inner: HostClient<UsersList>,
}

impl_basic_client!(UsersClient, UsersList, ListError, users);

impl UsersClient {
    /// Clicks the toggle control; returns whether the form is now visible.
    #[instrument(skip(self))]
    pub async fn toggle_form(&self) -> Result<bool, ListError> {
        debug!("Sending request");
        match self.inner.dispatch(ListEvent::ToggleForm).await? {
            ListOutcome::FormShown => Ok(true),
            ListOutcome::FormHidden => Ok(false),
            other => Err(ListError::UnexpectedOutcome(format!("{:?}", other))),
        }
    }

    #[instrument(skip(self, value))]
    pub async fn change(&self, field: FieldId, value: impl Into<String> + Send) -> Result<ListOutcome, ListError> {
        debug!("Sending request");
        self.inner
            .dispatch(ListEvent::Form(FormEvent::change(field, value)))
            .await
    }

    #[instrument(skip(self))]
    pub async fn blur(&self, field: FieldId) -> Result<ListOutcome, ListError> {
        debug!("Sending request");
        self.inner
            .dispatch(ListEvent::Form(FormEvent::Blur { field }))
            .await
    }

    /// Appends `text` to the field one character at a time, one change
    /// event per keystroke, then tabs away. Same gesture as
    /// [`FormClient::type_text`](crate::clients::FormClient::type_text).
    #[instrument(skip(self, text))]
    pub async fn type_text(&self, field: FieldId, text: &str) -> Result<ListOutcome, ListError> {
        let form = self
            .snapshot_users()
            .await?
            .form()
            .cloned()
            .ok_or(ListError::FormHidden)?;
        let mut value = form.value(field).to_string();
        for ch in text.chars() {
            value.push(ch);
            self.change(field, value.clone()).await?;
        }
        self.blur(field).await
    }

    /// Clicks the submit control; returns the record the list appended.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<UserRecord, ListError> {
        debug!("Sending request");
        match self.inner.dispatch(ListEvent::Form(FormEvent::Submit)).await? {
            ListOutcome::UserAdded { record, .. } => Ok(record),
            other => Err(ListError::UnexpectedOutcome(format!("{:?}", other))),
        }
    }

    #[instrument(skip(self))]
    pub async fn records(&self) -> Result<Vec<UserRecord>, ListError> {
        Ok(self.snapshot_users().await?.records().to_vec())
    }
}

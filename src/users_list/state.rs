use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::error::ListError;
use crate::component_framework::Component;
use crate::domain::{dummy_users, validation_messages, NewUser, UserRecord};
use crate::messages::{FormEvent, FormOutcome, ListEvent, ListOutcome};
use crate::registration_form::{FormError, RegistrationForm};
use crate::view::Node;

/// What happens to the registration form after a successful submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitBehavior {
    #[default]
    HideForm,
    KeepOpen,
}

/// Props accepted by [`UsersList`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListProps {
    /// Pre-seeded records; takes precedence over `set_dummy_data`.
    pub users: Option<Vec<UserRecord>>,
    /// Seed sample records when no `users` are supplied.
    pub set_dummy_data: bool,
    pub submit_behavior: SubmitBehavior,
}

impl Default for ListProps {
    fn default() -> Self {
        Self {
            users: None,
            set_dummy_data: true,
            submit_behavior: SubmitBehavior::default(),
        }
    }
}

/// The users list. Owns the record collection and the registration form,
/// which is mounted only while visible.
#[derive(Debug, Clone, PartialEq)]
pub struct UsersList {
    records: Vec<UserRecord>,
    form: Option<RegistrationForm>,
    next_id: u64,
    submit_behavior: SubmitBehavior,
}

impl UsersList {
    pub fn new(props: ListProps) -> Self {
        let records = match props.users {
            Some(users) => users,
            None if props.set_dummy_data => dummy_users(),
            None => Vec::new(),
        };
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            records,
            form: None,
            next_id,
            submit_behavior: props.submit_behavior,
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn form(&self) -> Option<&RegistrationForm> {
        self.form.as_ref()
    }

    pub fn form_visible(&self) -> bool {
        self.form.is_some()
    }

    /// Flips form visibility. Showing mounts a fresh form, hiding drops it.
    #[instrument(skip(self))]
    pub fn toggle_form(&mut self) -> ListOutcome {
        if self.form.take().is_some() {
            info!("Registration form hidden");
            ListOutcome::FormHidden
        } else {
            self.form = Some(RegistrationForm::new());
            info!("Registration form shown");
            ListOutcome::FormShown
        }
    }

    fn handle_form_event(&mut self, event: FormEvent) -> Result<ListOutcome, ListError> {
        let form = self.form.as_mut().ok_or(ListError::FormHidden)?;
        match form.update(event)? {
            FormOutcome::FieldChecked {
                field,
                check,
                submit_enabled,
            } => Ok(ListOutcome::FieldChecked {
                field,
                check,
                submit_enabled,
            }),
            FormOutcome::Submitted(user) => self.add_user(user),
        }
    }

    /// Appends the submitted user after every existing record.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub fn add_user(&mut self, user: NewUser) -> Result<ListOutcome, ListError> {
        let record = UserRecord::from_new(self.next_id, user)
            .map_err(|e| FormError::Invalid(validation_messages(&e)))?;
        self.next_id += 1;
        self.records.push(record.clone());
        info!(user_id = record.id, total = self.records.len(), "User added");

        if self.submit_behavior == SubmitBehavior::HideForm {
            debug!("Hiding registration form after submit");
            self.form = None;
        }

        Ok(ListOutcome::UserAdded {
            record,
            form_visible: self.form_visible(),
        })
    }
}

impl Component for UsersList {
    type Props = ListProps;
    type Event = ListEvent;
    type Outcome = ListOutcome;
    type Error = ListError;

    const NAME: &'static str = "users_list";

    fn create(props: ListProps) -> Self {
        Self::new(props)
    }

    fn on_mount(&mut self) {
        info!(records = self.records.len(), "Users list mounted");
    }

    fn on_unmount(&mut self) {
        info!(records = self.records.len(), "Users list unmounted, discarding records");
        self.records.clear();
        self.form = None;
    }

    fn update(&mut self, event: ListEvent) -> Result<ListOutcome, ListError> {
        match event {
            ListEvent::ToggleForm => Ok(self.toggle_form()),
            ListEvent::Form(event) => self.handle_form_event(event),
        }
    }

    fn view(&self) -> Node {
        super::view::render(self)
    }
}

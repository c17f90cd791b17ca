use serde::Deserialize;
use validator::Validate;

/// A submitted user as stored and displayed by the users list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub experience: f64,
}

/// Payload packaged by the registration form.
///
/// The users list assigns the identifier when it accepts the payload, see
/// [`UserRecord::from_new`].
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "First Name is required"))]
    pub first_name: String,
    pub last_name: String,
    #[validate(email(message = "Invalid Email"))]
    pub email: String,
    pub contact: Option<String>,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(length(min = 1, message = "Designation is required"))]
    pub designation: String,
    #[validate(range(min = 0.0, message = "Experience is required"))]
    pub experience: f64,
}

impl NewUser {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl UserRecord {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            contact: None,
            department: String::new(),
            designation: String::new(),
            experience: 0.0,
        }
    }

    /// Builds the stored record once the payload passes validation.
    pub fn from_new(id: u64, user: NewUser) -> Result<Self, validator::ValidationErrors> {
        user.validate()?;
        Ok(Self {
            id,
            name: user.full_name(),
            email: user.email,
            contact: user.contact,
            department: user.department,
            designation: user.designation,
            experience: user.experience,
        })
    }
}

/// Sample rows shown when the list is mounted without data and dummy data
/// is enabled.
pub fn dummy_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: 1,
            name: "Ravi".to_string(),
            email: "ravi@gmail.com".to_string(),
            contact: None,
            department: "Engineering".to_string(),
            designation: "Developer".to_string(),
            experience: 2.0,
        },
        UserRecord {
            id: 2,
            name: "Ravi".to_string(),
            email: "ravi@gmail.com".to_string(),
            contact: Some("1234567890".to_string()),
            department: "Engineering".to_string(),
            designation: "Tester".to_string(),
            experience: 3.0,
        },
    ]
}

/// Flattens validator errors into their messages, field by field in a
/// stable order.
pub fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .into_iter()
        .flat_map(|(_, errors)| {
            errors.iter().map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| "Validation error".to_string())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> NewUser {
        NewUser {
            first_name: "First".to_string(),
            last_name: "Name".to_string(),
            email: "first@name.com".to_string(),
            contact: None,
            department: "department".to_string(),
            designation: "designation".to_string(),
            experience: 2.0,
        }
    }

    #[test]
    fn full_name_skips_blank_parts() {
        let mut user = valid_payload();
        assert_eq!(user.full_name(), "First Name");
        user.last_name = "  ".to_string();
        assert_eq!(user.full_name(), "First");
    }

    #[test]
    fn record_from_valid_payload() {
        let record = UserRecord::from_new(7, valid_payload()).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.name, "First Name");
        assert_eq!(record.email, "first@name.com");
        assert_eq!(record.contact, None);
        assert_eq!(record.experience, 2.0);
    }

    #[test]
    fn invalid_payload_is_rejected_with_field_messages() {
        let mut user = valid_payload();
        user.email = "first@".to_string();
        user.department = String::new();
        let errors = UserRecord::from_new(1, user).unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            vec!["Department is required".to_string(), "Invalid Email".to_string()]
        );
    }

    #[test]
    fn dummy_users_have_sequential_ids() {
        let users = dummy_users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[1].id, 2);
    }
}

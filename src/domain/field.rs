use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use validator::ValidateEmail;

/// Inputs of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Contact,
    Department,
    Designation,
    Experience,
}

/// How a field's value is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Optional,
    Required,
    Email,
    NonNegativeNumber,
}

/// Outcome of checking one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    Valid,
    Invalid { message: String },
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl FieldId {
    pub const COUNT: usize = 7;

    pub const ALL: [FieldId; FieldId::COUNT] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Contact,
        FieldId::Department,
        FieldId::Designation,
        FieldId::Experience,
    ];

    /// Human name used in labels and messages.
    pub fn display_name(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email",
            FieldId::Contact => "Contact",
            FieldId::Department => "Department",
            FieldId::Designation => "Designation",
            FieldId::Experience => "Experience",
        }
    }

    /// Element id of the rendered input.
    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::FirstName => "first-name",
            FieldId::LastName => "last-name",
            FieldId::Email => "email",
            FieldId::Contact => "contact",
            FieldId::Department => "department",
            FieldId::Designation => "designation",
            FieldId::Experience => "experience",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Contact => "tel",
            FieldId::Experience => "number",
            _ => "text",
        }
    }

    pub fn rule(self) -> FieldRule {
        match self {
            FieldId::LastName | FieldId::Contact => FieldRule::Optional,
            FieldId::Email => FieldRule::Email,
            FieldId::Experience => FieldRule::NonNegativeNumber,
            FieldId::FirstName | FieldId::Department | FieldId::Designation => {
                FieldRule::Required
            }
        }
    }

    pub fn is_required(self) -> bool {
        self.rule() != FieldRule::Optional
    }

    /// Label text; required fields carry a leading `*`.
    pub fn label(self) -> String {
        if self.is_required() {
            format!("*{}:", self.display_name())
        } else {
            format!("{}:", self.display_name())
        }
    }

    /// Checks `value` against this field's rule.
    pub fn check(self, value: &str) -> FieldCheck {
        let value = value.trim();
        let ok = match self.rule() {
            FieldRule::Optional => true,
            FieldRule::Required => !value.is_empty(),
            FieldRule::Email => String::from(value).validate_email(),
            FieldRule::NonNegativeNumber => parse_experience(value).is_some(),
        };
        if ok {
            FieldCheck::Valid
        } else {
            FieldCheck::Invalid {
                message: self.error_message(),
            }
        }
    }

    fn error_message(self) -> String {
        match self.rule() {
            FieldRule::Email => "Invalid Email".to_string(),
            _ => format!("{} is required", self.display_name()),
        }
    }
}

/// Parses a number input the way a browser does: anything that is not a
/// finite number reads as empty. `-0` comes back as `0.0`.
pub fn parse_experience(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|years| years.is_finite() && *years >= 0.0)
        .map(f64::abs)
}

impl FieldCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldCheck::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldCheck::Valid => None,
            FieldCheck::Invalid { message } => Some(message),
        }
    }
}

/// Folds per-field checks into the submit-enabled flag.
pub fn all_valid<'a, I>(checks: I) -> bool
where
    I: IntoIterator<Item = &'a FieldCheck>,
{
    checks.into_iter().fold(true, |acc, check| acc && check.is_valid())
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        FieldId::ALL
            .into_iter()
            .find(|field| field.dom_id().replace('-', "") == normalized)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

//! Runtime configuration, read from an optional TOML file.
//!
//! The file path comes from the `USERS_UI_CONFIG` environment variable.
//! Every key is optional:
//!
//! ```toml
//! log_filter = "info,users_ui=debug"
//! mailbox_size = 32
//! set_dummy_data = true
//! submit_behavior = "hide_form"   # or "keep_open"
//!
//! [[users]]
//! id = 1
//! name = "Asha Rao"
//! email = "asha@example.com"
//! department = "Engineering"
//! designation = "Developer"
//! experience = 4.0
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::UserRecord;
use crate::users_list::{ListProps, SubmitBehavior};

pub const CONFIG_ENV_VAR: &str = "USERS_UI_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("mailbox_size must be at least 1")]
    ZeroMailbox,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Fallback filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Capacity of the component host mailbox.
    pub mailbox_size: usize,
    pub set_dummy_data: bool,
    pub submit_behavior: SubmitBehavior,
    pub users: Option<Vec<UserRecord>>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            mailbox_size: 32,
            set_dummy_data: true,
            submit_behavior: SubmitBehavior::default(),
            users: None,
        }
    }
}

impl UiConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        if config.mailbox_size == 0 {
            return Err(ConfigError::ZeroMailbox);
        }
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Loads the file named by `USERS_UI_CONFIG`, or the defaults when the
    /// variable is unset.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from_file(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn list_props(&self) -> ListProps {
        ListProps {
            users: self.users.clone(),
            set_dummy_data: self.set_dummy_data,
            submit_behavior: self.submit_behavior,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_yields_defaults() {
        let config = UiConfig::from_toml_str("").unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.list_props(), ListProps::default());
    }

    #[test]
    fn parses_users_and_behavior() {
        let config = UiConfig::from_toml_str(
            r#"
            log_filter = "debug"
            set_dummy_data = false
            submit_behavior = "keep_open"

            [[users]]
            id = 7
            name = "Asha Rao"
            email = "asha@example.com"
            department = "Engineering"
            designation = "Developer"
            experience = 4.0
            "#,
        )
        .unwrap();

        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.mailbox_size, 32);
        assert_eq!(config.submit_behavior, SubmitBehavior::KeepOpen);
        let users = config.users.as_ref().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 7);
        assert_eq!(users[0].contact, None);
        assert!(!config.list_props().set_dummy_data);
    }

    #[test]
    fn rejects_unknown_keys_and_zero_mailbox() {
        assert!(matches!(
            UiConfig::from_toml_str("colour = \"blue\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            UiConfig::from_toml_str("mailbox_size = 0"),
            Err(ConfigError::ZeroMailbox)
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = UiConfig::load_from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}

use thiserror::Error;

use super::config::ConfigError;
use crate::users_list::ListError;

/// Top-level error returned from `main`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    List(#[from] ListError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Component task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

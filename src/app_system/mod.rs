//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod users_system;

pub use config::*;
pub use error::*;
pub use telemetry::*;
pub use users_system::*;

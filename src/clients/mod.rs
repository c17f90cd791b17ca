//! Typed clients over component hosts. Each client wraps a [`HostClient`]
//! and turns user gestures (typing, clicking) into events.
//!
//! [`HostClient`]: crate::component_framework::HostClient

#[macro_use]
mod macros;
mod form_client;
mod users_client;

pub use form_client::*;
pub use users_client::*;

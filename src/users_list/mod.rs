//! Users list: the record table, the toggle control and the composed
//! registration form.

pub mod error;
mod state;
pub mod view;

pub use error::*;
pub use state::*;

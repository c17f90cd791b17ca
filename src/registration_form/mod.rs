//! Registration form: labelled inputs, per-field validation and a submit
//! control that is enabled only while every required field is valid.

pub mod error;
mod state;
pub mod view;

pub use error::*;
pub use state::*;

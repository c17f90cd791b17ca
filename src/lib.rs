//! A users registration form and users list, driven as components on an
//! actor-style host and rendered to a queryable tree.

pub mod component_framework;
pub mod domain;
pub mod messages;
pub mod view;

pub mod registration_form;
pub mod users_list;

pub mod clients;

pub mod app_system;
pub mod console;

#[cfg(test)]
mod mock_framework;

//! Line-oriented driver that stands in for a browser: each input line is
//! one user gesture against the hosted users list.

mod command;
mod driver;

pub use command::*;
pub use driver::*;

pub mod field;
pub mod user;

pub use field::*;
pub use user::*;

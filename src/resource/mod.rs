//! Registration domain types: the [`User`] record and its field value objects.

pub mod user;
pub mod value_objects;

pub use user::User;
pub use value_objects::{EmailAddress, Password, UserName};

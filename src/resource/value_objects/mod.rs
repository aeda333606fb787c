//! Value objects for registration fields.
//!
//! Each value object enforces its format rule at construction time, making an
//! invalid username, password or email unrepresentable once inside a [`User`].
//!
//! [`User`]: crate::resource::User
//!
//! ```rust
//! use user_registration::resource::value_objects::{EmailAddress, Password, UserName};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let username = UserName::try_from("testuser")?;
//!     let password = Password::try_from("password123!")?;
//!     let email = EmailAddress::try_from("testuser@example.com")?;
//!
//!     println!("{} <{}>", username, email);
//!     # let _ = password;
//!     Ok(())
//! }
//! ```
mod email_address;
mod password;
mod user_name;

pub use email_address::EmailAddress;
pub use password::Password;
pub use user_name::UserName;

pub(crate) use user_name::normalize as normalize_username;

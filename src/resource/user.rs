//! Registered user record.

use crate::resource::value_objects::{EmailAddress, Password, UserName};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A registered user.
///
/// Built only from validated value objects and never modified after creation.
/// The password is kept as submitted and is skipped when serializing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: Uuid,
    username: UserName,
    #[serde(skip_serializing)]
    password: Password,
    email: EmailAddress,
    registered_at: DateTime<Utc>,
}

impl User {
    /// Create a user record with a fresh id and the current time.
    pub fn new(username: UserName, password: Password, email: EmailAddress) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password,
            email,
            registered_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &UserName {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

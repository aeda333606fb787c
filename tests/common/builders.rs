//! Test data builders for registration requests.
//!
//! The builder starts from a request that registers successfully, so each test
//! changes only the field it is about.

use user_registration::{RegistrationOutcome, RegistrationService, UserStore};

/// A username/password/email triple to submit for registration.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl RegistrationRequest {
    /// Submit through the boolean API.
    pub fn register<S: UserStore>(&self, service: &mut RegistrationService<S>) -> bool {
        service.register_user(&self.username, &self.password, &self.email)
    }

    /// Submit and get the outcome value.
    pub fn outcome<S: UserStore>(
        &self,
        service: &mut RegistrationService<S>,
    ) -> RegistrationOutcome {
        service.register_user_with_outcome(&self.username, &self.password, &self.email)
    }
}

/// Builder for registration requests with fluent API
#[derive(Debug, Clone)]
pub struct RegistrationRequestBuilder {
    request: RegistrationRequest,
}

impl RegistrationRequestBuilder {
    /// Create a builder for a valid request
    pub fn new() -> Self {
        Self {
            request: RegistrationRequest {
                username: "testuser".to_string(),
                password: "password123!".to_string(),
                email: "testuser@example.com".to_string(),
            },
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.request.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.request.password = password.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.request.email = email.into();
        self
    }

    /// Empty username
    pub fn without_username(self) -> Self {
        self.username("")
    }

    /// Password long enough but with no special character
    pub fn without_special_character(self) -> Self {
        self.password("password123")
    }

    pub fn build(self) -> RegistrationRequest {
        self.request
    }
}

impl Default for RegistrationRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! In-memory user store.
//!
//! Users are kept in a `Vec` in insertion order, with a `HashMap` from the
//! lower-cased username to the user's position for constant-time duplicate
//! checks and lookups.
//!
//! # Performance Characteristics
//!
//! * INSERT/CONTAINS/GET: O(1) average case plus username lower-casing
//! * USERS: O(n) iteration in insertion order

use crate::resource::User;
use crate::resource::value_objects::normalize_username;
use crate::storage::{StorageError, UserStore};
use log::trace;
use std::collections::HashMap;

/// In-memory store owned by a single registration service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Vec<User>,
    // lower-cased username -> index into `users`
    index: HashMap<String, usize>,
}

impl InMemoryUserStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn contains_username(&self, username: &str) -> bool {
        self.index.contains_key(&normalize_username(username))
    }

    fn insert(&mut self, user: User) -> Result<(), StorageError> {
        let key = user.username().normalized();
        if self.index.contains_key(&key) {
            return Err(StorageError::duplicate_username(user.username().as_str()));
        }

        trace!("Storing user '{}' at position {}", key, self.users.len());
        self.index.insert(key, self.users.len());
        self.users.push(user);
        Ok(())
    }

    fn get(&self, username: &str) -> Option<&User> {
        self.index
            .get(&normalize_username(username))
            .and_then(|&position| self.users.get(position))
    }

    fn users(&self) -> Box<dyn Iterator<Item = &User> + '_> {
        Box::new(self.users.iter())
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}

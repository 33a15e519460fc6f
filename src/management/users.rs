use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use crate::error::UserStoreError;

/// Credential storage for signed-up users.
///
/// Passwords are compared verbatim; the store does not hash them.
pub trait UserStore: Send + Sync {
    /// Registers a new user.
    /// Returns Err if the username is taken or either field is empty.
    fn create_user(&self, username: &str, password: &str) -> Result<(), UserStoreError>;

    /// Returns true if the user exists and the password matches.
    fn verify(&self, username: &str, password: &str) -> bool;

    fn contains(&self, username: &str) -> bool;
}

/// Users kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, String>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl UserStore for InMemoryUserStore {
    fn create_user(&self, username: &str, password: &str) -> Result<(), UserStoreError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(UserStoreError::InvalidInput);
        }

        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users.contains_key(username) {
            return Err(UserStoreError::AlreadyExists(username.to_string()));
        }
        users.insert(username.to_string(), password.to_string());
        Ok(())
    }

    fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(username.trim())
            .is_some_and(|stored| stored == password)
    }

    fn contains(&self, username: &str) -> bool {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(username.trim())
    }
}

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use rand::{Rng, distr::Alphanumeric};

pub const SESSION_COOKIE: &str = "session";
const SESSION_TOKEN_LEN: usize = 64;

/// Maps session tokens to logged-in usernames.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session for `username` and returns its token.
    pub fn create(&self, username: &str) -> String {
        let token = generate_session_token();
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), username.to_string());
        token
    }

    pub fn user(&self, token: &str) -> Option<String> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    /// Ends a session. Returns the user it belonged to, if any.
    pub fn remove(&self, token: &str) -> Option<String> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
    }

    pub fn count(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

pub fn generate_session_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LEN)
        .map(char::from)
        .collect()
}

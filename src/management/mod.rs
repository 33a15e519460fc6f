mod auth;
mod sessions;
mod users;

pub use auth::TokenManager;
pub use sessions::{SESSION_COOKIE, SessionStore, generate_session_token};
pub use users::{InMemoryUserStore, UserStore};

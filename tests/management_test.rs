use chrono::Utc;
use sporlweb::error::UserStoreError;
use sporlweb::management::*;
use sporlweb::spotify::auth::basic_auth_header;
use sporlweb::types::Token;

#[test]
fn test_user_signup_and_verify() {
    let users = InMemoryUserStore::new();

    assert!(users.create_user("alice", "secret").is_ok());
    assert!(users.contains("alice"));
    assert!(users.verify("alice", "secret"));
    assert!(!users.verify("alice", "wrong"));
    assert!(!users.verify("bob", "secret"));
    assert_eq!(users.count(), 1);
}

#[test]
fn test_user_signup_rejects_duplicates() {
    let users = InMemoryUserStore::new();
    users.create_user("alice", "secret").unwrap();

    assert_eq!(
        users.create_user("alice", "other"),
        Err(UserStoreError::AlreadyExists("alice".to_string()))
    );
    // the original password still works
    assert!(users.verify("alice", "secret"));
}

#[test]
fn test_user_signup_rejects_empty_input() {
    let users = InMemoryUserStore::new();

    assert_eq!(users.create_user("", "secret"), Err(UserStoreError::InvalidInput));
    assert_eq!(users.create_user("   ", "secret"), Err(UserStoreError::InvalidInput));
    assert_eq!(users.create_user("alice", ""), Err(UserStoreError::InvalidInput));
    assert_eq!(users.count(), 0);
}

#[test]
fn test_user_names_are_trimmed() {
    let users = InMemoryUserStore::new();
    users.create_user("  alice ", "secret").unwrap();

    assert!(users.verify("alice", "secret"));
    assert!(users.verify(" alice", "secret"));
}

#[test]
fn test_sessions_lifecycle() {
    let sessions = SessionStore::new();

    let token = sessions.create("alice");
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(sessions.user(&token), Some("alice".to_string()));
    assert_eq!(sessions.count(), 1);

    assert_eq!(sessions.remove(&token), Some("alice".to_string()));
    assert_eq!(sessions.user(&token), None);
    assert_eq!(sessions.remove(&token), None);
    assert_eq!(sessions.count(), 0);
}

#[test]
fn test_sessions_are_independent() {
    let sessions = SessionStore::new();

    let first = sessions.create("alice");
    let second = sessions.create("alice");
    assert_ne!(first, second);

    sessions.remove(&first);
    assert_eq!(sessions.user(&second), Some("alice".to_string()));
    assert_eq!(sessions.user("unknown"), None);
}

#[test]
fn test_generate_session_token() {
    let token = generate_session_token();
    assert_eq!(token.len(), 64);
    assert_ne!(token, generate_session_token());
}

#[test]
fn test_token_expiry() {
    let now = Utc::now().timestamp() as u64;

    let fresh = Token {
        access_token: "fresh".to_string(),
        expires_in: 3600,
        obtained_at: now,
    };
    assert!(!TokenManager::is_expired(&fresh));

    // inside the refresh buffer
    let stale = Token {
        access_token: "stale".to_string(),
        expires_in: 3600,
        obtained_at: now - 3500,
    };
    assert!(TokenManager::is_expired(&stale));

    let manager = TokenManager::new(Some(fresh));
    assert_eq!(manager.current_token().unwrap().access_token, "fresh");
    assert!(TokenManager::default().current_token().is_none());
}

#[test]
fn test_basic_auth_header() {
    // base64("id:secret")
    assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");
}

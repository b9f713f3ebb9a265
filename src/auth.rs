//! Authentication
//!
//! Credential checks against a statically seeded admin pair and a list of
//! registered customers persisted in browser local storage. The stored list
//! is read on demand and rewritten wholesale on each registration.
//!
//! Demo only: passwords are kept in plain text in the browser and never
//! leave it. Not suitable for anything beyond a demo deployment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage slot holding the serialized user list.
pub const USERS_STORAGE_KEY: &str = "dinesight_users";

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

/// Role resolved by a successful login. Not persisted across reloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Customer,
    Admin,
}

/// Authentication and registration failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// Another stored record already uses this username
    #[error("That username is already taken")]
    DuplicateUsername,

    /// No record matches the given role, username and password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Browser storage could not be reached
    #[error("Browser storage is unavailable")]
    StorageUnavailable,
}

/// A registered customer account.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Append `record` to `users`, enforcing username uniqueness.
///
/// `users` is left untouched when the username collides.
pub fn register_user(users: &mut Vec<UserRecord>, record: UserRecord) -> Result<(), AuthError> {
    if users.iter().any(|u| u.username == record.username) {
        return Err(AuthError::DuplicateUsername);
    }
    users.push(record);
    Ok(())
}

/// Check credentials for `role` against the seeded admin pair or `users`.
pub fn authenticate(
    users: &[UserRecord],
    role: Role,
    username: &str,
    password: &str,
) -> Result<Role, AuthError> {
    let matched = match role {
        Role::Admin => username == ADMIN_USERNAME && password == ADMIN_PASSWORD,
        Role::Customer => users
            .iter()
            .any(|u| u.username == username && u.password == password),
    };
    if matched {
        Ok(role)
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

fn storage() -> Result<web_sys::Storage, AuthError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(AuthError::StorageUnavailable)
}

/// Read the persisted user list. An absent or corrupt slot reads as empty.
pub fn load_users() -> Result<Vec<UserRecord>, AuthError> {
    let storage = storage()?;
    let raw = storage
        .get_item(USERS_STORAGE_KEY)
        .map_err(|_| AuthError::StorageUnavailable)?;
    match raw {
        Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
        None => Ok(Vec::new()),
    }
}

fn save_users(users: &[UserRecord]) -> Result<(), AuthError> {
    let storage = storage()?;
    let raw = serde_json::to_string(users).map_err(|_| AuthError::StorageUnavailable)?;
    storage
        .set_item(USERS_STORAGE_KEY, &raw)
        .map_err(|_| AuthError::StorageUnavailable)
}

/// Register a new customer and persist the updated list.
///
/// Storage is only written after the uniqueness check passes.
pub fn register(record: UserRecord) -> Result<(), AuthError> {
    let mut users = load_users()?;
    register_user(&mut users, record)?;
    save_users(&users)
}

/// Resolve a login attempt. Admin logins never touch the stored list.
pub fn login(role: Role, username: &str, password: &str) -> Result<Role, AuthError> {
    let users = match role {
        Role::Customer => load_users()?,
        Role::Admin => Vec::new(),
    };
    authenticate(&users, role, username, password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, password: &str) -> UserRecord {
        UserRecord {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn register_rejects_duplicate_username_without_mutating() {
        let mut users = vec![user("asha", "pw1")];
        let before = users.clone();

        let result = register_user(&mut users, user("asha", "pw2"));

        assert_eq!(result, Err(AuthError::DuplicateUsername));
        assert_eq!(users, before);
    }

    #[test]
    fn register_appends_new_username() {
        let mut users = vec![user("asha", "pw1")];
        register_user(&mut users, user("ravi", "pw2")).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].username, "ravi");
    }

    #[test]
    fn admin_login_requires_exact_seeded_pair() {
        assert_eq!(
            authenticate(&[], Role::Admin, "admin", "admin123"),
            Ok(Role::Admin)
        );
        assert_eq!(
            authenticate(&[], Role::Admin, "admin", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn customer_login_matches_stored_record_exactly() {
        let users = vec![user("asha", "pw1")];
        assert_eq!(
            authenticate(&users, Role::Customer, "asha", "pw1"),
            Ok(Role::Customer)
        );
        assert_eq!(
            authenticate(&users, Role::Customer, "asha", "PW1"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            authenticate(&users, Role::Customer, "admin", "admin123"),
            Err(AuthError::InvalidCredentials)
        );
    }
}

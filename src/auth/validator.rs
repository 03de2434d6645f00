//! Login validator
//!
//! Checks a submitted username, password and claimed role against the
//! directory. Passwords are stored and compared as plaintext.

use crate::directory::Directory;
use crate::error::AuthError;
use crate::user::UserRecord;

/// A submitted login form.
///
/// `role` is the role the user claims, as typed; it must equal the stored
/// role's wire name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl LoginRequest {
    pub fn new(username: &str, password: &str, role: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        }
    }
}

/// Validates a login, returning the matching record.
pub fn login<'d>(
    directory: &'d Directory,
    request: &LoginRequest,
) -> Result<&'d UserRecord, AuthError> {
    if request.username.is_empty() || request.password.is_empty() || request.role.is_empty() {
        return Err(AuthError::MissingFields);
    }

    let user = directory
        .get(&request.username)
        .ok_or_else(|| AuthError::UnknownUser(request.username.clone()))?;

    if user.password != request.password {
        return Err(AuthError::WrongPassword(request.username.clone()));
    }

    if user.role.as_str() != request.role {
        return Err(AuthError::RoleMismatch {
            username: request.username.clone(),
            role: request.role.clone(),
        });
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Role;

    #[test]
    fn seeded_faculty_logs_in() {
        let dir = Directory::seeded();
        let user = login(&dir, &LoginRequest::new("faculty1", "faculty123", "faculty")).unwrap();
        assert_eq!(user.role, Role::Faculty);
        assert_eq!(user.name, "Dr. John Smith");
    }

    #[test]
    fn wrong_password() {
        let dir = Directory::seeded();
        let err = login(&dir, &LoginRequest::new("faculty1", "wrongpass", "faculty")).unwrap_err();
        assert_eq!(err, AuthError::WrongPassword("faculty1".into()));
        assert_eq!(err.to_string(), "Invalid password");
    }

    #[test]
    fn role_mismatch_names_user_and_role() {
        let dir = Directory::seeded();
        let err = login(&dir, &LoginRequest::new("faculty1", "faculty123", "dean")).unwrap_err();
        assert!(matches!(err, AuthError::RoleMismatch { .. }));
        let msg = err.to_string();
        assert!(msg.contains("faculty1"));
        assert!(msg.contains("dean"));
    }

    #[test]
    fn unknown_user() {
        let dir = Directory::seeded();
        let err = login(&dir, &LoginRequest::new("nobody", "whatever", "dean")).unwrap_err();
        assert_eq!(err, AuthError::UnknownUser("nobody".into()));
    }

    #[test]
    fn any_blank_field_is_missing_fields() {
        let dir = Directory::seeded();
        for req in [
            LoginRequest::new("", "faculty123", "faculty"),
            LoginRequest::new("faculty1", "", "faculty"),
            LoginRequest::new("faculty1", "faculty123", ""),
        ] {
            assert_eq!(login(&dir, &req).unwrap_err(), AuthError::MissingFields);
        }
    }

    #[test]
    fn password_checked_before_role() {
        let dir = Directory::seeded();
        let err = login(&dir, &LoginRequest::new("dean1", "bad", "faculty")).unwrap_err();
        assert_eq!(err, AuthError::WrongPassword("dean1".into()));
    }
}

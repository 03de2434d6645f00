//! Registration field rules
//!
//! Checks that need nothing but the submitted form. Directory checks
//! (duplicate username and employee id) live in `registrar::register`.

use std::fmt;

use crate::error::ValidationError;
use crate::registrar::RegisterRequest;
use crate::user::Role;

/// Checks a `local@domain.tld` shape: one `@`, no whitespace, and a dot in
/// the domain with text on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Runs the form-only rules in order, stopping at the first failure.
///
/// Returns the chosen role once every rule passes.
pub fn check_fields(
    request: &RegisterRequest,
    min_password_length: usize,
) -> Result<Role, ValidationError> {
    let required = [
        ("fullName", request.full_name.as_str()),
        ("email", request.email.as_str()),
        ("username", request.username.as_str()),
        ("password", request.password.as_str()),
        ("confirmPassword", request.confirm_password.as_str()),
        ("employeeId", request.employee_id.as_str()),
    ];

    if let Some((name, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(ValidationError::MissingField(*name));
    }

    let Some(role) = request.role else {
        return Err(ValidationError::MissingField("role"));
    };

    if request.password.chars().count() < min_password_length {
        return Err(ValidationError::WeakPassword {
            min_length: min_password_length,
        });
    }

    if request.password != request.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    if role.requires_department() && request.department.as_deref().unwrap_or("").is_empty() {
        return Err(ValidationError::MissingDepartment);
    }

    if !is_valid_email(&request.email) {
        return Err(ValidationError::InvalidEmail(request.email.clone()));
    }

    Ok(role)
}

/// Coarse password strength, as shown next to the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        match password.chars().count() {
            n if n >= 12 => PasswordStrength::Strong,
            n if n >= 8 => PasswordStrength::Medium,
            _ => PasswordStrength::Weak,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        };
        write!(f, "{}", token)
    }
}

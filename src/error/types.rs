//! Error types
//!
//! Defines domain-specific error types for each part of the portal.

use std::fmt;
use std::io;

/// Registration form errors
#[derive(Debug, PartialEq)]
pub enum ValidationError {
    MissingField(&'static str),
    InvalidRole(String),
    WeakPassword { min_length: usize },
    PasswordMismatch,
    MissingDepartment,
    InvalidEmail(String),
    DuplicateUsername(String),
    DuplicateEmployeeId(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(_) => write!(f, "Please fill in all required fields."),
            ValidationError::InvalidRole(r) => write!(f, "{:?} is not a valid role.", r),
            ValidationError::WeakPassword { min_length } => write!(
                f,
                "Password must be at least {} characters long.",
                min_length
            ),
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match."),
            ValidationError::MissingDepartment => write!(f, "Please select a department."),
            ValidationError::InvalidEmail(_) => write!(f, "Please enter a valid email address."),
            ValidationError::DuplicateUsername(_) => write!(
                f,
                "Username already exists. Please choose a different username."
            ),
            ValidationError::DuplicateEmployeeId(_) => write!(
                f,
                "Employee ID already registered. Please check your Employee ID."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Login errors
#[derive(Debug, PartialEq)]
pub enum AuthError {
    MissingFields,
    UnknownUser(String),
    WrongPassword(String),
    RoleMismatch { username: String, role: String },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingFields => write!(f, "Please fill in all fields"),
            AuthError::UnknownUser(_) => write!(f, "Invalid username"),
            AuthError::WrongPassword(_) => write!(f, "Invalid password"),
            AuthError::RoleMismatch { username, role } => {
                write!(f, "User {} is not registered as {}", username, role)
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Dashboard lookup errors
#[derive(Debug, PartialEq)]
pub enum DashboardError {
    UnknownRole(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::UnknownRole(r) => write!(f, "No dashboard for role: {}", r),
        }
    }
}

impl std::error::Error for DashboardError {}

/// Session lifecycle errors
#[derive(Debug, PartialEq)]
pub enum SessionError {
    NotLoggedIn,
    UnknownFeature(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotLoggedIn => write!(f, "User not logged in"),
            SessionError::UnknownFeature(name) => {
                write!(f, "Feature not on your dashboard: {}", name)
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Key-value store errors
#[derive(Debug)]
pub enum StoreError {
    IoError(io::Error),
    Corrupt { key: String, source: serde_json::Error },
    Encode(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
            StoreError::Corrupt { key, source } => {
                write!(f, "Stored value under {:?} is unreadable: {}", key, source)
            }
            StoreError::Encode(e) => write!(f, "Unable to serialize value: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::IoError(e) => Some(e),
            StoreError::Corrupt { source, .. } => Some(source),
            StoreError::Encode(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::IoError(error)
    }
}

/// General portal error that encompasses all error types
#[derive(Debug)]
pub enum PortalError {
    Validation(ValidationError),
    Auth(AuthError),
    Dashboard(DashboardError),
    Session(SessionError),
    Store(StoreError),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::Validation(e) => write!(f, "{}", e),
            PortalError::Auth(e) => write!(f, "{}", e),
            PortalError::Dashboard(e) => write!(f, "{}", e),
            PortalError::Session(e) => write!(f, "{}", e),
            PortalError::Store(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for PortalError {}

impl From<ValidationError> for PortalError {
    fn from(error: ValidationError) -> Self {
        PortalError::Validation(error)
    }
}

impl From<AuthError> for PortalError {
    fn from(error: AuthError) -> Self {
        PortalError::Auth(error)
    }
}

impl From<DashboardError> for PortalError {
    fn from(error: DashboardError) -> Self {
        PortalError::Dashboard(error)
    }
}

impl From<SessionError> for PortalError {
    fn from(error: SessionError) -> Self {
        PortalError::Session(error)
    }
}

impl From<StoreError> for PortalError {
    fn from(error: StoreError) -> Self {
        PortalError::Store(error)
    }
}

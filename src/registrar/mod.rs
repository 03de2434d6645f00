//! Registration
//!
//! Validates a new-user submission against the field rules and the
//! directory, then inserts and persists it.

pub mod request;
pub mod validation;

pub use request::RegisterRequest;
pub use validation::{PasswordStrength, is_valid_email};

use log::{error, info};

use crate::config::PortalConfig;
use crate::directory::Directory;
use crate::error::{PortalError, ValidationError};
use crate::storage::KeyValueStore;
use crate::user::UserRecord;

/// Registers a new user.
///
/// Checks run in a fixed order and stop at the first failure: field
/// rules, then username, then employee id. On success the whole directory
/// is written back under the configured users key. If that write fails
/// the new record is taken out again, so nothing unpersisted remains.
pub fn register(
    directory: &mut Directory,
    store: &mut dyn KeyValueStore,
    config: &PortalConfig,
    request: RegisterRequest,
) -> Result<UserRecord, PortalError> {
    let role = validation::check_fields(&request, config.policy.min_password_length)?;

    if directory.contains(&request.username) {
        return Err(ValidationError::DuplicateUsername(request.username).into());
    }

    if directory.find_by_employee_id(&request.employee_id).is_some() {
        return Err(ValidationError::DuplicateEmployeeId(request.employee_id).into());
    }

    let department = if role.requires_department() {
        request.department
    } else {
        None
    };

    let record = UserRecord {
        username: request.username,
        password: request.password,
        role,
        name: request.full_name,
        department,
        email: request.email,
        employee_id: request.employee_id,
    };

    directory.insert(record.clone());
    if let Err(e) = directory.save(store, &config.storage.users_key) {
        error!("Failed to persist new user {}: {}", record.username, e);
        directory.remove(&record.username);
        return Err(e.into());
    }

    info!(
        "Registered {} as {} (employee {})",
        record.username, record.role, record.employee_id
    );
    Ok(record)
}

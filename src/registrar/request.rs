//! Registration request
//!
//! The statically shaped registration form, plus conversion from the flat
//! field-name-to-value mapping the form boundary hands over.

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::user::Role;

/// A submitted registration form.
///
/// Empty strings stand for fields left blank; `role` is `None` when no
/// role was picked. `department` is ignored for deans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
    pub department: Option<String>,
    pub employee_id: String,
}

impl RegisterRequest {
    /// Builds a request from form fields keyed `fullName`, `email`,
    /// `username`, `password`, `confirmPassword`, `role`, `department` and
    /// `employeeId`. Unknown keys are ignored.
    ///
    /// Fails only when a non-empty role is not one of the known roles.
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let field = |name: &str| form.get(name).cloned().unwrap_or_default();

        let role = match form.get("role").map(String::as_str) {
            None | Some("") => None,
            Some(s) => Some(
                s.parse::<Role>()
                    .map_err(|_| ValidationError::InvalidRole(s.to_string()))?,
            ),
        };

        let department = form.get("department").filter(|d| !d.is_empty()).cloned();

        Ok(Self {
            full_name: field("fullName"),
            email: field("email"),
            username: field("username"),
            password: field("password"),
            confirm_password: field("confirmPassword"),
            role,
            department,
            employee_id: field("employeeId"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn maps_form_keys_to_fields() {
        let req = RegisterRequest::from_form(&form(&[
            ("fullName", "Ada Lovelace"),
            ("email", "ada@uni.edu"),
            ("username", "ada"),
            ("password", "longenough1"),
            ("confirmPassword", "longenough1"),
            ("role", "department_head"),
            ("department", "Mathematics"),
            ("employeeId", "DH777"),
        ]))
        .unwrap();

        assert_eq!(req.full_name, "Ada Lovelace");
        assert_eq!(req.confirm_password, "longenough1");
        assert_eq!(req.role, Some(Role::DepartmentHead));
        assert_eq!(req.department.as_deref(), Some("Mathematics"));
        assert_eq!(req.employee_id, "DH777");
    }

    #[test]
    fn blank_role_and_department_become_none() {
        let req =
            RegisterRequest::from_form(&form(&[("role", ""), ("department", "")])).unwrap();
        assert_eq!(req.role, None);
        assert_eq!(req.department, None);
        assert!(req.username.is_empty());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = RegisterRequest::from_form(&form(&[("role", "provost")])).unwrap_err();
        assert_eq!(err, ValidationError::InvalidRole("provost".into()));
    }
}

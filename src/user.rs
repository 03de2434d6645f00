//! Portal users
//!
//! Defines the `Role` enum and the `UserRecord` stored in the directory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Staff roles known to the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Faculty,
    DepartmentHead,
    Dean,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Faculty, Role::DepartmentHead, Role::Dean];

    /// Wire name, as stored and as typed on the login form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Faculty => "faculty",
            Role::DepartmentHead => "department_head",
            Role::Dean => "dean",
        }
    }

    /// Label shown on the dashboard, e.g. `DEPARTMENT HEAD`.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_ascii_uppercase()
    }

    /// Whether a department must accompany this role.
    pub fn requires_department(&self) -> bool {
        !matches!(self, Role::Dean)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "faculty" => Ok(Role::Faculty),
            "department_head" => Ok(Role::DepartmentHead),
            "dean" => Ok(Role::Dean),
            _ => Err(format!("{:?} is not a valid role", s)),
        }
    }
}

/// A registered portal user.
///
/// Field names on the wire follow the stored directory format
/// (`employeeId`, nullable `department`). `username` is the directory key
/// and may be absent from older blobs; the directory fills it in on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub username: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub department: Option<String>,
    pub email: String,
    pub employee_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_wire_names_only() {
        assert_eq!("faculty".parse::<Role>(), Ok(Role::Faculty));
        assert_eq!("department_head".parse::<Role>(), Ok(Role::DepartmentHead));
        assert_eq!("dean".parse::<Role>(), Ok(Role::Dean));
        assert!("Dean".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn role_label_is_uppercased_with_spaces() {
        assert_eq!(Role::DepartmentHead.label(), "DEPARTMENT HEAD");
        assert_eq!(Role::Faculty.label(), "FACULTY");
    }

    #[test]
    fn record_uses_stored_field_names() {
        let json = r#"{
            "password": "dean123",
            "role": "dean",
            "name": "Dr. Robert Brown",
            "department": null,
            "email": "robert.brown@university.edu",
            "employeeId": "D001"
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.role, Role::Dean);
        assert_eq!(record.department, None);
        assert_eq!(record.employee_id, "D001");
        assert!(record.username.is_empty());

        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains("\"employeeId\":\"D001\""));
        assert!(out.contains("\"role\":\"dean\""));
    }
}

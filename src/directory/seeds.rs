//! Seed records
//!
//! The three built-in accounts present when no directory has been stored.

use crate::user::{Role, UserRecord};

fn seed(
    username: &str,
    password: &str,
    role: Role,
    name: &str,
    department: Option<&str>,
    email: &str,
    employee_id: &str,
) -> UserRecord {
    UserRecord {
        username: username.to_string(),
        password: password.to_string(),
        role,
        name: name.to_string(),
        department: department.map(str::to_string),
        email: email.to_string(),
        employee_id: employee_id.to_string(),
    }
}

/// One account per role.
pub fn seed_records() -> Vec<UserRecord> {
    vec![
        seed(
            "faculty1",
            "faculty123",
            Role::Faculty,
            "Dr. John Smith",
            Some("Computer Science"),
            "john.smith@university.edu",
            "F001",
        ),
        seed(
            "depthead1",
            "depthead123",
            Role::DepartmentHead,
            "Prof. Jane Doe",
            Some("Computer Science"),
            "jane.doe@university.edu",
            "DH001",
        ),
        seed(
            "dean1",
            "dean123",
            Role::Dean,
            "Dr. Robert Brown",
            None,
            "robert.brown@university.edu",
            "D001",
        ),
    ]
}

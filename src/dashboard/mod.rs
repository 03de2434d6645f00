//! Role dashboards
//!
//! Static per-role dashboard content and the text view rendered for a
//! logged-in user.

use std::fmt;

use crate::error::DashboardError;
use crate::user::{Role, UserRecord};

/// Title, features and theme color of one role's dashboard.
#[derive(Debug, PartialEq, Eq)]
pub struct DashboardDescriptor {
    pub title: &'static str,
    pub features: &'static [&'static str],
    pub theme: &'static str,
}

impl DashboardDescriptor {
    /// Case-sensitive lookup of a feature by name.
    pub fn has_feature(&self, name: &str) -> bool {
        self.features.iter().any(|f| *f == name)
    }
}

static FACULTY: DashboardDescriptor = DashboardDescriptor {
    title: "Faculty Dashboard",
    features: &[
        "View Teaching Schedule",
        "Submit Grades",
        "Student Management",
        "Course Materials",
        "Attendance Tracking",
    ],
    theme: "#3498db",
};

static DEPARTMENT_HEAD: DashboardDescriptor = DashboardDescriptor {
    title: "Department Head Dashboard",
    features: &[
        "Faculty Management",
        "Approve Leave Requests",
        "Department Reports",
        "Budget Management",
        "Schedule Oversight",
    ],
    theme: "#e67e22",
};

static DEAN: DashboardDescriptor = DashboardDescriptor {
    title: "Dean Dashboard",
    features: &[
        "Institutional Overview",
        "Department Performance",
        "Strategic Planning",
        "Policy Management",
        "Budget Approval",
        "Academic Planning",
    ],
    theme: "#9b59b6",
};

/// Dashboard for a known role.
pub fn for_role(role: Role) -> &'static DashboardDescriptor {
    match role {
        Role::Faculty => &FACULTY,
        Role::DepartmentHead => &DEPARTMENT_HEAD,
        Role::Dean => &DEAN,
    }
}

/// Dashboard for a role given by its wire name.
pub fn resolve(role: &str) -> Result<&'static DashboardDescriptor, DashboardError> {
    role.parse::<Role>()
        .map(for_role)
        .map_err(|_| DashboardError::UnknownRole(role.to_string()))
}

/// A user's dashboard, ready to show.
pub struct DashboardView<'a> {
    pub descriptor: &'static DashboardDescriptor,
    pub user: &'a UserRecord,
}

impl<'a> DashboardView<'a> {
    pub fn new(user: &'a UserRecord) -> Self {
        Self {
            descriptor: for_role(user.role),
            user,
        }
    }

    /// Rendered view, one line per entry.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} [{}]", self.descriptor.title, self.descriptor.theme),
            format!("Welcome, {}", self.user.name),
        ];
        if let Some(department) = &self.user.department {
            lines.push(format!("Department: {}", department));
        }
        lines.push(format!("Role: {}", self.user.role.label()));
        lines.push(format!("Employee ID: {}", self.user.employee_id));
        for (n, feature) in self.descriptor.features.iter().enumerate() {
            lines.push(format!("{}. {}", n + 1, feature));
        }
        lines
    }
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

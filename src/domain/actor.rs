//! The signed-in employee as an explicit capability value.

use serde::{Deserialize, Serialize};
use staffdesk_api_types::EmployeeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

impl Role {
    /// Unknown role names never grant review rights.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "admin" | "administrator" => Role::Admin,
            "manager" => Role::Manager,
            _ => Role::Employee,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }

    pub fn from_employee(employee: &EmployeeRecord) -> Self {
        Self::new(
            employee.id.clone(),
            employee.name.clone(),
            Role::from_name(&employee.role),
        )
    }

    pub fn can_review(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Manager)
    }
}

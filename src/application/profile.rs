//! Profile view and employee lookups.

use std::sync::Arc;

use staffdesk_api_types::EmployeeRecord;
use thiserror::Error;
use tracing::{debug, instrument};

use super::remote::{EmployeeDirectory, RemoteError};
use crate::domain::actor::Actor;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl ProfileError {
    pub fn user_message(&self) -> String {
        match self {
            ProfileError::Remote(err) => err.user_message(),
        }
    }
}

#[derive(Clone)]
pub struct ProfileService {
    directory: Arc<dyn EmployeeDirectory>,
}

impl ProfileService {
    pub fn new(directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { directory }
    }

    pub async fn current_employee(&self) -> Result<EmployeeRecord, ProfileError> {
        self.directory
            .current_employee()
            .await
            .map_err(ProfileError::from)
    }

    /// The signed-in employee as the capability value other services take.
    #[instrument(skip(self))]
    pub async fn current_actor(&self) -> Result<Actor, ProfileError> {
        let employee = self.current_employee().await?;
        let actor = Actor::from_employee(&employee);
        debug!(actor_id = %actor.id, role = actor.role.as_str(), "resolved current actor");
        Ok(actor)
    }

    pub async fn find_employee(&self, id: &str) -> Result<EmployeeRecord, ProfileError> {
        self.directory
            .find_employee(id)
            .await
            .map_err(ProfileError::from)
    }

    /// Employees whose name contains `search`, case-insensitively.
    pub async fn list_employees(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<EmployeeRecord>, ProfileError> {
        let mut employees = self.directory.list_employees().await?;
        if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
            let term = term.to_lowercase();
            employees.retain(|employee| employee.name.to_lowercase().contains(&term));
        }
        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::domain::actor::Role;

    struct StubDirectory {
        me: EmployeeRecord,
        all: Vec<EmployeeRecord>,
    }

    #[async_trait]
    impl EmployeeDirectory for StubDirectory {
        async fn current_employee(&self) -> Result<EmployeeRecord, RemoteError> {
            Ok(self.me.clone())
        }

        async fn find_employee(&self, id: &str) -> Result<EmployeeRecord, RemoteError> {
            self.all
                .iter()
                .find(|employee| employee.id == id)
                .cloned()
                .ok_or_else(|| RemoteError::server(404, Some("Employee not found".into())))
        }

        async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, RemoteError> {
            Ok(self.all.clone())
        }
    }

    fn employee(id: &str, name: &str, role: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: id.into(),
            name: name.into(),
            email: format!("{id}@example.com"),
            role: role.into(),
            department: None,
            position: None,
            phone: None,
        }
    }

    fn service() -> ProfileService {
        let all = vec![
            employee("1", "Robin Hale", "admin"),
            employee("2", "Sam Ortiz", "employee"),
            employee("3", "Samira Novak", "manager"),
        ];
        ProfileService::new(Arc::new(StubDirectory {
            me: all[0].clone(),
            all,
        }))
    }

    #[tokio::test]
    async fn current_actor_carries_role() {
        let actor = service().current_actor().await.expect("actor");
        assert_eq!(actor.id, "1");
        assert_eq!(actor.role, Role::Admin);
        assert!(actor.can_review());
    }

    #[tokio::test]
    async fn list_employees_filters_by_name() {
        let found = service()
            .list_employees(Some("SAM"))
            .await
            .expect("employees");
        let ids: Vec<_> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);

        let all = service().list_employees(Some("  ")).await.expect("employees");
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn missing_employee_surfaces_server_message() {
        let err = service().find_employee("9").await.expect_err("missing");
        assert_eq!(err.user_message(), "Employee not found");
    }
}

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repository::{EmployeeRepository, UserRepository};
use crate::error::{EmpdeskError, Result};
use crate::model::{Employee, EmployeeFields, NewEmployee, NewUser, User, parse_object_id};

/// Employees kept in insertion order in process memory.
#[derive(Default)]
pub struct MemoryEmployeeRepository {
    employees: RwLock<Vec<Employee>>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>> {
        let oid = parse_object_id(id)?;
        let employees = self.employees.read().await;
        Ok(employees.iter().find(|e| e.id == oid).cloned())
    }

    async fn search(&self, term: &str) -> Result<Vec<Employee>> {
        let term = term.to_lowercase();
        let matches = |field: &str| field.to_lowercase().contains(&term);

        let employees = self.employees.read().await;
        Ok(employees
            .iter()
            .filter(|e| matches(&e.department) || matches(&e.designation))
            .cloned()
            .collect())
    }

    async fn filter_by_exact_fields(
        &self,
        department: Option<&str>,
        designation: Option<&str>,
    ) -> Result<Vec<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees
            .iter()
            .filter(|e| department.is_none_or(|d| e.department == d))
            .filter(|e| designation.is_none_or(|d| e.designation == d))
            .cloned()
            .collect())
    }

    async fn insert(&self, employee: NewEmployee) -> Result<Employee> {
        let employee = employee.into_employee();
        self.employees.write().await.push(employee.clone());
        Ok(employee)
    }

    async fn update_partial(&self, id: &str, fields: EmployeeFields) -> Result<Option<Employee>> {
        let oid = parse_object_id(id)?;
        let mut employees = self.employees.write().await;
        Ok(employees.iter_mut().find(|e| e.id == oid).map(|e| {
            e.apply(fields);
            e.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let oid = parse_object_id(id)?;
        let mut employees = self.employees.write().await;
        let before = employees.len();
        employees.retain(|e| e.id != oid);
        Ok(employees.len() != before)
    }
}

/// Users kept in process memory; usernames are unique.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(EmpdeskError::Persistence(format!(
                "Username '{}' is already taken",
                user.username
            )));
        }
        let user = user.into_user();
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}

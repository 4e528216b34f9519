use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::memory_repository::{MemoryEmployeeRepository, MemoryUserRepository};
use super::mongo_repository::MongoStore;
use crate::config::{DatabaseSettings, StoreBackend};
use crate::error::{EmpdeskError, Result};
use crate::model::{Employee, EmployeeFields, NewEmployee, NewUser, User};

/// Single-document operations on the employee collection.
///
/// Absence is reported through `Option`/`bool`; `Err` is reserved for malformed
/// ids and store failures.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every employee, in storage order.
    async fn find_all(&self) -> Result<Vec<Employee>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>>;

    /// Case-insensitive substring match on department or designation.
    async fn search(&self, term: &str) -> Result<Vec<Employee>>;

    /// Exact match; a `None` field is not constrained.
    async fn filter_by_exact_fields(
        &self,
        department: Option<&str>,
        designation: Option<&str>,
    ) -> Result<Vec<Employee>>;

    async fn insert(&self, employee: NewEmployee) -> Result<Employee>;

    /// Merges the supplied fields and returns the updated document.
    async fn update_partial(&self, id: &str, fields: EmployeeFields) -> Result<Option<Employee>>;

    /// Returns whether a document was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user. A taken username is a persistence error.
    async fn insert(&self, user: NewUser) -> Result<User>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;
}

/// Process-wide handle on both collections.
///
/// Cloning is cheap; every repository call made through [`Store::run`] is
/// bounded by the configured timeout.
#[derive(Clone)]
pub struct Store {
    employees: Arc<dyn EmployeeRepository>,
    users: Arc<dyn UserRepository>,
    timeout: Duration,
}

impl Store {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        users: Arc<dyn UserRepository>,
        timeout: Duration,
    ) -> Self {
        Self {
            employees,
            users,
            timeout,
        }
    }

    /// A store backed by process memory. Contents are lost on exit.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryEmployeeRepository::new()),
            Arc::new(MemoryUserRepository::new()),
            Self::DEFAULT_TIMEOUT,
        )
    }

    /// Opens the backend selected in `settings`.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self> {
        let timeout = settings.timeout();
        match settings.backend {
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; data will not survive a restart");
                Ok(Self::in_memory().with_timeout(timeout))
            }
            StoreBackend::Mongodb => {
                let mongo = MongoStore::connect(settings).await?;
                Ok(Self::new(
                    Arc::new(mongo.employees()),
                    Arc::new(mongo.users()),
                    timeout,
                ))
            }
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn employees(&self) -> &dyn EmployeeRepository {
        self.employees.as_ref()
    }

    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    /// Awaits a repository call, failing with [`EmpdeskError::Timeout`] once the
    /// configured timeout elapses.
    pub async fn run<T, F>(&self, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Err(EmpdeskError::Persistence(message))) => {
                tracing::error!(error = %message, "Database call failed");
                Err(EmpdeskError::Persistence(message))
            }
            Ok(result) => result,
            Err(_) => {
                let ms = self.timeout.as_millis() as u64;
                tracing::error!(timeout_ms = ms, "Database call timed out");
                Err(EmpdeskError::Timeout(ms))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_passes_result_through() {
        let store = Store::in_memory();
        let all = store.run(store.employees().find_all()).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_run_times_out() {
        let store = Store::in_memory().with_timeout(Duration::from_millis(10));
        let slow = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        };
        let err = store.run(slow).await.unwrap_err();
        assert!(matches!(err, EmpdeskError::Timeout(10)));
    }
}

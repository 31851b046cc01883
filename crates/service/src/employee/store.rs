use async_trait::async_trait;
use models::employee::{Employee, EmployeePatch, NewEmployee};
use uuid::Uuid;

use crate::errors::ServiceError;

/// The document store holding employee records.
///
/// Implementations own their concurrency control. In particular `insert` and
/// `update` must reject a duplicate email atomically with
/// [`ServiceError::Conflict`]; callers' own lookups are only a fast path.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, ServiceError>;
    async fn find_by_regid(&self, regid: Uuid) -> Result<Option<Employee>, ServiceError>;
    /// Persist a new record under a freshly generated `regid`.
    async fn insert(&self, candidate: NewEmployee) -> Result<Employee, ServiceError>;
    /// `Ok(None)` when no record has this `regid` at write time.
    async fn update(&self, regid: Uuid, patch: EmployeePatch) -> Result<Option<Employee>, ServiceError>;
    /// Returns whether a record was removed.
    async fn delete(&self, regid: Uuid) -> Result<bool, ServiceError>;
    /// Every record, in insertion order.
    async fn list(&self) -> Result<Vec<Employee>, ServiceError>;
    /// Release the underlying handle. Called once at shutdown.
    async fn close(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}

/// Process-local store for demos and tests.
pub mod memory {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MemoryEmployeeStore {
        records: RwLock<Vec<Employee>>, // insertion order
    }

    impl MemoryEmployeeStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn len(&self) -> usize {
            self.records.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.records.read().await.is_empty()
        }
    }

    fn duplicate(email: &str) -> ServiceError {
        ServiceError::Conflict(format!("email {email} already stored"))
    }

    #[async_trait]
    impl EmployeeStore for MemoryEmployeeStore {
        async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, ServiceError> {
            let records = self.records.read().await;
            Ok(records.iter().find(|e| e.email == email).cloned())
        }

        async fn find_by_regid(&self, regid: Uuid) -> Result<Option<Employee>, ServiceError> {
            let records = self.records.read().await;
            Ok(records.iter().find(|e| e.regid == regid).cloned())
        }

        async fn insert(&self, candidate: NewEmployee) -> Result<Employee, ServiceError> {
            let mut records = self.records.write().await;
            if records.iter().any(|e| e.email == candidate.email) {
                return Err(duplicate(&candidate.email));
            }
            let created = Employee::from_new(Uuid::new_v4(), candidate);
            records.push(created.clone());
            Ok(created)
        }

        async fn update(&self, regid: Uuid, patch: EmployeePatch) -> Result<Option<Employee>, ServiceError> {
            let mut records = self.records.write().await;
            if let Some(email) = &patch.email {
                if records.iter().any(|e| e.regid != regid && &e.email == email) {
                    return Err(duplicate(email));
                }
            }
            let Some(found) = records.iter_mut().find(|e| e.regid == regid) else {
                return Ok(None);
            };
            patch.apply_to(found);
            Ok(Some(found.clone()))
        }

        async fn delete(&self, regid: Uuid) -> Result<bool, ServiceError> {
            let mut records = self.records.write().await;
            let before = records.len();
            records.retain(|e| e.regid != regid);
            Ok(records.len() < before)
        }

        async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
            Ok(self.records.read().await.clone())
        }
    }
}

use models::employee::{self, Employee, EmployeePatch, NewEmployee};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::employee::store::EmployeeStore;
use crate::errors::ServiceError;

/// SeaORM-backed store; the unique index on `email` enforces uniqueness.
#[derive(Clone)]
pub struct SeaOrmEmployeeStore {
    pub db: DatabaseConnection,
}

fn decode(row: Option<employee::Model>) -> Result<Option<Employee>, ServiceError> {
    Ok(row.map(Employee::try_from).transpose()?)
}

#[async_trait::async_trait]
impl EmployeeStore for SeaOrmEmployeeStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, ServiceError> {
        decode(employee::find_by_email(&self.db, email).await?)
    }

    async fn find_by_regid(&self, regid: Uuid) -> Result<Option<Employee>, ServiceError> {
        decode(employee::find_by_regid(&self.db, regid).await?)
    }

    async fn insert(&self, candidate: NewEmployee) -> Result<Employee, ServiceError> {
        let created = employee::create(&self.db, &candidate).await?;
        Ok(Employee::try_from(created)?)
    }

    async fn update(&self, regid: Uuid, patch: EmployeePatch) -> Result<Option<Employee>, ServiceError> {
        decode(employee::update(&self.db, regid, patch).await?)
    }

    async fn delete(&self, regid: Uuid) -> Result<bool, ServiceError> {
        Ok(employee::delete(&self.db, regid).await?)
    }

    async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        let rows = employee::list(&self.db).await?;
        rows.into_iter()
            .map(|m| Employee::try_from(m).map_err(ServiceError::from))
            .collect()
    }

    async fn close(&self) -> Result<(), ServiceError> {
        self.db.clone().close().await.map_err(|e| ServiceError::Db(e.to_string()))
    }
}

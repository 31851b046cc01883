use std::sync::Arc;

use models::employee::Employee;
use models::validation::{validate_employee_patch, validate_new_employee};
use serde_json::Value;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::employee::store::EmployeeStore;
use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(Uuid),
    /// Another employee already uses the email.
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    Found(Vec<Employee>),
    NotFound,
}

/// Interpret a JSON `regid`. Absent or `null` names no record; any other
/// value must be a UUID string.
pub fn parse_regid(value: Option<&Value>) -> Result<Option<Uuid>, ServiceError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => regid_from_str(s).map(Some),
        Some(other) => Err(ServiceError::Validation(format!("regid must be a string, got {other}"))),
    }
}

fn regid_from_str(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim()).map_err(|e| ServiceError::Validation(format!("invalid regid {raw:?}: {e}")))
}

/// Employee business rules, independent of the web framework and of the store backend.
///
/// Expected negative outcomes (duplicate email, unknown regid) are `Ok` variants;
/// `Err` is reserved for failures the caller cannot act on.
pub struct EmployeeService<S: EmployeeStore + ?Sized> {
    store: Arc<S>,
}

impl<S: EmployeeStore + ?Sized> EmployeeService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Create an employee from a raw payload.
    ///
    /// The email lookup runs first; a duplicate that slips past it (a concurrent
    /// create) is caught by the store and reported the same way.
    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: Value) -> Result<CreateOutcome, ServiceError> {
        if let Some(email) = payload.get("email").and_then(Value::as_str) {
            if self.store.find_by_email(email).await?.is_some() {
                debug!(%email, "employee_exists");
                return Ok(CreateOutcome::AlreadyExists);
            }
        }

        let candidate = validate_new_employee(&payload)?;
        match self.store.insert(candidate).await {
            Ok(created) => {
                info!(regid = %created.regid, "employee_created");
                Ok(CreateOutcome::Created(created.regid))
            }
            Err(ServiceError::Conflict(msg)) => {
                debug!(%msg, "employee_exists_at_insert");
                Ok(CreateOutcome::AlreadyExists)
            }
            Err(e) => Err(e),
        }
    }

    /// Overwrite the fields present in `payload` on the employee named by its `regid`.
    #[instrument(skip(self, payload))]
    pub async fn update(&self, payload: Value) -> Result<UpdateOutcome, ServiceError> {
        let Value::Object(mut fields) = payload else {
            return Ok(UpdateOutcome::NotFound);
        };
        let Some(regid) = parse_regid(fields.remove("regid").as_ref())? else {
            return Ok(UpdateOutcome::NotFound);
        };
        if self.store.find_by_regid(regid).await?.is_none() {
            return Ok(UpdateOutcome::NotFound);
        }

        let patch = validate_employee_patch(&fields)?;
        match self.store.update(regid, patch).await? {
            Some(_) => {
                info!(%regid, "employee_updated");
                Ok(UpdateOutcome::Updated)
            }
            // deleted between lookup and write
            None => Ok(UpdateOutcome::NotFound),
        }
    }

    #[instrument(skip(self, payload))]
    pub async fn delete(&self, payload: Value) -> Result<DeleteOutcome, ServiceError> {
        let Some(regid) = parse_regid(payload.get("regid"))? else {
            return Ok(DeleteOutcome::NotFound);
        };
        if self.store.find_by_regid(regid).await?.is_none() {
            return Ok(DeleteOutcome::NotFound);
        }

        if self.store.delete(regid).await? {
            info!(%regid, "employee_deleted");
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }

    /// One employee when `regid` is given and non-empty, otherwise all of them.
    #[instrument(skip(self))]
    pub async fn read(&self, regid: Option<&str>) -> Result<ReadOutcome, ServiceError> {
        match regid.filter(|r| !r.is_empty()) {
            Some(raw) => {
                let id = regid_from_str(raw)?;
                Ok(match self.store.find_by_regid(id).await? {
                    Some(e) => ReadOutcome::Found(vec![e]),
                    None => ReadOutcome::NotFound,
                })
            }
            None => {
                let all = self.store.list().await?;
                debug!(count = all.len(), "employees_listed");
                Ok(ReadOutcome::Found(all))
            }
        }
    }
}

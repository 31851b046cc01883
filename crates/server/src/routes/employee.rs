//! Handlers for the `/employee` resource.
//!
//! Every response is an envelope. Expected negative outcomes are `200` with
//! `success: false`; anything unexpected is logged and becomes a `500`.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, rejection::QueryRejection, Query, State},
    Json,
};
use common::types::{CreateEnvelope, EmployeesEnvelope, MessageEnvelope};
use models::employee::Employee;
use serde::Deserialize;
use serde_json::{Map, Value};
use service::employee::{CreateOutcome, DeleteOutcome, ReadOutcome, UpdateOutcome};
use tracing::{error, info};

use super::ServerState;
use crate::errors::ApiFailure;

pub const CREATED: &str = "Employee created successfully";
pub const ALREADY_EXISTS: &str = "Employee already exists";
pub const CREATION_FAILED: &str = "Employee creation failed";
pub const UPDATED: &str = "Employee details updated successfully";
pub const UPDATE_FAILED: &str = "Employee updation failed";
pub const DELETED: &str = "Employee deleted successfully";
pub const DELETION_FAILED: &str = "Employee deletion failed";
pub const NO_SUCH_REGID: &str = "No employee found with this regid";
pub const FOUND: &str = "Employee details found";
pub const NOT_FOUND: &str = "Employee details not found";
pub const RETRIEVAL_FAILED: &str = "Error retrieving employees";

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReadQuery {
    /// Return only this employee.
    pub regid: Option<String>,
}

/// Decode a JSON body. A blank body reads as `{}`.
fn json_body(body: Result<Bytes, BytesRejection>) -> Result<Value, String> {
    let bytes = body.map_err(|e| e.body_text())?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(&bytes).map_err(|e| e.to_string())
}

#[utoipa::path(
    post, path = "/employee", tag = "employee",
    request_body = crate::openapi::NewEmployeeDoc,
    responses(
        (status = 200, description = "Created, or already exists (success = false)", body = crate::openapi::CreateEnvelopeDoc),
        (status = 500, description = "Employee creation failed")
    )
)]
pub async fn create_employee(
    State(state): State<ServerState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CreateEnvelope>, ApiFailure> {
    let payload = json_body(body).map_err(|e| {
        error!(err = %e, "create employee: unreadable body");
        ApiFailure::new(CREATION_FAILED)
    })?;

    match state.employees.create(payload).await {
        Ok(CreateOutcome::Created(regid)) => {
            info!(%regid, "created employee");
            Ok(Json(CreateEnvelope { message: CREATED.into(), success: true, regid: Some(regid) }))
        }
        Ok(CreateOutcome::AlreadyExists) => {
            Ok(Json(CreateEnvelope { message: ALREADY_EXISTS.into(), success: false, regid: None }))
        }
        Err(e) => {
            error!(err = %e, "create employee failed");
            Err(ApiFailure::new(CREATION_FAILED))
        }
    }
}

#[utoipa::path(
    put, path = "/employee", tag = "employee",
    request_body = crate::openapi::UpdateEmployeeDoc,
    responses(
        (status = 200, description = "Updated, or no such regid (success = false)", body = crate::openapi::MessageEnvelopeDoc),
        (status = 500, description = "Employee updation failed")
    )
)]
pub async fn update_employee(
    State(state): State<ServerState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<MessageEnvelope>, ApiFailure> {
    let payload = json_body(body).map_err(|e| {
        error!(err = %e, "update employee: unreadable body");
        ApiFailure::new(UPDATE_FAILED)
    })?;

    match state.employees.update(payload).await {
        Ok(UpdateOutcome::Updated) => Ok(Json(MessageEnvelope::ok(UPDATED))),
        Ok(UpdateOutcome::NotFound) => Ok(Json(MessageEnvelope::rejected(NO_SUCH_REGID))),
        Err(e) => {
            error!(err = %e, "update employee failed");
            Err(ApiFailure::new(UPDATE_FAILED))
        }
    }
}

#[utoipa::path(
    delete, path = "/employee", tag = "employee",
    request_body = crate::openapi::RegidDoc,
    responses(
        (status = 200, description = "Deleted, or no such regid (success = false)", body = crate::openapi::MessageEnvelopeDoc),
        (status = 500, description = "Employee deletion failed")
    )
)]
pub async fn delete_employee(
    State(state): State<ServerState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<MessageEnvelope>, ApiFailure> {
    let payload = json_body(body).map_err(|e| {
        error!(err = %e, "delete employee: unreadable body");
        ApiFailure::new(DELETION_FAILED)
    })?;

    match state.employees.delete(payload).await {
        Ok(DeleteOutcome::Deleted) => Ok(Json(MessageEnvelope::ok(DELETED))),
        Ok(DeleteOutcome::NotFound) => Ok(Json(MessageEnvelope::rejected(NO_SUCH_REGID))),
        Err(e) => {
            error!(err = %e, "delete employee failed");
            Err(ApiFailure::new(DELETION_FAILED))
        }
    }
}

#[utoipa::path(
    get, path = "/employee", tag = "employee",
    params(ReadQuery),
    responses(
        (status = 200, description = "Employee list, single-element list, or not found (success = false)", body = crate::openapi::EmployeesEnvelopeDoc),
        (status = 500, description = "Error retrieving employees")
    )
)]
pub async fn read_employees(
    State(state): State<ServerState>,
    query: Result<Query<ReadQuery>, QueryRejection>,
) -> Result<Json<EmployeesEnvelope<Employee>>, ApiFailure> {
    let Query(q) = query.map_err(|e| {
        error!(err = %e, "read employees: bad query");
        ApiFailure::listing(RETRIEVAL_FAILED)
    })?;

    match state.employees.read(q.regid.as_deref()).await {
        Ok(ReadOutcome::Found(employees)) => Ok(Json(EmployeesEnvelope::found(FOUND, employees))),
        Ok(ReadOutcome::NotFound) => Ok(Json(EmployeesEnvelope::empty(NOT_FOUND))),
        Err(e) => {
            error!(err = %e, "read employees failed");
            Err(ApiFailure::listing(RETRIEVAL_FAILED))
        }
    }
}

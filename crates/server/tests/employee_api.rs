use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use models::employee::{Employee, EmployeePatch, NewEmployee};
use serde_json::{json, Value};
use service::employee::store::memory::MemoryEmployeeStore;
use service::employee::EmployeeStore;
use service::errors::ServiceError;
use tower::ServiceExt;
use uuid::Uuid;

use server::startup::{app, open_store};

fn payload(email: &str) -> Value {
    json!({
        "name": "Meera Iyer",
        "email": email,
        "age": 35,
        "gender": "female",
        "phoneNo": "044-2222333",
        "addressDetails": {"hno": "7", "street": "Anna Salai", "city": "Chennai", "state": "TN"},
        "workExperience": [
            {"companyName": "Globex", "fromDate": "2012-01", "toDate": "2020-12", "address": "Chennai"},
            {"companyName": "Umbrella", "fromDate": "2021-01", "toDate": "2024-06", "address": "Bengaluru"}
        ],
        "qualifications": [
            {"qualificationName": "M.Sc", "fromDate": "2009", "toDate": "2011", "percentage": 88.2}
        ],
        "projects": [{"title": "Payroll", "description": "Monthly payroll engine"}],
        "photo": "aGVsbG8="
    })
}

fn memory_app() -> (Arc<MemoryEmployeeStore>, Router) {
    let store = Arc::new(MemoryEmployeeStore::new());
    let router = app(store.clone());
    (store, router)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, req).await
}

async fn send_request(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn create(app: &Router, email: &str) -> String {
    let (status, body) = send(app, "POST", "/employee", Some(payload(email))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true, "create failed: {body}");
    body["regid"].as_str().expect("regid").to_string()
}

#[tokio::test]
async fn create_returns_regid_and_read_returns_same_record() {
    let (_, app) = memory_app();
    let (status, body) = send(&app, "POST", "/employee", Some(payload("meera@example.com"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee created successfully");
    assert_eq!(body["success"], true);
    let regid = body["regid"].as_str().unwrap().to_string();
    assert!(Uuid::parse_str(&regid).is_ok());

    let (status, body) = send(&app, "GET", &format!("/employee?regid={regid}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee details found");
    assert_eq!(body["success"], true);
    let employees = body["employees"].as_array().unwrap();
    assert_eq!(employees.len(), 1);

    let got: Employee = serde_json::from_value(employees[0].clone()).unwrap();
    let sent: NewEmployee = serde_json::from_value(payload("meera@example.com")).unwrap();
    assert_eq!(got, Employee::from_new(Uuid::parse_str(&regid).unwrap(), sent));
}

#[tokio::test]
async fn duplicate_email_is_a_200_rejection() {
    let (store, app) = memory_app();
    create(&app, "same@example.com").await;

    let (status, body) = send(&app, "POST", "/employee", Some(payload("same@example.com"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Employee already exists", "success": false}));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn invalid_payload_fails_creation_with_500() {
    let (store, app) = memory_app();
    let mut p = payload("bad@example.com");
    p["age"] = json!("thirty-five");
    let (status, body) = send(&app, "POST", "/employee", Some(p)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Employee creation failed", "success": false}));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn malformed_json_fails_creation_with_500() {
    let (_, app) = memory_app();
    let req = Request::builder()
        .method("POST")
        .uri("/employee")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send_request(&app, req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Employee creation failed");
    assert!(body.get("regid").is_none());
}

#[tokio::test]
async fn update_unknown_regid_is_a_200_rejection() {
    let (store, app) = memory_app();
    create(&app, "one@example.com").await;
    let before = store.list().await.unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        "/employee",
        Some(json!({"regid": Uuid::new_v4(), "name": "Nobody"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "No employee found with this regid", "success": false}));
    assert_eq!(store.list().await.unwrap(), before);
}

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let (store, app) = memory_app();
    let regid = create(&app, "partial@example.com").await;
    let id = Uuid::parse_str(&regid).unwrap();
    let before = store.find_by_regid(id).await.unwrap().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        "/employee",
        Some(json!({"regid": regid, "phoneNo": "044-9999999", "projects": []})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Employee details updated successfully", "success": true}));

    let after = store.find_by_regid(id).await.unwrap().unwrap();
    assert_eq!(after.phone_no, "044-9999999");
    assert!(after.projects.is_empty());
    assert_eq!(after.name, before.name);
    assert_eq!(after.email, before.email);
    assert_eq!(after.address_details, before.address_details);
    assert_eq!(after.work_experience, before.work_experience);
    assert_eq!(after.photo, before.photo);
}

#[tokio::test]
async fn update_with_wrong_type_fails_with_500() {
    let (_, app) = memory_app();
    let regid = create(&app, "typed@example.com").await;
    let (status, body) = send(&app, "PUT", "/employee", Some(json!({"regid": regid, "addressDetails": "none"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Employee updation failed", "success": false}));
}

#[tokio::test]
async fn delete_removes_record() {
    let (store, app) = memory_app();
    let regid = create(&app, "bye@example.com").await;
    create(&app, "stay@example.com").await;

    let (status, body) = send(&app, "DELETE", "/employee", Some(json!({"regid": regid}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Employee deleted successfully", "success": true}));
    assert_eq!(store.len().await, 1);

    let (status, body) = send(&app, "GET", &format!("/employee?regid={regid}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Employee details not found", "success": false, "employees": []}));
}

#[tokio::test]
async fn delete_unknown_or_missing_regid_is_a_200_rejection() {
    let (_, app) = memory_app();
    let (status, body) = send(&app, "DELETE", "/employee", Some(json!({"regid": Uuid::new_v4()}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No employee found with this regid");
    assert_eq!(body["success"], false);

    let (status, body) = send(&app, "DELETE", "/employee", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No employee found with this regid");
}

#[tokio::test]
async fn malformed_regid_is_a_500_failure() {
    let (store, app) = memory_app();
    create(&app, "cast@example.com").await;

    let (status, body) = send(&app, "PUT", "/employee", Some(json!({"regid": "not-an-id", "name": "x"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Employee updation failed", "success": false}));

    let (status, body) = send(&app, "DELETE", "/employee", Some(json!({"regid": "not-an-id"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Employee deletion failed", "success": false}));

    let (status, body) = send(&app, "GET", "/employee?regid=not-an-id", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Error retrieving employees", "success": false, "employees": []}));

    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn read_all_lists_every_employee() {
    let (store, app) = memory_app();
    for i in 0..3 {
        create(&app, &format!("e{i}@example.com")).await;
    }
    let (status, body) = send(&app, "GET", "/employee", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee details found");
    assert_eq!(body["success"], true);
    assert_eq!(body["employees"].as_array().unwrap().len(), store.len().await);

    let (_, body) = send(&app, "GET", "/employee?regid=", None).await;
    assert_eq!(body["employees"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn read_on_empty_store_is_an_empty_success() {
    let (_, app) = memory_app();
    let (status, body) = send(&app, "GET", "/employee", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Employee details found", "success": true, "employees": []}));
}

#[tokio::test]
async fn round_trip_found_then_not_found() {
    let (_, app) = memory_app();
    let regid = create(&app, "trip@example.com").await;
    let uri = format!("/employee?regid={regid}");

    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["employees"][0]["regid"], regid.as_str());

    let (_, body) = send(&app, "DELETE", "/employee", Some(json!({"regid": regid}))).await;
    assert_eq!(body["success"], true);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee details not found");
    assert_eq!(body["employees"], json!([]));
}

/// Store whose every call fails, like an unreachable database.
struct DownStore;

fn down() -> ServiceError {
    ServiceError::Db("connection refused".into())
}

#[async_trait::async_trait]
impl EmployeeStore for DownStore {
    async fn find_by_email(&self, _: &str) -> Result<Option<Employee>, ServiceError> {
        Err(down())
    }
    async fn find_by_regid(&self, _: Uuid) -> Result<Option<Employee>, ServiceError> {
        Err(down())
    }
    async fn insert(&self, _: NewEmployee) -> Result<Employee, ServiceError> {
        Err(down())
    }
    async fn update(&self, _: Uuid, _: EmployeePatch) -> Result<Option<Employee>, ServiceError> {
        Err(down())
    }
    async fn delete(&self, _: Uuid) -> Result<bool, ServiceError> {
        Err(down())
    }
    async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        Err(down())
    }
}

#[tokio::test]
async fn store_failures_become_generic_500_envelopes() {
    let app = app(Arc::new(DownStore));
    let regid = Uuid::new_v4();

    let (status, body) = send(&app, "POST", "/employee", Some(payload("x@example.com"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Employee creation failed", "success": false}));

    let (status, body) = send(&app, "PUT", "/employee", Some(json!({"regid": regid}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Employee updation failed", "success": false}));

    let (status, body) = send(&app, "DELETE", "/employee", Some(json!({"regid": regid}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Employee deletion failed", "success": false}));

    let (status, body) = send(&app, "GET", "/employee", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Error retrieving employees", "success": false, "employees": []}));

    let (status, body) = send(&app, "GET", &format!("/employee?regid={regid}"), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().contains("connection refused"));
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let (_, app) = memory_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/employee"].get("post").is_some());
    assert!(body["paths"]["/employee"].get("delete").is_some());
}

#[tokio::test]
async fn sqlite_backed_app_enforces_unique_email() -> anyhow::Result<()> {
    let store = open_store(&models::db::sqlite_memory_config()).await?;
    let app = app(Arc::clone(&store));

    let regid = create(&app, "sql@example.com").await;
    let (status, body) = send(&app, "POST", "/employee", Some(payload("sql@example.com"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee already exists");

    let (_, body) = send(&app, "GET", &format!("/employee?regid={regid}"), None).await;
    assert_eq!(body["employees"][0]["workExperience"][1]["companyName"], "Umbrella");
    assert_eq!(body["employees"][0]["qualifications"][0]["percentage"], 88.2);

    store.close().await?;
    Ok(())
}

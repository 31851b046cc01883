use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::employee::{EmployeeService, EmployeeStore};

use crate::openapi::ApiDoc;

pub mod employee;

#[derive(Clone)]
pub struct ServerState {
    pub employees: Arc<EmployeeService<dyn EmployeeStore>>,
}

impl ServerState {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { employees: Arc::new(EmployeeService::new(store)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: the employee resource, health and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            "/employee",
            get(employee::read_employees)
                .post(employee::create_employee)
                .put(employee::update_employee)
                .delete(employee::delete_employee),
        )
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_doc))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

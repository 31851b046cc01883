//! OpenAPI description of the HTTP surface, served at `/api-docs/openapi.json`.
//!
//! The `*Doc` types mirror the wire shapes for documentation only.

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetailsDoc { pub hno: String, pub street: String, pub city: String, pub state: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceDoc { pub company_name: String, pub from_date: String, pub to_date: String, pub address: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualificationDoc { pub qualification_name: String, pub from_date: String, pub to_date: String, pub percentage: f64 }

#[derive(Serialize, ToSchema)]
pub struct ProjectDoc { pub title: String, pub description: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployeeDoc {
    pub name: String,
    pub email: String,
    pub age: f64,
    pub gender: String,
    pub phone_no: String,
    pub address_details: AddressDetailsDoc,
    pub work_experience: Option<Vec<WorkExperienceDoc>>,
    pub qualifications: Option<Vec<QualificationDoc>>,
    pub projects: Option<Vec<ProjectDoc>>,
    /// Opaque; defaults to "".
    pub photo: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeDoc {
    pub regid: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub phone_no: Option<String>,
    pub address_details: Option<AddressDetailsDoc>,
    pub work_experience: Option<Vec<WorkExperienceDoc>>,
    pub qualifications: Option<Vec<QualificationDoc>>,
    pub projects: Option<Vec<ProjectDoc>>,
    pub photo: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegidDoc { pub regid: Uuid }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDoc {
    pub regid: Uuid,
    pub name: String,
    pub email: String,
    pub age: f64,
    pub gender: String,
    pub phone_no: String,
    pub address_details: AddressDetailsDoc,
    pub work_experience: Vec<WorkExperienceDoc>,
    pub qualifications: Vec<QualificationDoc>,
    pub projects: Vec<ProjectDoc>,
    pub photo: String,
}

#[derive(Serialize, ToSchema)]
pub struct MessageEnvelopeDoc { pub message: String, pub success: bool }

#[derive(Serialize, ToSchema)]
pub struct CreateEnvelopeDoc { pub message: String, pub success: bool, pub regid: Option<Uuid> }

#[derive(Serialize, ToSchema)]
pub struct EmployeesEnvelopeDoc { pub message: String, pub success: bool, pub employees: Vec<EmployeeDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employee::create_employee,
        crate::routes::employee::read_employees,
        crate::routes::employee::update_employee,
        crate::routes::employee::delete_employee,
    ),
    components(
        schemas(
            HealthResponse,
            AddressDetailsDoc,
            WorkExperienceDoc,
            QualificationDoc,
            ProjectDoc,
            NewEmployeeDoc,
            UpdateEmployeeDoc,
            RegidDoc,
            EmployeeDoc,
            MessageEnvelopeDoc,
            CreateEnvelopeDoc,
            EmployeesEnvelopeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employee")
    )
)]
pub struct ApiDoc;

//! The `employee` document: SeaORM entity, domain records and persistence helpers.
//!
//! Scalar fields live in their own columns; the nested address and the three
//! sub-lists are stored as JSON documents and decoded into typed records on read.

use chrono::Utc;
use sea_orm::{entity::prelude::*, ColumnTrait, DatabaseConnection, DbErr, QueryFilter, QueryOrder, Set};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub regid: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub age: f64,
    pub gender: String,
    pub phone_no: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub address_details: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub work_experience: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub qualifications: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub projects: Json,
    pub photo: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetails {
    pub hno: String,
    pub street: String,
    pub city: String,
    pub state: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company_name: String,
    pub from_date: String,
    pub to_date: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualification {
    pub qualification_name: String,
    pub from_date: String,
    pub to_date: String,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
}

/// A validated candidate for insertion. The store assigns the `regid`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub age: f64,
    pub gender: String,
    pub phone_no: String,
    pub address_details: AddressDetails,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub qualifications: Vec<Qualification>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub photo: String,
}

/// A stored employee as returned to callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub regid: Uuid,
    pub name: String,
    pub email: String,
    pub age: f64,
    pub gender: String,
    pub phone_no: String,
    pub address_details: AddressDetails,
    pub work_experience: Vec<WorkExperience>,
    pub qualifications: Vec<Qualification>,
    pub projects: Vec<Project>,
    pub photo: String,
}

/// Field overwrites for an existing employee; `None` leaves the stored value alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub phone_no: Option<String>,
    pub address_details: Option<AddressDetails>,
    pub work_experience: Option<Vec<WorkExperience>>,
    pub qualifications: Option<Vec<Qualification>>,
    pub projects: Option<Vec<Project>>,
    pub photo: Option<String>,
}

impl Employee {
    pub fn from_new(regid: Uuid, new: NewEmployee) -> Self {
        Self {
            regid,
            name: new.name,
            email: new.email,
            age: new.age,
            gender: new.gender,
            phone_no: new.phone_no,
            address_details: new.address_details,
            work_experience: new.work_experience,
            qualifications: new.qualifications,
            projects: new.projects,
            photo: new.photo,
        }
    }
}

impl EmployeePatch {
    /// Overwrite the given fields of an in-memory record.
    pub fn apply_to(self, e: &mut Employee) {
        if let Some(v) = self.name { e.name = v; }
        if let Some(v) = self.email { e.email = v; }
        if let Some(v) = self.age { e.age = v; }
        if let Some(v) = self.gender { e.gender = v; }
        if let Some(v) = self.phone_no { e.phone_no = v; }
        if let Some(v) = self.address_details { e.address_details = v; }
        if let Some(v) = self.work_experience { e.work_experience = v; }
        if let Some(v) = self.qualifications { e.qualifications = v; }
        if let Some(v) = self.projects { e.projects = v; }
        if let Some(v) = self.photo { e.photo = v; }
    }

    /// Mark the given fields as changed on a loaded row. `regid` is never touched.
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), ModelError> {
        if let Some(v) = self.name { am.name = Set(v); }
        if let Some(v) = self.email { am.email = Set(v); }
        if let Some(v) = self.age { am.age = Set(v); }
        if let Some(v) = self.gender { am.gender = Set(v); }
        if let Some(v) = self.phone_no { am.phone_no = Set(v); }
        if let Some(v) = self.address_details { am.address_details = Set(encode(&v)?); }
        if let Some(v) = self.work_experience { am.work_experience = Set(encode(&v)?); }
        if let Some(v) = self.qualifications { am.qualifications = Set(encode(&v)?); }
        if let Some(v) = self.projects { am.projects = Set(encode(&v)?); }
        if let Some(v) = self.photo { am.photo = Set(v); }
        Ok(())
    }
}

impl NewEmployee {
    pub fn to_active_model(&self, regid: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            regid: Set(regid),
            name: Set(self.name.clone()),
            email: Set(self.email.clone()),
            age: Set(self.age),
            gender: Set(self.gender.clone()),
            phone_no: Set(self.phone_no.clone()),
            address_details: Set(encode(&self.address_details)?),
            work_experience: Set(encode(&self.work_experience)?),
            qualifications: Set(encode(&self.qualifications)?),
            projects: Set(encode(&self.projects)?),
            photo: Set(self.photo.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl TryFrom<Model> for Employee {
    type Error = ModelError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            regid: m.regid,
            name: m.name,
            email: m.email,
            age: m.age,
            gender: m.gender,
            phone_no: m.phone_no,
            address_details: decode("address_details", m.address_details)?,
            work_experience: decode("work_experience", m.work_experience)?,
            qualifications: decode("qualifications", m.qualifications)?,
            projects: decode("projects", m.projects)?,
            photo: m.photo,
        })
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Json, ModelError> {
    serde_json::to_value(value).map_err(|e| ModelError::Validation(e.to_string()))
}

fn decode<T: DeserializeOwned>(column: &str, value: Json) -> Result<T, ModelError> {
    serde_json::from_value(value).map_err(|e| ModelError::Db(format!("corrupt {column} column: {e}")))
}

pub async fn create(db: &DatabaseConnection, new: &NewEmployee) -> Result<Model, ModelError> {
    let am = new.to_active_model(Uuid::new_v4(), Utc::now().into())?;
    Ok(am.insert(db).await?)
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

pub async fn find_by_regid(db: &DatabaseConnection, regid: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(regid).one(db).await?)
}

/// All rows in insertion order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Regid)
        .all(db)
        .await?)
}

/// Apply `patch` to the row; `Ok(None)` when the row no longer exists.
pub async fn update(db: &DatabaseConnection, regid: Uuid, patch: EmployeePatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(regid).one(db).await? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    patch.apply(&mut am)?;
    am.updated_at = Set(Utc::now().into());
    match am.update(db).await {
        Ok(m) => Ok(Some(m)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Remove the row; returns whether it existed.
pub async fn delete(db: &DatabaseConnection, regid: Uuid) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(regid).exec(db).await?;
    Ok(res.rows_affected > 0)
}

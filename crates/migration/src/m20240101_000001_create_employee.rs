//! Create `employee` table.
//! One row per employee; the address and the three sub-lists are JSON documents.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(uuid(Employee::Regid).primary_key())
                    .col(string(Employee::Name).not_null())
                    .col(string(Employee::Email).not_null())
                    .col(double(Employee::Age).not_null())
                    .col(string(Employee::Gender).not_null())
                    .col(string(Employee::PhoneNo).not_null())
                    .col(json_binary(Employee::AddressDetails).not_null())
                    .col(json_binary(Employee::WorkExperience).not_null())
                    .col(json_binary(Employee::Qualifications).not_null())
                    .col(json_binary(Employee::Projects).not_null())
                    .col(text(Employee::Photo).not_null().default(""))
                    .col(timestamp_with_time_zone(Employee::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Employee::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        // Email uniqueness is enforced here, atomically, not by the service's pre-check
        manager
            .create_index(
                Index::create()
                    .name("idx_employee_email")
                    .table(Employee::Table)
                    .col(Employee::Email)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Regid,
    Name,
    Email,
    Age,
    Gender,
    PhoneNo,
    AddressDetails,
    WorkExperience,
    Qualifications,
    Projects,
    Photo,
    CreatedAt,
    UpdatedAt,
}

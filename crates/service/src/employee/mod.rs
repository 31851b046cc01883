//! Employee module: store abstraction, storage backends and the business service.

pub mod repo;
pub mod service;
pub mod store;

pub use service::{CreateOutcome, DeleteOutcome, EmployeeService, ReadOutcome, UpdateOutcome};
pub use store::EmployeeStore;

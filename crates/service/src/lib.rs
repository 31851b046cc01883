//! Service layer providing the employee operations on top of models.
//! - Separates business outcomes from HTTP and from storage.
//! - Reuses validation and entity definitions in `models` crate.
//! - Storage is reached only through the `EmployeeStore` trait.

pub mod errors;
pub mod employee;
#[cfg(test)]
pub mod test_support;

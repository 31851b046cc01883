pub mod errors;
pub mod db;
pub mod employee;
pub mod validation;

#[cfg(test)]
mod tests;

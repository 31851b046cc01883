//! Wire types shared by the HTTP layer and its clients.
//!
//! Every `/employee` response is one of the envelopes below: a `message`,
//! a `success` flag, and at most one payload field.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// `{message, success}` returned by update and delete.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageEnvelope {
    pub message: String,
    pub success: bool,
}

impl MessageEnvelope {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { message: message.into(), success: true }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { message: message.into(), success: false }
    }
}

/// `{message, success, regid}` returned by create; `regid` only on success.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateEnvelope {
    pub message: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regid: Option<Uuid>,
}

/// `{message, success, employees}` returned by read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeesEnvelope<T> {
    pub message: String,
    pub success: bool,
    pub employees: Vec<T>,
}

impl<T> EmployeesEnvelope<T> {
    pub fn found(message: impl Into<String>, employees: Vec<T>) -> Self {
        Self { message: message.into(), success: true, employees }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self { message: message.into(), success: false, employees: Vec::new() }
    }
}

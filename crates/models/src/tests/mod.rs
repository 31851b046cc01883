

use serde_json::{json, Value};

/// A complete, valid create payload.
pub(crate) fn sample_payload(email: &str) -> Value {
    json!({
        "name": "Asha Rao",
        "email": email,
        "age": 31,
        "gender": "female",
        "phoneNo": "+91-9800000000",
        "addressDetails": {"hno": "12B", "street": "MG Road", "city": "Pune", "state": "MH"},
        "workExperience": [
            {"companyName": "Acme", "fromDate": "2015-06", "toDate": "2019-03", "address": "Mumbai"}
        ],
        "qualifications": [
            {"qualificationName": "B.Tech", "fromDate": "2011", "toDate": "2015", "percentage": 78.5}
        ],
        "projects": [
            {"title": "Ledger", "description": "Accounting backend"}
        ]
    })
}

//! Schema checks for employee payloads.
//!
//! Payloads arrive as loose JSON. These functions turn them into typed records
//! or report every constraint the payload breaks, addressed by dotted path
//! (`workExperience.1.toDate`).

use std::fmt;

use serde_json::{Map, Value};

use crate::employee::{
    AddressDetails, EmployeePatch, NewEmployee, Project, Qualification, WorkExperience,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Absent, `null`, or an empty string.
    Required,
    /// Present with the wrong JSON type; carries the expected one.
    WrongType(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Required => write!(f, "`{}` is required", self.path),
            ViolationKind::WrongType(expected) => write!(f, "`{}` must be {}", self.path, expected),
        }
    }
}

/// Non-empty list of violations found in one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn contains(&self, path: &str, kind: ViolationKind) -> bool {
        self.0.iter().any(|v| v.path == path && v.kind == kind)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

const ROOT: &str = "(root)";

#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

impl Checker {
    fn flag(&mut self, path: String, kind: ViolationKind) {
        self.violations.push(Violation { path, kind });
    }

    fn text(&mut self, obj: &Map<String, Value>, prefix: &str, key: &str) -> String {
        let path = join(prefix, key);
        match obj.get(key) {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::String(_)) | Some(Value::Null) | None => {
                self.flag(path, ViolationKind::Required);
                String::new()
            }
            Some(_) => {
                self.flag(path, ViolationKind::WrongType("a string"));
                String::new()
            }
        }
    }

    fn number(&mut self, obj: &Map<String, Value>, prefix: &str, key: &str) -> f64 {
        let path = join(prefix, key);
        match obj.get(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
            Some(Value::Null) | None => {
                self.flag(path, ViolationKind::Required);
                0.0
            }
            Some(_) => {
                self.flag(path, ViolationKind::WrongType("a number"));
                0.0
            }
        }
    }

    fn photo(&mut self, obj: &Map<String, Value>, prefix: &str) -> String {
        match obj.get("photo") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(_) => {
                self.flag(join(prefix, "photo"), ViolationKind::WrongType("a string"));
                String::new()
            }
        }
    }

    fn address(&mut self, obj: &Map<String, Value>, prefix: &str) -> AddressDetails {
        let path = join(prefix, "addressDetails");
        match obj.get("addressDetails") {
            Some(Value::Object(a)) => AddressDetails {
                hno: self.text(a, &path, "hno"),
                street: self.text(a, &path, "street"),
                city: self.text(a, &path, "city"),
                state: self.text(a, &path, "state"),
            },
            Some(Value::Null) | None => {
                self.flag(path, ViolationKind::Required);
                empty_address()
            }
            Some(_) => {
                self.flag(path, ViolationKind::WrongType("an object"));
                empty_address()
            }
        }
    }

    fn list<T>(
        &mut self,
        obj: &Map<String, Value>,
        prefix: &str,
        key: &str,
        item: fn(&mut Checker, &Map<String, Value>, &str) -> T,
    ) -> Vec<T> {
        let path = join(prefix, key);
        match obj.get(key) {
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .filter_map(|(i, entry)| {
                    let entry_path = format!("{path}.{i}");
                    match entry {
                        Value::Object(e) => Some(item(self, e, &entry_path)),
                        _ => {
                            self.flag(entry_path, ViolationKind::WrongType("an object"));
                            None
                        }
                    }
                })
                .collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(_) => {
                self.flag(path, ViolationKind::WrongType("an array"));
                Vec::new()
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.violations.is_empty() {
            Ok(value)
        } else {
            Err(ValidationErrors(self.violations))
        }
    }
}

fn empty_address() -> AddressDetails {
    AddressDetails { hno: String::new(), street: String::new(), city: String::new(), state: String::new() }
}

fn work_experience(c: &mut Checker, e: &Map<String, Value>, path: &str) -> WorkExperience {
    WorkExperience {
        company_name: c.text(e, path, "companyName"),
        from_date: c.text(e, path, "fromDate"),
        to_date: c.text(e, path, "toDate"),
        address: c.text(e, path, "address"),
    }
}

fn qualification(c: &mut Checker, e: &Map<String, Value>, path: &str) -> Qualification {
    Qualification {
        qualification_name: c.text(e, path, "qualificationName"),
        from_date: c.text(e, path, "fromDate"),
        to_date: c.text(e, path, "toDate"),
        percentage: c.number(e, path, "percentage"),
    }
}

fn project(c: &mut Checker, e: &Map<String, Value>, path: &str) -> Project {
    Project {
        title: c.text(e, path, "title"),
        description: c.text(e, path, "description"),
    }
}

/// Check a full create payload. Unknown keys (including a client-sent `regid`) are ignored.
pub fn validate_new_employee(payload: &Value) -> Result<NewEmployee, ValidationErrors> {
    let Value::Object(obj) = payload else {
        return Err(ValidationErrors(vec![Violation {
            path: ROOT.into(),
            kind: ViolationKind::WrongType("an object"),
        }]));
    };

    let mut c = Checker::default();
    let candidate = NewEmployee {
        name: c.text(obj, "", "name"),
        email: c.text(obj, "", "email"),
        age: c.number(obj, "", "age"),
        gender: c.text(obj, "", "gender"),
        phone_no: c.text(obj, "", "phoneNo"),
        address_details: c.address(obj, ""),
        work_experience: c.list(obj, "", "workExperience", work_experience),
        qualifications: c.list(obj, "", "qualifications", qualification),
        projects: c.list(obj, "", "projects", project),
        photo: c.photo(obj, ""),
    };
    c.finish(candidate)
}

/// Check the fields of an update payload. Only keys present are checked, each
/// under the same rules as on create; `regid` must already be removed.
pub fn validate_employee_patch(fields: &Map<String, Value>) -> Result<EmployeePatch, ValidationErrors> {
    let mut c = Checker::default();
    let mut patch = EmployeePatch::default();
    let has = |key: &str| fields.contains_key(key);

    if has("name") { patch.name = Some(c.text(fields, "", "name")); }
    if has("email") { patch.email = Some(c.text(fields, "", "email")); }
    if has("age") { patch.age = Some(c.number(fields, "", "age")); }
    if has("gender") { patch.gender = Some(c.text(fields, "", "gender")); }
    if has("phoneNo") { patch.phone_no = Some(c.text(fields, "", "phoneNo")); }
    if has("addressDetails") { patch.address_details = Some(c.address(fields, "")); }
    if has("workExperience") {
        patch.work_experience = Some(c.list(fields, "", "workExperience", work_experience));
    }
    if has("qualifications") {
        patch.qualifications = Some(c.list(fields, "", "qualifications", qualification));
    }
    if has("projects") { patch.projects = Some(c.list(fields, "", "projects", project)); }
    if has("photo") { patch.photo = Some(c.photo(fields, "")); }

    c.finish(patch)
}

//! Payload validation — run this before any write reaches the datastore.
//!
//! Rules enforced:
//! 1. `title`, `type`, `description`, `location` and `salary` are present.
//! 2. `company` is an object whose `name`, `description`, `contactEmail`
//!    and `contactPhone` are present.
//!
//! "Present" means truthy: anything except absent, `null`, `false`, `0`
//! and `""`. Values are not coerced, trimmed, or format-checked; a numeric
//! `salary` is stored as a number and contact fields are presence-only.
//!
//! Unknown top-level fields are ignored. Unknown `company` fields are kept.

use serde_json::{Map, Value};

use crate::{Company, DomainError, JobDetails};

const COMPANY_FIELDS: [&str; 4] = ["name", "description", "contactEmail", "contactPhone"];

/// Validate a raw JSON body and extract the job fields from it.
///
/// # Errors
/// [`DomainError::MissingField`] naming the first missing field, checked in
/// the order the fields are listed above.
pub fn validate_job_payload(payload: &Value) -> Result<JobDetails, DomainError> {
    let title = required(payload, "title")?;
    let job_type = required(payload, "type")?;
    let description = required(payload, "description")?;
    let location = required(payload, "location")?;
    let salary = required(payload, "salary")?;

    let company = payload.get("company").unwrap_or(&Value::Null);
    let extra: Map<String, Value> = company
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .filter(|(key, _)| !COMPANY_FIELDS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default();
    let company = Company {
        name: required_in(company, "name", "company.name")?,
        description: required_in(company, "description", "company.description")?,
        contact_email: required_in(company, "contactEmail", "company.contactEmail")?,
        contact_phone: required_in(company, "contactPhone", "company.contactPhone")?,
        extra,
    };

    Ok(JobDetails {
        title,
        job_type,
        description,
        location,
        salary,
        company,
    })
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy, everything
/// else (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn required(obj: &Value, key: &'static str) -> Result<Value, DomainError> {
    required_in(obj, key, key)
}

fn required_in(obj: &Value, key: &str, label: &'static str) -> Result<Value, DomainError> {
    obj.get(key)
        .filter(|value| is_truthy(value))
        .cloned()
        .ok_or(DomainError::MissingField(label))
}

//! Unit tests for job payload validation.

use serde_json::{json, Value};

use crate::{validate_job_payload, DomainError};

fn full_payload() -> Value {
    json!({
        "title": "Senior React Developer",
        "type": "Full-Time",
        "description": "Join our team as a Senior React Developer.",
        "location": "Boston, MA",
        "salary": "$70K - $80K",
        "company": {
            "name": "NewTek Solutions",
            "description": "NewTek is a leading tech company.",
            "contactEmail": "contact@teksolutions.com",
            "contactPhone": "555-555-5555"
        }
    })
}

/// Every top-level and nested required field, as (pointer, label).
const REQUIRED: &[(&str, &str)] = &[
    ("/title", "title"),
    ("/type", "type"),
    ("/description", "description"),
    ("/location", "location"),
    ("/salary", "salary"),
    ("/company/name", "company.name"),
    ("/company/description", "company.description"),
    ("/company/contactEmail", "company.contactEmail"),
    ("/company/contactPhone", "company.contactPhone"),
];

fn remove_at(payload: &mut Value, pointer: &str) {
    let (parent, key) = pointer.rsplit_once('/').unwrap();
    let parent = if parent.is_empty() {
        payload
    } else {
        payload.pointer_mut(parent).unwrap()
    };
    parent.as_object_mut().unwrap().remove(key);
}

#[test]
fn full_payload_is_accepted() {
    let details = validate_job_payload(&full_payload()).expect("payload is complete");
    assert_eq!(details.title, "Senior React Developer");
    assert_eq!(details.job_type, "Full-Time");
    assert_eq!(details.company.contact_email, "contact@teksolutions.com");
}

#[test]
fn each_missing_field_is_reported() {
    for (pointer, label) in REQUIRED {
        let mut payload = full_payload();
        remove_at(&mut payload, pointer);
        assert_eq!(
            validate_job_payload(&payload),
            Err(DomainError::MissingField(*label)),
            "removing {pointer} should fail"
        );
    }
}

#[test]
fn falsy_values_count_as_missing() {
    for falsy in [json!(""), json!(null), json!(0), json!(0.0), json!(false)] {
        let mut payload = full_payload();
        payload["salary"] = falsy.clone();
        assert_eq!(
            validate_job_payload(&payload),
            Err(DomainError::MissingField("salary")),
            "salary = {falsy} should fail"
        );
    }
}

#[test]
fn truthy_non_string_values_are_kept_as_sent() {
    let mut payload = full_payload();
    payload["salary"] = json!(120000);
    payload["company"]["contactPhone"] = json!(5555555555u64);
    payload["type"] = json!(true);

    let details = validate_job_payload(&payload).expect("truthy values are present");
    assert_eq!(details.salary, json!(120000));
    assert_eq!(details.company.contact_phone, json!(5555555555u64));
    assert_eq!(details.job_type, json!(true));
}

#[test]
fn empty_arrays_and_objects_are_truthy() {
    let mut payload = full_payload();
    payload["description"] = json!([]);
    payload["location"] = json!({});
    assert!(validate_job_payload(&payload).is_ok());
}

#[test]
fn company_must_be_an_object() {
    let mut payload = full_payload();
    payload["company"] = json!("NewTek Solutions");
    assert_eq!(
        validate_job_payload(&payload),
        Err(DomainError::MissingField("company.name"))
    );
}

#[test]
fn contact_fields_are_presence_only() {
    let mut payload = full_payload();
    payload["company"]["contactEmail"] = json!("not an email");
    payload["company"]["contactPhone"] = json!("call me maybe");
    assert!(validate_job_payload(&payload).is_ok());
}

#[test]
fn whitespace_is_not_trimmed() {
    let mut payload = full_payload();
    payload["location"] = json!("  ");
    let details = validate_job_payload(&payload).unwrap();
    assert_eq!(details.location, "  ");
}

#[test]
fn unknown_fields_and_client_ids_are_ignored() {
    let mut payload = full_payload();
    payload["_id"] = json!("65a1f0c2e4b0a1b2c3d4e5f6");
    payload["featured"] = json!(true);
    let details = validate_job_payload(&payload).unwrap();
    let stored = serde_json::to_value(&details).unwrap();
    assert!(stored.get("_id").is_none());
    assert!(stored.get("featured").is_none());
}

#[test]
fn extra_company_fields_are_kept() {
    let mut payload = full_payload();
    payload["company"]["website"] = json!("https://teksolutions.com");
    payload["company"]["size"] = json!(250);

    let details = validate_job_payload(&payload).unwrap();
    assert_eq!(details.company.extra.len(), 2);
    assert_eq!(details.company.extra["website"], "https://teksolutions.com");

    let stored = serde_json::to_value(&details.company).unwrap();
    assert_eq!(stored, payload["company"]);
}

#[test]
fn non_object_body_is_rejected() {
    assert_eq!(
        validate_job_payload(&json!([1, 2, 3])),
        Err(DomainError::MissingField("title"))
    );
}

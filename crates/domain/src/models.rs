//! Core domain models for job postings.
//!
//! `JobDetails` is everything a client may write; `Job` adds the
//! storage-assigned identifier. Field names on the wire follow the
//! public JSON contract (`type`, `contactEmail`, `contactPhone`).
//!
//! Field values are kept exactly as the client sent them (a numeric
//! `salary` stays a number); validation only checks that they are truthy.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::JobId;

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

/// The hiring company attached to every job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: Value,
    pub description: Value,
    pub contact_email: Value,
    pub contact_phone: Value,
    /// Any further keys the client sent inside `company`, stored as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// JobDetails
// ---------------------------------------------------------------------------

/// The mutable part of a job. Create and update both carry a full set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetails {
    pub title: Value,
    /// Employment type, e.g. `Full-Time`.
    #[serde(rename = "type")]
    pub job_type: Value,
    pub description: Value,
    pub location: Value,
    pub salary: Value,
    pub company: Company,
}

// ---------------------------------------------------------------------------
// Job
// ---------------------------------------------------------------------------

/// A persisted job posting as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: JobId,
    #[serde(flatten)]
    pub details: JobDetails,
}

impl Job {
    pub fn new(id: JobId, details: JobDetails) -> Self {
        Self { id, details }
    }
}

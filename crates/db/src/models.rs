//! Document structs that map 1-to-1 onto MongoDB collections.
//!
//! These are *persistence* models. Domain types live in the `domain`
//! crate; conversions are provided in both directions.

use bson::oid::ObjectId;
use domain::{Company, Job, JobDetails};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the only collection.
pub const JOBS_COLLECTION: &str = "jobs";

/// A persisted document in the `jobs` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: Value,
    #[serde(rename = "type")]
    pub job_type: Value,
    pub description: Value,
    pub location: Value,
    pub salary: Value,
    pub company: Company,
}

impl JobDocument {
    pub fn new(id: ObjectId, details: JobDetails) -> Self {
        let JobDetails { title, job_type, description, location, salary, company } = details;
        Self { id, title, job_type, description, location, salary, company }
    }
}

impl From<JobDocument> for Job {
    fn from(doc: JobDocument) -> Self {
        Job::new(
            doc.id.into(),
            JobDetails {
                title: doc.title,
                job_type: doc.job_type,
                description: doc.description,
                location: doc.location,
                salary: doc.salary,
                company: doc.company,
            },
        )
    }
}

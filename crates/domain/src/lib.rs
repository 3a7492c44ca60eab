//! `domain` crate — job posting models, identifiers, and payload validation.

pub mod error;
pub mod id;
pub mod models;
pub mod validation;

pub use error::DomainError;
pub use id::JobId;
pub use models::{Company, Job, JobDetails};
pub use validation::validate_job_payload;

#[cfg(test)]
mod validation_tests;

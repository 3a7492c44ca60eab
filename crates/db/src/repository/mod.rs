//! Repository layer — one method per datastore operation.
//!
//! Every method performs exactly one round trip and returns a
//! `Result<T, DbError>`. No validation, no HTTP concerns.

pub mod jobs;
pub mod memory;

use async_trait::async_trait;
use domain::{Job, JobDetails, JobId};

use crate::DbError;

pub use jobs::MongoJobRepository;
pub use memory::InMemoryJobRepository;

/// Storage contract for job postings.
///
/// Handlers receive an `Arc<dyn JobRepository>` at startup, so a connected
/// store is a precondition of serving any request.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Return up to `limit` jobs in storage order. `0` means no limit.
    async fn list(&self, limit: u64) -> Result<Vec<Job>, DbError>;

    /// Fetch a single job, or [`DbError::NotFound`].
    async fn get(&self, id: JobId) -> Result<Job, DbError>;

    /// Persist a new job and return its freshly assigned identifier.
    async fn insert(&self, details: &JobDetails) -> Result<JobId, DbError>;

    /// Overwrite every mutable field of an existing job.
    ///
    /// Returns [`DbError::NotFound`] if no document matched.
    async fn replace(&self, id: JobId, details: &JobDetails) -> Result<(), DbError>;

    /// Permanently delete a job.
    ///
    /// Returns [`DbError::NotFound`] if nothing was deleted.
    async fn delete(&self, id: JobId) -> Result<(), DbError>;

    /// Number of stored jobs.
    async fn count(&self) -> Result<u64, DbError>;
}

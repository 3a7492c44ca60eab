//! Initial data for an empty `jobs` collection.
//!
//! The sample postings ship inside the binary (`seed/jobs.json`) and are
//! inserted one by one through the regular repository.

use domain::{JobDetails, JobId};
use tracing::info;

use crate::{DbError, JobRepository};

const SEED_JOBS: &str = include_str!("../seed/jobs.json");

/// Parse the bundled sample jobs.
pub fn seed_jobs() -> Result<Vec<JobDetails>, DbError> {
    Ok(serde_json::from_str(SEED_JOBS)?)
}

/// Insert the sample jobs if and only if the store is empty.
///
/// Returns the identifiers that were inserted (empty when the store already
/// held data).
pub async fn seed_if_empty(repo: &dyn JobRepository) -> Result<Vec<JobId>, DbError> {
    let existing = repo.count().await?;
    if existing > 0 {
        info!("Skipping seed, collection already holds {existing} job(s)");
        return Ok(Vec::new());
    }

    let jobs = seed_jobs()?;
    let mut inserted = Vec::with_capacity(jobs.len());
    for job in &jobs {
        inserted.push(repo.insert(job).await?);
    }
    info!("Seeded {} job(s)", inserted.len());
    Ok(inserted)
}

//! `InMemoryJobRepository` — a `Vec`-backed [`JobRepository`].
//!
//! Same observable semantics as the MongoDB store (insertion order,
//! `NotFound` on missed writes). Useful for tests and for running the
//! server locally without a database. A failing variant stands in for an
//! unreachable datastore.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use domain::{Job, JobDetails, JobId};

use super::JobRepository;
use crate::DbError;

#[derive(Debug, Clone, Default)]
pub struct InMemoryJobRepository {
    jobs: Arc<Mutex<Vec<Job>>>,
    /// When set, every operation fails with `DbError::Unavailable`.
    failure: Option<String>,
}

impl InMemoryJobRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every operation fails with the given message.
    pub fn failing(msg: impl Into<String>) -> Self {
        Self {
            jobs: Arc::default(),
            failure: Some(msg.into()),
        }
    }

    /// Snapshot of the stored jobs (insertion order).
    pub fn snapshot(&self) -> Vec<Job> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Job>> {
        self.jobs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self) -> Result<(), DbError> {
        match &self.failure {
            Some(msg) => Err(DbError::Unavailable(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn list(&self, limit: u64) -> Result<Vec<Job>, DbError> {
        self.check()?;
        let jobs = self.lock();
        let take = if limit == 0 {
            jobs.len()
        } else {
            usize::try_from(limit).unwrap_or(usize::MAX)
        };
        Ok(jobs.iter().take(take).cloned().collect())
    }

    async fn get(&self, id: JobId) -> Result<Job, DbError> {
        self.check()?;
        self.lock()
            .iter()
            .find(|job| job.id == id)
            .cloned()
            .ok_or(DbError::NotFound)
    }

    async fn insert(&self, details: &JobDetails) -> Result<JobId, DbError> {
        self.check()?;
        let id = JobId::new();
        self.lock().push(Job::new(id, details.clone()));
        Ok(id)
    }

    async fn replace(&self, id: JobId, details: &JobDetails) -> Result<(), DbError> {
        self.check()?;
        let mut jobs = self.lock();
        let job = jobs.iter_mut().find(|job| job.id == id).ok_or(DbError::NotFound)?;
        job.details = details.clone();
        Ok(())
    }

    async fn delete(&self, id: JobId) -> Result<(), DbError> {
        self.check()?;
        let mut jobs = self.lock();
        let index = jobs.iter().position(|job| job.id == id).ok_or(DbError::NotFound)?;
        jobs.remove(index);
        Ok(())
    }

    async fn count(&self) -> Result<u64, DbError> {
        self.check()?;
        Ok(self.lock().len() as u64)
    }
}

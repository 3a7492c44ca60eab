//! MongoDB-backed job repository over the `jobs` collection.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use domain::{Job, JobDetails, JobId};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use tracing::debug;

use super::JobRepository;
use crate::models::{JobDocument, JOBS_COLLECTION};
use crate::DbError;

#[derive(Debug, Clone)]
pub struct MongoJobRepository {
    collection: Collection<JobDocument>,
}

impl MongoJobRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(JOBS_COLLECTION),
        }
    }
}

#[async_trait]
impl JobRepository for MongoJobRepository {
    async fn list(&self, limit: u64) -> Result<Vec<Job>, DbError> {
        let mut find = self.collection.find(doc! {});
        if limit > 0 {
            find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }
        let docs: Vec<JobDocument> = find.await?.try_collect().await?;
        debug!(count = docs.len(), limit, "listed jobs");
        Ok(docs.into_iter().map(Job::from).collect())
    }

    async fn get(&self, id: JobId) -> Result<Job, DbError> {
        let oid: ObjectId = id.into();
        self.collection
            .find_one(doc! { "_id": oid })
            .await?
            .map(Job::from)
            .ok_or(DbError::NotFound)
    }

    async fn insert(&self, details: &JobDetails) -> Result<JobId, DbError> {
        let document = JobDocument::new(ObjectId::new(), details.clone());
        self.collection.insert_one(&document).await?;
        debug!(id = %document.id, "inserted job");
        Ok(document.id.into())
    }

    async fn replace(&self, id: JobId, details: &JobDetails) -> Result<(), DbError> {
        let oid: ObjectId = id.into();
        let fields = bson::to_document(details)?;
        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": fields })
            .await?;

        if result.matched_count == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: JobId) -> Result<(), DbError> {
        let oid: ObjectId = id.into();
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;

        if result.deleted_count == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DbError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}

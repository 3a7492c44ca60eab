//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("bson serialization error: {0}")]
    Serialize(#[from] bson::ser::Error),

    #[error("invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("document not found")]
    NotFound,

    /// The backing store refused the operation (used by the in-memory store).
    #[error("datastore unavailable: {0}")]
    Unavailable(String),
}

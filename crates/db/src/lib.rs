//! `db` crate — pure persistence layer.
//!
//! Provides the MongoDB connector, the persisted document shape, and the
//! [`JobRepository`] trait with its MongoDB and in-memory implementations.
//! No HTTP concerns live here.

pub mod error;
pub mod models;
pub mod pool;
pub mod repository;
pub mod seed;

pub use error::DbError;
pub use repository::{InMemoryJobRepository, JobRepository, MongoJobRepository};

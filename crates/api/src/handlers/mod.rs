pub mod jobs;

use std::sync::Arc;

use db::JobRepository;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobRepository>,
}

impl AppState {
    pub fn new(jobs: Arc<dyn JobRepository>) -> Self {
        Self { jobs }
    }
}

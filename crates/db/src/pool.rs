//! MongoDB connector.

use bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database};
use tracing::info;

use crate::DbError;

/// Database used when none is configured.
pub const DEFAULT_DATABASE: &str = "jobsdb";

/// Connect to `uri` and return a handle to `database`.
///
/// The client is pinned to Stable API v1 (strict, deprecation errors on).
/// The driver connects lazily, so a `ping` is issued here to surface bad
/// URIs and unreachable servers at startup rather than on the first request.
pub async fn connect(uri: &str, database: &str) -> Result<Database, DbError> {
    info!("Connecting to MongoDB (database={database})");
    let mut options = ClientOptions::parse(uri).await?;
    options.server_api = Some(
        ServerApi::builder()
            .version(ServerApiVersion::V1)
            .strict(true)
            .deprecation_errors(true)
            .build(),
    );

    let client = Client::with_options(options)?;
    let db = client.database(database);
    db.run_command(doc! { "ping": 1 }).await?;
    info!("MongoDB connected");
    Ok(db)
}

//! `job-board` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve` — connect to MongoDB, seed an empty collection, start the API.
//! - `seed`  — seed an empty collection and exit.

mod config;

use std::sync::Arc;

use anyhow::Context;
use api::AppState;
use clap::{Parser, Subcommand};
use db::{seed::seed_if_empty, InMemoryJobRepository, JobRepository, MongoJobRepository};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "job-board", about = "Job listing REST API", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        /// Listen port; overrides `PORT`.
        #[arg(long)]
        port: Option<u16>,
        /// Keep jobs in process memory instead of MongoDB.
        #[arg(long)]
        in_memory: bool,
    },
    /// Insert the sample jobs if the collection is empty.
    Seed,
}

#[tokio::main]
async fn main() {
    config::load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::from_env().context("invalid configuration")?;

    match cli.command {
        Command::Serve { port, in_memory } => {
            let repo: Arc<dyn JobRepository> = if in_memory {
                info!("Using in-memory job store");
                Arc::new(InMemoryJobRepository::new())
            } else {
                Arc::new(connect(&settings).await?)
            };

            seed_if_empty(repo.as_ref())
                .await
                .context("failed to seed jobs collection")?;

            let bind = format!("0.0.0.0:{}", port.unwrap_or(settings.port));
            api::serve(&bind, AppState::new(repo))
                .await
                .with_context(|| format!("server on {bind} failed"))?;
        }
        Command::Seed => {
            let repo = connect(&settings).await?;
            let inserted = seed_if_empty(&repo)
                .await
                .context("failed to seed jobs collection")?;
            info!("Seed complete ({} inserted)", inserted.len());
        }
    }
    Ok(())
}

async fn connect(settings: &Settings) -> anyhow::Result<MongoJobRepository> {
    let uri = settings.require_mongodb_uri()?;
    let db = db::pool::connect(uri, &settings.database)
        .await
        .context("MongoDB connection failed")?;
    Ok(MongoJobRepository::new(&db))
}

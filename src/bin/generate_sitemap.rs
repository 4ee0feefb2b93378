//! Writes `sitemap.xml` from the stored blog posts and services.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use lexfolio::config::AppConfig;
use lexfolio::content::models::{BlogPost, Service};
use lexfolio::db::repository::{MongoCollectionRepository, BLOGS, SERVICES};
use lexfolio::sitemap::build_sitemap;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Destination file. Defaults to `<site.public_dir>/sitemap.xml`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Public origin used in every `<loc>`. Defaults to `site.base_url`.
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexfolio=info,generate_sitemap=info".into()),
        )
        .init();

    match run(Args::parse()).await {
        Ok(path) => {
            tracing::info!(path = %path.display(), "Sitemap generated");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Error generating sitemap: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<PathBuf> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    let client = mongodb::Client::with_uri_str(&config.mongodb.uri)
        .await
        .context("Failed to connect to MongoDB")?;
    let db = client.database(&config.mongodb.database);
    let blogs = MongoCollectionRepository::<BlogPost>::new(&db, BLOGS);
    let services = MongoCollectionRepository::<Service>::new(&db, SERVICES);

    let base_url = args.base_url.unwrap_or(config.site.base_url);
    let today = chrono::Utc::now().date_naive();
    let xml = build_sitemap(&blogs, &services, &base_url, today)
        .await
        .context("Failed to read content")?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.site.public_dir).join("sitemap.xml"));
    tokio::fs::write(&output, xml)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(output)
}

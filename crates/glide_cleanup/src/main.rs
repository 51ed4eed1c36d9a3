//! glide-cleanup
//!
//! One-off inventory cleanup: deletes a fixed list of collection items
//! through a REST API, verifies each delete with a follow-up fetch, and
//! writes a JSON report. Items are processed strictly in order; the run
//! never aborts on a per-item failure, only on a missing token.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod client;
mod report;

use client::CleanupClient;
use report::{CleanupReport, ItemReport};

const TOKEN_ENV: &str = "GLIDE_CLEANUP_TOKEN";

#[derive(Parser)]
#[command(name = "glide-cleanup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Delete collection items over REST and report the outcome", long_about = None)]
struct Cli {
    /// API base URL, e.g. https://api.example.com/v2
    #[arg(long)]
    base_url: String,

    /// Collection id the items belong to
    #[arg(long)]
    collection: String,

    /// Item ids to delete, processed in order
    #[arg(required = true)]
    item_ids: Vec<String>,

    /// Where to write the JSON report
    #[arg(long, default_value = "cleanup-report.json")]
    report: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let token = std::env::var(TOKEN_ENV)
        .with_context(|| format!("{TOKEN_ENV} must be set to an API token"))?;
    let client = CleanupClient::new(&cli.base_url, token)?;

    let mut report = CleanupReport::new(&cli.collection);
    for item_id in &cli.item_ids {
        report.push(process_item(&client, &cli.collection, item_id).await);
    }

    report.write(&cli.report)?;
    info!(
        total = report.total,
        deleted = report.deleted,
        failed = report.failed,
        report = %cli.report.display(),
        "cleanup finished"
    );
    Ok(())
}

async fn process_item(client: &CleanupClient, collection: &str, item_id: &str) -> ItemReport {
    info!(item_id, "deleting");
    let status = match client.delete_item(collection, item_id).await {
        Ok(status) => status,
        Err(err) => {
            warn!(item_id, error = %err, "delete failed");
            return ItemReport {
                item_id: item_id.to_string(),
                delete_status: None,
                deleted: false,
                verified_gone: None,
                error: Some(err.to_string()),
            };
        }
    };

    if !status.is_success() {
        warn!(item_id, %status, "delete rejected");
        return ItemReport {
            item_id: item_id.to_string(),
            delete_status: Some(status.as_u16()),
            deleted: false,
            verified_gone: None,
            error: None,
        };
    }

    let (verified_gone, error) = match client.item_status(collection, item_id).await {
        Ok(check) => {
            let gone = check == reqwest::StatusCode::NOT_FOUND;
            if !gone {
                warn!(item_id, %check, "item still present after delete");
            }
            (Some(gone), None)
        }
        Err(err) => {
            warn!(item_id, error = %err, "verification failed");
            (None, Some(err.to_string()))
        }
    };

    ItemReport {
        item_id: item_id.to_string(),
        delete_status: Some(status.as_u16()),
        deleted: true,
        verified_gone,
        error,
    }
}

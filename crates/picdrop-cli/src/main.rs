//! picdrop CLI — upload one image through a presigned URL and record its metadata.
//!
//! Set PICDROP_API_URL (or API_URL) to the backend hosting the issuer and metadata writer.

use anyhow::Context;
use clap::{Parser, Subcommand};
use picdrop_cli::{init_tracing, load_selected_file};
use picdrop_client::UploadOrchestrator;
use picdrop_core::{canonical_object_url, ClientConfig, UploadStatus};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "picdrop", about = "Presigned image uploader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image file
    Upload {
        /// Path to the file to upload
        file: std::path::PathBuf,
        /// Media type to declare instead of guessing from the extension
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Print the canonical object URL for a presigned URL
    CanonicalUrl {
        /// Presigned URL
        url: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload { file, content_type } => {
            let selected = load_selected_file(&file, content_type.as_deref())?;
            let config = ClientConfig::from_env().context(
                "Failed to load configuration. Check PICDROP_API_URL and PICDROP_REQUEST_TIMEOUT_SECS",
            )?;
            let orchestrator = UploadOrchestrator::from_config(&config)?;

            let print_status = |status: &UploadStatus| eprintln!("{}", status);
            let result = orchestrator.upload(Some(&selected), &print_status).await?;
            print_json(&result)?;
        }
        Commands::CanonicalUrl { url } => {
            println!("{}", canonical_object_url(&url));
        }
    }

    Ok(())
}

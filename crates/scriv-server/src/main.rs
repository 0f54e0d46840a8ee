//! scriv server binary.
//!
//! HTTP front for the block-document store plus the AI text-generation
//! helper.
//!
//! ## Usage
//!
//! ```bash
//! scriv-server [--port 8000] [--db scriv.db]
//! ```
//!
//! `OPENAI_API_KEY` (environment or `.env`) enables the generate route;
//! without it the route stays up and reports failure as data.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scriv_server::api;
use scriv_server::llm::{LlmProvider, OpenAiProvider};
use scriv_server::AppState;
use scriv_store::{DocumentDb, DocumentService};

#[derive(Parser)]
#[command(name = "scriv-server", about = "Block-document store service")]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// SQLite database path.
    #[arg(long, default_value = "scriv.db")]
    db: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let db = DocumentDb::open(&args.db)?;
    let documents = DocumentService::new(db);
    info!("opened document store at {}", args.db.display());

    let llm: Option<Arc<dyn LlmProvider>> = match OpenAiProvider::from_env() {
        Some(provider) => Some(Arc::new(provider)),
        None => {
            warn!("OPENAI_API_KEY is not set; text generation will report failure");
            None
        }
    };

    let state = AppState { documents, llm };
    let app = api::configure(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

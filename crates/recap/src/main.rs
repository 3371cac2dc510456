//! recap — accept an uploaded call recording or chat export, transcribe it,
//! and return a normalized transcript with an abstractive summary.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use recap_server::{AppContext, build_router, metrics};
use recap_settings::load_or_default;
use recap_summarize::{HfSummarizer, HfSummarizerConfig};
use recap_transcription::SidecarTranscriber;

/// Command-line arguments. Anything not given here falls back to the
/// settings file, `RECAP_*` environment variables, and compiled defaults.
#[derive(Debug, Parser)]
#[command(name = "recap", version, about)]
struct Args {
    /// Path to a JSON settings file.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Override the listening port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the upload directory.
    #[arg(long)]
    upload_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut settings = load_or_default(args.settings.as_deref());
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(dir) = args.upload_dir {
        settings.server.upload_dir = dir.display().to_string();
    }

    let metrics_handle = metrics::install_recorder();

    std::fs::create_dir_all(&settings.server.upload_dir)
        .with_context(|| format!("create upload directory {}", settings.server.upload_dir))?;

    // One HTTP client shared by both model backends.
    let http = reqwest::Client::new();
    let transcriber = Arc::new(SidecarTranscriber::with_client(
        settings.transcription.base_url.clone(),
        http.clone(),
    ));
    let summarizer = Arc::new(HfSummarizer::with_client(
        HfSummarizerConfig {
            base_url: settings.summarizer.base_url.clone(),
            model: settings.summarizer.model.clone(),
            api_token: settings.summarizer.api_token.clone(),
        },
        http,
    ));
    info!(
        transcriber = %settings.transcription.base_url,
        summarizer_model = %settings.summarizer.model,
        "model backends configured"
    );

    let ctx = AppContext::new(transcriber, summarizer, &settings.server.upload_dir)
        .with_metrics(metrics_handle);
    let app = build_router(ctx, &settings.server);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(%addr, "recap server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

/// Resolve when ctrl-c is received.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}

//! The `minutes` server binary.
//!
//! Wires settings, logging, metrics, the SQLite store, and the HTTP
//! service clients into the axum server, then runs until interrupted.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use minutes_core::logging::init_tracing;
use minutes_server::{AppState, build_router, metrics};
use minutes_settings::MinutesSettings;
use minutes_store::{ConnectionConfig, MeetingStore, run_migrations, sqlite::connection};
use minutes_summarize::{SummarizerClient, SummarizerConfig};
use minutes_transcribe::{HttpRecognizer, RecognizerConfig};

/// Meeting transcription and summarization server.
#[derive(Debug, Parser)]
#[command(name = "minutes", version)]
struct Args {
    /// Port to listen on (overrides settings).
    #[arg(long)]
    port: Option<u16>,

    /// Database file path (overrides settings).
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Settings file path (default: ~/.minutes/settings.json).
    #[arg(long)]
    settings_path: Option<PathBuf>,
}

fn load_settings(args: &Args) -> anyhow::Result<MinutesSettings> {
    let mut settings = match &args.settings_path {
        Some(path) => minutes_settings::load_settings_from_path(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => minutes_settings::load_settings().context("loading settings")?,
    };
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(db_path) = &args.db_path {
        settings.database.path = db_path.display().to_string();
    }
    settings.validate();
    Ok(settings)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args)?;
    init_tracing(&settings.logging.directive, settings.logging.json);

    let metrics_handle = metrics::install_recorder();

    let db_path = minutes_settings::expand_home(&settings.database.path);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating database directory {}", parent.display()))?;
    }
    let pool = connection::new_file(&db_path, &ConnectionConfig::default())
        .with_context(|| format!("opening database {}", db_path.display()))?;
    {
        let conn = pool.get().context("checking out migration connection")?;
        run_migrations(&conn).context("running migrations")?;
    }
    info!(path = %db_path.display(), "database ready");

    let recognizer = Arc::new(HttpRecognizer::new(RecognizerConfig {
        base_url: settings.recognizer.base_url.clone(),
        timeout: Duration::from_secs(settings.recognizer.timeout_seconds),
    }));
    let summarizer = SummarizerClient::new(SummarizerConfig {
        base_url: settings.summarizer.base_url.clone(),
        model: settings.summarizer.model.clone(),
        window_chars: settings.summarizer.window_chars,
        min_length: settings.summarizer.min_length,
        max_length: settings.summarizer.max_length,
        timeout: Duration::from_secs(settings.summarizer.timeout_seconds),
    });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("parsing listen address")?;

    let state = Arc::new(AppState {
        store: MeetingStore::new(pool),
        recognizer,
        summarizer,
        settings: Arc::new(settings),
    });
    let router = build_router(state, Some(metrics_handle));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "minutes server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

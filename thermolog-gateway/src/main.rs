use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use thermolog_gateway::{Config, MemoryCache, api, fatal};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "thermolog-gateway")]
#[command(about = "Collects weather station hub uplinks and serves them over HTTP")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,thermolog_gateway=info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();
    fatal::exit_on_panic();

    let cli = Cli::parse();

    info!(path = ?cli.config, "Loading configuration");
    let config = Config::load_or_default(&cli.config);

    let cache = MemoryCache::new();
    let app = api::router(cache);

    let http_addr = config.http_addr();
    let listener = TcpListener::bind(http_addr)
        .await
        .wrap_err_with(|| format!("failed to listen on port {}", config.port))?;
    info!(%http_addr, "HTTP server listening");

    let cancel = CancellationToken::new();
    let cancel_on_signal = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl+C, shutting down...");
                cancel_on_signal.cancel();
            }
            Err(e) => error!(error = ?e, "failed to listen for Ctrl+C"),
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .wrap_err("HTTP server error")?;
    info!("HTTP server shut down");

    Ok(())
}

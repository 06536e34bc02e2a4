//! # nfmsg — Binary Entry Point
//!
//! Loads configuration, installs logging, and serves the message API until
//! Ctrl-C or SIGTERM.

use std::path::PathBuf;

use clap::Parser;
use nfmsg_api::config::Config;
use nfmsg_api::state::AppState;
use nfmsg_core::MessageStore;

/// nfmsg — in-memory message board network function.
#[derive(Parser, Debug)]
#[command(name = "nfmsg", version, about, long_about = None)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging is not up yet, so configuration errors go to stderr via the
    // returned error.
    let config = Config::load(cli.config.as_deref())?;
    nfmsg_api::logging::init(&config.logger, cli.verbose);

    let addr = config.bind_addr().map_err(|e| {
        tracing::error!("invalid listen address: {e}");
        e
    })?;
    tracing::info!(
        nf = %config.configuration.nf_name,
        version = %config.info.version,
        "configuration loaded"
    );

    let state = AppState::with_config(config, MessageStore::new());
    let app = nfmsg_api::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("failed to bind {addr}: {e}");
        e
    })?;
    tracing::info!("nfmsg listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("nfmsg stopped");
    Ok(())
}

/// Resolve when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

//! Hashlab server entry point.
//!
//! Binary name: `hashlab`
//!
//! Parses CLI arguments, wires the hash service, and serves the SHA-256
//! demo API until Ctrl+C or SIGTERM.

mod http;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[derive(Parser)]
#[command(name = "hashlab", version, about = "SHA-256 hashing and integrity demo server")]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1", env = "HASHLAB_HOST")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3001, env = "HASHLAB_PORT")]
    port: u16,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn,hashlab=info",
        1 => "info,hashlab=debug,hashlab_core=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let state = AppState::new();

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("  SHA-256 demo server running on http://{addr}");
    println!("  Health check: http://{addr}/api/health");
    println!("  Press Ctrl+C to stop");
    tracing::info!(%addr, "hashlab API listening");

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

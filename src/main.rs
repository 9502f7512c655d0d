use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rosterd::config::Config;
use rosterd::server::{self, AppState};
use rosterd::service::{ScheduleService, TaskService};
use rosterd::store::SupabaseStore;

/// Rosterd - schedule/task CRUD API backed by a remote Supabase store
#[derive(Parser, Debug)]
#[command(version = rosterd::build_info::VERSION, about, long_about = None)]
struct Args {
    /// Host to bind (overrides HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = Config::from_env().context("failed to load configuration")?;

    // CLI overrides environment
    if let Some(host) = args.host {
        config.server.host = host.to_string();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // One store handle for the process lifetime, shared by both services.
    let store = Arc::new(SupabaseStore::new(
        reqwest::Client::new(),
        &config.supabase.instance_url,
        config.supabase.service_role_key.clone(),
    ));

    let state = AppState {
        schedules: ScheduleService::new(store.clone()),
        tasks: TaskService::new(store),
        api_keys: Arc::new(vec![config.api_key.clone()]),
    };

    let app = server::build_app(
        state,
        config.server.request_timeout_seconds,
        config.server.max_connections,
    );

    let ip: IpAddr = config.server.host.parse().context("invalid host")?;
    let addr = SocketAddr::new(ip, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "Starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

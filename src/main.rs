use clap::Parser;
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal, time::Duration};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use vibecheck_api::{build_app, config::Args, state::AppState, sweeper::cooldown_sweeper};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // parse cli arguments
    let args = Args::parse();
    let state = AppState::from_args(&args);

    if args.sweep_interval > 0 {
        tokio::spawn(cooldown_sweeper(
            state.clone(),
            Duration::from_secs(args.sweep_interval),
        ));
    }

    let app = build_app(state);

    let address = args.bind_addr();
    let listener = TcpListener::bind(&address).await?;

    info!("VibeCheck API running at http://localhost:{}", args.port);
    info!(
        cooldown_ms = args.cooldown_ms,
        trust_forwarded_for = args.trust_forwarded_for,
        sweep_interval = args.sweep_interval,
        "Smash counter configured"
    );

    // connect info feeds the client id fallback
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("VibeCheck API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

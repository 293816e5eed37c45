//! Platewatch - vehicle detection monitoring dashboard
//!
//! Reads vehicle detections, cameras, detection-zone markers, and user
//! accounts from a hosted Supabase backend and serves a read-only
//! dashboard over HTTP.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod io;
pub mod loader;
pub mod records;
pub mod supabase;

pub use config::{load_config, Config};
pub use error::{PlatewatchError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use crate::io::ReqwestHttpClient;
use crate::supabase::SupabaseClient;

/// Run the platewatch service with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::default());
    let client = SupabaseClient::new(&config.backend, http);

    // The load runs exactly once per service session; the dashboard
    // observes Loading until it settles
    let (state_tx, state_rx) = loader::new_state_channel();
    tokio::spawn(async move {
        loader::run_loader(client, state_tx).await;
    });

    let router = dashboard::build_router(state_rx);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.dashboard.port));
    tracing::info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Shutdown signal received");
        })
        .await?;

    tracing::info!("Platewatch stopped");
    Ok(())
}

mod config;
mod relay;
mod routes;
mod state;

use std::sync::Arc;

use config::{LeadConfig, ServerConfig};
use relay::{LeadRelay, ResendRelay};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let server = ServerConfig::from_env().expect("invalid server configuration");

    // Relay is optional: without credentials the site still serves and
    // submissions answer with a server error.
    let relay: Option<Arc<dyn LeadRelay>> = match LeadConfig::from_env().map(ResendRelay::new) {
        Ok(Ok(relay)) => {
            tracing::info!(site = relay.site_name(), "lead relay initialized");
            Some(Arc::new(relay))
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "lead relay failed to build; submissions disabled");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "lead relay not configured; submissions disabled");
            None
        }
    };

    let app = routes::app(state::AppState::new(relay), &server.site_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", server.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = server.port, site_dir = %server.site_dir.display(), "site listening");
    axum::serve(listener, app).await.expect("server failed");
}

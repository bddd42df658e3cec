use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::ServiceConfig;
use crate::routes::{self, AppState};

/// Initialize logging via shared common utils; `LOG_FORMAT=json` switches
/// to structured output for container environments.
fn init_logging() {
    if env::var("LOG_FORMAT").as_deref() == Ok("json") {
        init_logging_json();
    } else {
        init_logging_default();
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8081);
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server.
///
/// Startup order matters: configuration is read before any network
/// activity, and the credential check runs before the listener binds, so a
/// misconfigured process never accepts traffic.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = ServiceConfig::load()?;

    // One cheap identity call validates credentials; failure is fatal.
    let clients = Arc::new(cloud::aws::AwsClients::connect().await?);

    let state = AppState {
        version: cfg.version,
        storage: clients.clone(),
        params: clients,
    };

    let app: Router = routes::build_router(build_cors(), state);

    let addr = load_bind_addr()?;
    info!(%addr, "cloudview listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

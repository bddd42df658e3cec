use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};

use cloud::{ObjectStore, ParameterStore};
use common::types::Envelope;

/// Shared per-process state handed to every handler.
///
/// Immutable after construction; the client handles behind the trait objects
/// are safe for concurrent use by any number of in-flight requests.
#[derive(Clone)]
pub struct AppState {
    pub version: String,
    pub storage: Arc<dyn ObjectStore>,
    pub params: Arc<dyn ParameterStore>,
}

/// Liveness probe: no outbound calls, never reflects backend health.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

async fn list_buckets(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<String>>>, StatusCode> {
    let names = state.storage.list_buckets().await.map_err(|e| {
        error!(error = %e, "list buckets failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(Envelope {
        version: state.version.clone(),
        data: names,
    }))
}

async fn list_parameters(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<String>>>, StatusCode> {
    let names = state.params.describe_parameters().await.map_err(|e| {
        error!(error = %e, "describe parameters failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(Envelope {
        version: state.version.clone(),
        data: names,
    }))
}

async fn get_parameter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Envelope<String>>, StatusCode> {
    // Every parameter-store failure collapses to 404, not-found included.
    let value = state.params.get_parameter(&name).await.map_err(|e| {
        error!(error = %e, %name, "get parameter failed");
        StatusCode::NOT_FOUND
    })?;
    Ok(Json(Envelope {
        version: state.version.clone(),
        data: value,
    }))
}

/// Build the full application router.
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    Router::new()
        .route("/buckets", get(list_buckets))
        .route("/parameters", get(list_parameters))
        .route("/parameters/:name", get(get_parameter))
        .route("/livez", get(livez))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

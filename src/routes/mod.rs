//! Router assembly.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: common routes at the root, content API under `/api`, with request tracing,
/// a request body size cap and permissive CORS.
///
/// The body limit wraps CORS: `Cors` needs a `Default` response body, which the limit's wrapped
/// body is not.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.body_limit))
                .layer(CorsLayer::permissive()),
        )
}

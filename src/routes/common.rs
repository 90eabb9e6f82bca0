//! Operational routes outside `/api`: liveness against the store, build version and site info.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::i18n::Language;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

/// 200 while the store answers reads; 503 once it fails (e.g. a poisoned table).
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthBody>) {
    match state.storage.get_all_statistics().await {
        Ok(_) => (StatusCode::OK, Json(HealthBody { status: "ok" })),
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthBody { status: "unavailable" }),
            )
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

const VERSION: VersionBody = VersionBody {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

async fn version() -> Json<VersionBody> {
    Json(VERSION)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InfoBody {
    #[serde(flatten)]
    build: VersionBody,
    languages: [Language; 2],
    default_language: Language,
}

async fn info() -> Json<InfoBody> {
    Json(InfoBody {
        build: VERSION,
        languages: [Language::En, Language::Ar],
        default_language: Language::default(),
    })
}

/// GET /health, GET /version, GET /info.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/info", get(info))
        .with_state(state)
}

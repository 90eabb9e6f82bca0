//! `/api/statistics` handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::parse_id;
use crate::error::AppError;
use crate::extractors::{JsonBody, PatchBody};
use crate::model::{InsertStatistic, Statistic, StatisticPatch};
use crate::response::{self, ErrorBody};
use crate::state::AppState;

const LABEL: &str = "Statistic";

/// Returned in storage order; clients sort by `order`.
#[utoipa::path(
    get,
    path = "/api/statistics",
    tag = "statistics",
    responses(
        (status = 200, body = [Statistic]),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = state
        .storage
        .get_all_statistics()
        .await
        .map_err(AppError::internal("fetching statistics"))?;
    Ok(response::many(items))
}

#[utoipa::path(
    get,
    path = "/api/statistics/{id}",
    tag = "statistics",
    params(("id" = String, Path)),
    responses(
        (status = 200, body = Statistic),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, LABEL)?;
    let item = state
        .storage
        .get_statistic_by_id(id)
        .await
        .map_err(AppError::internal("fetching statistic"))?
        .ok_or(AppError::NotFound(LABEL))?;
    Ok(response::ok(item))
}

#[utoipa::path(
    post,
    path = "/api/statistics",
    tag = "statistics",
    request_body = InsertStatistic,
    responses(
        (status = 201, body = Statistic),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<InsertStatistic>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .storage
        .create_statistic(body)
        .await
        .map_err(AppError::internal("creating statistic"))?;
    tracing::info!(id = item.id, "statistic created");
    Ok(response::created(item))
}

#[utoipa::path(
    put,
    path = "/api/statistics/{id}",
    tag = "statistics",
    params(("id" = String, Path)),
    request_body(content = InsertStatistic, description = "Any subset of the statistic fields"),
    responses(
        (status = 200, body = Statistic),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    PatchBody(patch): PatchBody<StatisticPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, LABEL)?;
    let item = state
        .storage
        .update_statistic(id, patch)
        .await
        .map_err(AppError::internal("updating statistic"))?
        .ok_or(AppError::NotFound(LABEL))?;
    Ok(response::ok(item))
}

#[utoipa::path(
    delete,
    path = "/api/statistics/{id}",
    tag = "statistics",
    params(("id" = String, Path)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, LABEL)?;
    let removed = state
        .storage
        .delete_statistic(id)
        .await
        .map_err(AppError::internal("deleting statistic"))?;
    if !removed {
        return Err(AppError::NotFound(LABEL));
    }
    Ok(StatusCode::NO_CONTENT)
}

//! `/api/directories` handlers. Directories filter by region rather than category.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::parse_id;
use crate::error::AppError;
use crate::extractors::{JsonBody, PatchBody};
use crate::model::{Directory, DirectoryPatch, InsertDirectory};
use crate::response::{self, ErrorBody};
use crate::state::AppState;

const LABEL: &str = "Directory";

#[utoipa::path(
    get,
    path = "/api/directories",
    tag = "directories",
    responses(
        (status = 200, body = [Directory]),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = state
        .storage
        .get_all_directories()
        .await
        .map_err(AppError::internal("fetching directories"))?;
    Ok(response::many(items))
}

#[utoipa::path(
    get,
    path = "/api/directories/region/{region}",
    tag = "directories",
    params(("region" = String, Path, description = "Exact region name, e.g. Central")),
    responses(
        (status = 200, body = [Directory]),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn by_region(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let items = state
        .storage
        .get_directories_by_region(&region)
        .await
        .map_err(AppError::internal("fetching directories by region"))?;
    Ok(response::many(items))
}

#[utoipa::path(
    get,
    path = "/api/directories/{id}",
    tag = "directories",
    params(("id" = String, Path)),
    responses(
        (status = 200, body = Directory),
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
        .get_directory_by_id(id)
        .await
        .map_err(AppError::internal("fetching directory"))?
        .ok_or(AppError::NotFound(LABEL))?;
    Ok(response::ok(item))
}

#[utoipa::path(
    post,
    path = "/api/directories",
    tag = "directories",
    request_body = InsertDirectory,
    responses(
        (status = 201, body = Directory),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<InsertDirectory>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .storage
        .create_directory(body)
        .await
        .map_err(AppError::internal("creating directory"))?;
    tracing::info!(id = item.id, region = %item.region, "directory created");
    Ok(response::created(item))
}

#[utoipa::path(
    put,
    path = "/api/directories/{id}",
    tag = "directories",
    params(("id" = String, Path)),
    request_body(content = InsertDirectory, description = "Any subset of the directory fields"),
    responses(
        (status = 200, body = Directory),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    PatchBody(patch): PatchBody<DirectoryPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, LABEL)?;
    let item = state
        .storage
        .update_directory(id, patch)
        .await
        .map_err(AppError::internal("updating directory"))?
        .ok_or(AppError::NotFound(LABEL))?;
    Ok(response::ok(item))
}

#[utoipa::path(
    delete,
    path = "/api/directories/{id}",
    tag = "directories",
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
        .delete_directory(id)
        .await
        .map_err(AppError::internal("deleting directory"))?;
    if !removed {
        return Err(AppError::NotFound(LABEL));
    }
    Ok(StatusCode::NO_CONTENT)
}

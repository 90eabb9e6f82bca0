//! `/api/resources` handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::parse_id;
use crate::error::AppError;
use crate::extractors::{JsonBody, PatchBody};
use crate::model::{InsertResource, Resource, ResourcePatch};
use crate::response::{self, ErrorBody};
use crate::state::AppState;

const LABEL: &str = "Resource";

#[utoipa::path(
    get,
    path = "/api/resources",
    tag = "resources",
    responses(
        (status = 200, body = [Resource]),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = state
        .storage
        .get_all_resources()
        .await
        .map_err(AppError::internal("fetching resources"))?;
    Ok(response::many(items))
}

/// Exact, case-sensitive category match. No match is an empty array, not a 404.
#[utoipa::path(
    get,
    path = "/api/resources/category/{category}",
    tag = "resources",
    params(("category" = String, Path)),
    responses(
        (status = 200, body = [Resource]),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let items = state
        .storage
        .get_resources_by_category(&category)
        .await
        .map_err(AppError::internal("fetching resources by category"))?;
    Ok(response::many(items))
}

#[utoipa::path(
    get,
    path = "/api/resources/{id}",
    tag = "resources",
    params(("id" = String, Path)),
    responses(
        (status = 200, body = Resource),
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
        .get_resource_by_id(id)
        .await
        .map_err(AppError::internal("fetching resource"))?
        .ok_or(AppError::NotFound(LABEL))?;
    Ok(response::ok(item))
}

#[utoipa::path(
    post,
    path = "/api/resources",
    tag = "resources",
    request_body = InsertResource,
    responses(
        (status = 201, body = Resource),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<InsertResource>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .storage
        .create_resource(body)
        .await
        .map_err(AppError::internal("creating resource"))?;
    tracing::info!(id = item.id, "resource created");
    Ok(response::created(item))
}

#[utoipa::path(
    put,
    path = "/api/resources/{id}",
    tag = "resources",
    params(("id" = String, Path)),
    request_body(content = InsertResource, description = "Any subset of the resource fields"),
    responses(
        (status = 200, body = Resource),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    PatchBody(patch): PatchBody<ResourcePatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, LABEL)?;
    let item = state
        .storage
        .update_resource(id, patch)
        .await
        .map_err(AppError::internal("updating resource"))?
        .ok_or(AppError::NotFound(LABEL))?;
    Ok(response::ok(item))
}

#[utoipa::path(
    delete,
    path = "/api/resources/{id}",
    tag = "resources",
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
    if !state
        .storage
        .delete_resource(id)
        .await
        .map_err(AppError::internal("deleting resource"))?
    {
        return Err(AppError::NotFound(LABEL));
    }
    Ok(StatusCode::NO_CONTENT)
}

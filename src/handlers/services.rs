use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::parse_id;
use crate::error::AppError;
use crate::extractors::{JsonBody, PatchBody};
use crate::model::{InsertService, Service, ServicePatch};
use crate::response::{self, ErrorBody};
use crate::state::AppState;

const LABEL: &str = "Service";

#[utoipa::path(
    get,
    path = "/api/services",
    tag = "services",
    responses(
        (status = 200, body = [Service]),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = state
        .storage
        .get_all_services()
        .await
        .map_err(AppError::internal("fetching services"))?;
    Ok(response::many(items))
}

#[utoipa::path(
    get,
    path = "/api/services/category/{category}",
    tag = "services",
    params(("category" = String, Path)),
    responses(
        (status = 200, body = [Service]),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let items = state
        .storage
        .get_services_by_category(&category)
        .await
        .map_err(AppError::internal("fetching services by category"))?;
    Ok(response::many(items))
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = "services",
    params(("id" = String, Path)),
    responses(
        (status = 200, body = Service),
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
        .get_service_by_id(id)
        .await
        .map_err(AppError::internal("fetching service"))?
        .ok_or(AppError::NotFound(LABEL))?;
    Ok(response::ok(item))
}

#[utoipa::path(
    post,
    path = "/api/services",
    tag = "services",
    request_body = InsertService,
    responses(
        (status = 201, body = Service),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<InsertService>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .storage
        .create_service(body)
        .await
        .map_err(AppError::internal("creating service"))?;
    tracing::info!(id = item.id, "service created");
    Ok(response::created(item))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = "services",
    params(("id" = String, Path)),
    request_body(content = InsertService, description = "Any subset of the service fields"),
    responses(
        (status = 200, body = Service),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    PatchBody(patch): PatchBody<ServicePatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, LABEL)?;
    let item = state
        .storage
        .update_service(id, patch)
        .await
        .map_err(AppError::internal("updating service"))?
        .ok_or(AppError::NotFound(LABEL))?;
    Ok(response::ok(item))
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "services",
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
        .delete_service(id)
        .await
        .map_err(AppError::internal("deleting service"))?;
    if !removed {
        return Err(AppError::NotFound(LABEL));
    }
    Ok(StatusCode::NO_CONTENT)
}

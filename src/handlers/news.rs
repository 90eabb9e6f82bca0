//! `/api/news` handlers. News has no category route; the front end filters client-side.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::parse_id;
use crate::error::AppError;
use crate::extractors::{JsonBody, PatchBody};
use crate::model::{InsertNews, News, NewsPatch};
use crate::response::{self, ErrorBody};
use crate::state::AppState;

const LABEL: &str = "News item";

#[utoipa::path(
    get,
    path = "/api/news",
    tag = "news",
    responses(
        (status = 200, description = "All news items", body = [News]),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = state
        .storage
        .get_all_news()
        .await
        .map_err(AppError::internal("fetching news"))?;
    Ok(response::many(items))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = "news",
    params(("id" = String, Path, description = "News item id")),
    responses(
        (status = 200, body = News),
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
        .get_news_by_id(id)
        .await
        .map_err(AppError::internal("fetching news item"))?
        .ok_or(AppError::NotFound(LABEL))?;
    Ok(response::ok(item))
}

#[utoipa::path(
    post,
    path = "/api/news",
    tag = "news",
    request_body = InsertNews,
    responses(
        (status = 201, body = News),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<InsertNews>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .storage
        .create_news(body)
        .await
        .map_err(AppError::internal("creating news item"))?;
    tracing::info!(id = item.id, "news item created");
    Ok(response::created(item))
}

#[utoipa::path(
    put,
    path = "/api/news/{id}",
    tag = "news",
    params(("id" = String, Path, description = "News item id")),
    request_body(content = InsertNews, description = "Any subset of the news fields"),
    responses(
        (status = 200, body = News),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    PatchBody(patch): PatchBody<NewsPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, LABEL)?;
    let item = state
        .storage
        .update_news(id, patch)
        .await
        .map_err(AppError::internal("updating news item"))?
        .ok_or(AppError::NotFound(LABEL))?;
    Ok(response::ok(item))
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    tag = "news",
    params(("id" = String, Path, description = "News item id")),
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
        .delete_news(id)
        .await
        .map_err(AppError::internal("deleting news item"))?;
    if !removed {
        return Err(AppError::NotFound(LABEL));
    }
    Ok(StatusCode::NO_CONTENT)
}

//! Generated OpenAPI document for the content API.

use axum::Json;
use utoipa::OpenApi;

use crate::handlers::{directories, news, resources, services, statistics};
use crate::model::{
    Directory, InsertDirectory, InsertNews, InsertResource, InsertService, InsertStatistic, News,
    Resource, Service, Statistic,
};
use crate::response::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    info(title = "Ministry Portal Content API"),
    paths(
        news::list,
        news::read,
        news::create,
        news::update,
        news::delete,
        resources::list,
        resources::by_category,
        resources::read,
        resources::create,
        resources::update,
        resources::delete,
        services::list,
        services::by_category,
        services::read,
        services::create,
        services::update,
        services::delete,
        directories::list,
        directories::by_region,
        directories::read,
        directories::create,
        directories::update,
        directories::delete,
        statistics::list,
        statistics::read,
        statistics::create,
        statistics::update,
        statistics::delete,
    ),
    components(schemas(
        News,
        InsertNews,
        Resource,
        InsertResource,
        Service,
        InsertService,
        Directory,
        InsertDirectory,
        Statistic,
        InsertStatistic,
        ErrorBody,
    )),
    tags(
        (name = "news"),
        (name = "resources"),
        (name = "services"),
        (name = "directories"),
        (name = "statistics"),
    )
)]
pub struct ApiDoc;

/// GET /api/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_resource_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/news",
            "/api/news/{id}",
            "/api/resources/category/{category}",
            "/api/services/category/{category}",
            "/api/directories/region/{region}",
            "/api/statistics/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}

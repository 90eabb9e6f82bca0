//! Content API routes, mounted under `/api` by [`super::build_router`].
//! Filter routes are registered beside `/:id`; the router prefers the static `category`/`region`
//! segment, and a bare `/resources/category` falls through to `/:id` and 404s like any other
//! non-numeric id.

use crate::handlers::{directories, news, resources, services, statistics};
use crate::openapi::openapi_json;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/news", get(news::list).post(news::create))
        .route(
            "/news/:id",
            get(news::read).put(news::update).delete(news::delete),
        )
        .route("/resources", get(resources::list).post(resources::create))
        .route("/resources/category/:category", get(resources::by_category))
        .route(
            "/resources/:id",
            get(resources::read)
                .put(resources::update)
                .delete(resources::delete),
        )
        .route("/services", get(services::list).post(services::create))
        .route("/services/category/:category", get(services::by_category))
        .route(
            "/services/:id",
            get(services::read)
                .put(services::update)
                .delete(services::delete),
        )
        .route("/directories", get(directories::list).post(directories::create))
        .route("/directories/region/:region", get(directories::by_region))
        .route(
            "/directories/:id",
            get(directories::read)
                .put(directories::update)
                .delete(directories::delete),
        )
        .route("/statistics", get(statistics::list).post(statistics::create))
        .route(
            "/statistics/:id",
            get(statistics::read)
                .put(statistics::update)
                .delete(statistics::delete),
        )
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
}

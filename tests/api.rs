//! End-to-end tests against the assembled router, driven in-process with `oneshot`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use ministry_portal::model::*;
use ministry_portal::store::StorageResult;
use ministry_portal::{build_router, AppState, MemStorage, ServerConfig, Storage, StorageError};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(AppState::seeded(), &ServerConfig::default())
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn call(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let body = match body {
        Some(v) => Body::from(serde_json::to_string(&v).unwrap()),
        None => Body::empty(),
    };
    send(router, builder.body(body).unwrap()).await
}

fn news_payload() -> Value {
    json!({
        "titleEn": "Olive harvest begins",
        "titleAr": "بدء موسم قطف الزيتون",
        "contentEn": "Farmers across the West Bank begin the olive harvest.",
        "contentAr": "يبدأ المزارعون في الضفة الغربية موسم قطف الزيتون.",
        "imageUrl": "https://example.org/olives.jpg",
        "category": "Announcement",
        "publishDate": "2025-10-20T08:30:00Z",
        "isPublished": true
    })
}

// ── Common ──

#[tokio::test]
async fn health_and_version() {
    let r = app();
    let (s, body) = call(&r, "GET", "/health", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (s, body) = call(&r, "GET", "/version", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(body["name"], "ministry-portal");

    let (s, body) = call(&r, "GET", "/info", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(body["name"], "ministry-portal");
    assert_eq!(body["languages"], json!(["en", "ar"]));
    assert_eq!(body["defaultLanguage"], "en");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let config = ServerConfig {
        body_limit: 64,
        ..ServerConfig::default()
    };
    let r = build_router(AppState::seeded(), &config);
    let raw = serde_json::to_string(&news_payload()).unwrap();
    let req = Request::builder()
        .method("POST")
        .uri("/api/news")
        .header("content-type", "application/json")
        .header("content-length", raw.len())
        .body(Body::from(raw))
        .unwrap();
    let (s, _) = send(&r, req).await;
    assert_eq!(s, StatusCode::PAYLOAD_TOO_LARGE);

    let (_, all) = call(&r, "GET", "/api/news", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let r = app();
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/news")
        .header("origin", "https://portal.example")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let resp = r.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("access-control-allow-origin"));
}

// ── Statistics ──

#[tokio::test]
async fn seeded_statistics() {
    let r = app();
    let (s, body) = call(&r, "GET", "/api/statistics", None).await;
    assert_eq!(s, StatusCode::OK);
    let stats = body.as_array().unwrap();
    assert_eq!(stats.len(), 4);
    let orders: Vec<i64> = stats.iter().map(|v| v["order"].as_i64().unwrap()).collect();
    assert_eq!(orders, vec![1, 2, 3, 4]);
    let values: Vec<&str> = stats.iter().map(|v| v["value"].as_str().unwrap()).collect();
    assert_eq!(values, vec!["63%", "110,000", "$450M", "12%"]);
}

#[tokio::test]
async fn statistic_crud_cycle() {
    let r = app();
    let (s, created) = call(
        &r,
        "POST",
        "/api/statistics",
        Some(json!({ "labelEn": "hectares irrigated", "labelAr": "هكتار مروي", "value": "24,000", "order": 5 })),
    )
    .await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(created["id"], 5);
    assert_eq!(created["isPublished"], true);

    let (s, updated) = call(&r, "PUT", "/api/statistics/5", Some(json!({ "order": 0 }))).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(updated["order"], 0);
    assert_eq!(updated["value"], "24,000");

    let (s, body) = call(&r, "DELETE", "/api/statistics/5", None).await;
    assert_eq!(s, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (s, body) = call(&r, "GET", "/api/statistics/5", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Statistic not found" }));

    let (_, again) = call(
        &r,
        "POST",
        "/api/statistics",
        Some(json!({ "labelEn": "x", "labelAr": "س", "value": "1", "order": 6 })),
    )
    .await;
    assert_eq!(again["id"], 6);
}

// ── News ──

#[tokio::test]
async fn news_round_trip() {
    let r = app();
    let (s, created) = call(&r, "POST", "/api/news", Some(news_payload())).await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(created["id"], 4);

    let (s, fetched) = call(&r, "GET", "/api/news/4", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(fetched, created);

    let mut expected = news_payload();
    expected["id"] = json!(4);
    expected["publishDate"] = json!("2025-10-20T08:30:00.000Z");
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let r = app();
    let (s, body) = call(&r, "GET", "/api/news/abc", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "News item not found" }));

    let (s, _) = call(&r, "DELETE", "/api/news/1.0", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn news_patch_null_clears_image() {
    let r = app();
    let (s, body) = call(&r, "PUT", "/api/news/1", Some(json!({ "imageUrl": null }))).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(body["imageUrl"], Value::Null);
    assert_eq!(body["titleEn"], "Ministry Launches New Olive Support Program");
    assert_eq!(body["publishDate"], "2025-11-02T00:00:00.000Z");
}

#[tokio::test]
async fn news_has_no_category_route() {
    let r = app();
    let (s, _) = call(&r, "GET", "/api/news/category/Event", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_required_field_is_bad_request() {
    let r = app();
    let mut payload = news_payload();
    payload.as_object_mut().unwrap().remove("titleAr");
    let (s, body) = call(&r, "POST", "/api/news", Some(payload)).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));

    let (_, all) = call(&r, "GET", "/api/news", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn bodiless_update_leaves_record_unchanged() {
    let r = app();
    let (_, before) = call(&r, "GET", "/api/statistics/1", None).await;

    let (s, after) = call(&r, "PUT", "/api/statistics/1", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(after, before);

    let req = Request::builder()
        .method("PUT")
        .uri("/api/statistics/1")
        .header("content-type", "text/plain")
        .body(Body::from("order=9"))
        .unwrap();
    let (s, after) = send(&r, req).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(after, before);

    let req = Request::builder()
        .method("PUT")
        .uri("/api/statistics/1")
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();
    let (s, after) = send(&r, req).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(after, before);
}

#[tokio::test]
async fn bodiless_update_of_unknown_id_is_not_found() {
    let r = app();
    let (s, body) = call(&r, "PUT", "/api/news/42", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "News item not found" }));
}

#[tokio::test]
async fn wrong_typed_patch_is_bad_request() {
    let r = app();
    let (s, _) = call(&r, "PUT", "/api/statistics/1", Some(json!({ "order": "first" }))).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
}

// ── Resources ──

#[tokio::test]
async fn resource_partial_update_keeps_other_fields() {
    let r = app();
    let (_, before) = call(&r, "GET", "/api/resources/1", None).await;
    assert_eq!(before["titleEn"], "Olive Cultivation Guide");

    let (s, after) = call(&r, "PUT", "/api/resources/1", Some(json!({ "fileSize": "5 MB" }))).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(after["fileSize"], "5 MB");

    let mut expected = before.clone();
    expected["fileSize"] = json!("5 MB");
    assert_eq!(after, expected);
}

#[tokio::test]
async fn resource_category_filter() {
    let r = app();
    let (s, body) = call(&r, "GET", "/api/resources/category/Farming%20Guides", None).await;
    assert_eq!(s, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["titleEn"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Olive Cultivation Guide", "Crop Calendar & Planning Tools"]);

    let (s, body) = call(&r, "GET", "/api/resources/category/Nonexistent", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn resource_round_trip() {
    let r = app();
    let payload = json!({
        "titleEn": "Date Palm Irrigation Handbook",
        "titleAr": "دليل ري النخيل",
        "descriptionEn": "Drip schedules for date palms in the Jordan Valley.",
        "descriptionAr": "جداول الري بالتنقيط للنخيل في الأغوار.",
        "category": "Water Management",
        "fileType": "PDF",
        "fileUrl": "/resources/date-palm-irrigation.pdf",
        "fileSize": "2.4 MB",
        "isPublished": true
    });
    let (s, created) = call(&r, "POST", "/api/resources", Some(payload.clone())).await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(created["id"], 7);

    let (s, fetched) = call(&r, "GET", "/api/resources/7", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(fetched, created);

    let mut expected = payload;
    expected["id"] = json!(7);
    assert_eq!(fetched, expected);
}

// ── Services ──

#[tokio::test]
async fn delete_unknown_service() {
    let r = app();
    let (s, body) = call(&r, "DELETE", "/api/services/9999", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Service not found" }));
}

#[tokio::test]
async fn service_category_filter_decodes_path() {
    let r = app();
    let (s, body) = call(
        &r,
        "GET",
        "/api/services/category/Fisheries%20%26%20Aquaculture",
        None,
    )
    .await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unpublished_services_are_listed() {
    let r = app();
    let (s, created) = call(
        &r,
        "POST",
        "/api/services",
        Some(json!({
            "titleEn": "Draft service",
            "titleAr": "خدمة مسودة",
            "descriptionEn": "Not yet live.",
            "descriptionAr": "غير متاحة بعد.",
            "category": "Marketing & Support",
            "isPublished": false
        })),
    )
    .await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(created["id"], 12);
    assert_eq!(created["icon"], Value::Null);

    let (_, all) = call(&r, "GET", "/api/services", None).await;
    assert_eq!(all.as_array().unwrap().len(), 12);
    assert!(all.as_array().unwrap().iter().any(|s| s["isPublished"] == false));
}

// ── Directories ──

#[tokio::test]
async fn directories_by_region() {
    let r = app();
    let (s, body) = call(&r, "GET", "/api/directories/region/Central", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);

    let (_, body) = call(&r, "GET", "/api/directories/region/central", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn directory_shape() {
    let r = app();
    let (s, body) = call(&r, "GET", "/api/directories/2", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(body["servicesEn"][0], "Agricultural planning");
    assert_eq!(body["servicesAr"][0], "التخطيط الزراعي");
    assert_eq!(body["email"], "dev@moa.gov.ps");
}

#[tokio::test]
async fn directory_round_trip_keeps_parallel_service_lists() {
    let r = app();
    let payload = json!({
        "nameEn": "Jenin Agricultural Directorate",
        "nameAr": "مديرية زراعة جنين",
        "region": "North",
        "addressEn": "Main Street, Jenin",
        "addressAr": "الشارع الرئيسي، جنين",
        "phone": "+970 4 250 1234",
        "email": "jenin@moa.gov.ps",
        "hoursEn": "Sun-Thu 8:00-15:00",
        "hoursAr": "الأحد-الخميس 8:00-15:00",
        "servicesEn": ["Extension visits", "Seedling distribution"],
        "servicesAr": ["زيارات إرشادية", "توزيع الأشتال"],
        "isPublished": true
    });
    let (s, created) = call(&r, "POST", "/api/directories", Some(payload.clone())).await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(created["id"], 5);

    let (s, fetched) = call(&r, "GET", "/api/directories/5", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(fetched, created);

    let mut expected = payload;
    expected["id"] = json!(5);
    assert_eq!(fetched, expected);

    let (_, north) = call(&r, "GET", "/api/directories/region/North", None).await;
    assert_eq!(north.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_unknown_directory() {
    let r = app();
    let (s, body) = call(&r, "PUT", "/api/directories/77", Some(json!({ "region": "North" }))).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Directory not found" }));
}

// ── OpenAPI ──

#[tokio::test]
async fn serves_openapi_document() {
    let r = app();
    let (s, body) = call(&r, "GET", "/api/openapi.json", None).await;
    assert_eq!(s, StatusCode::OK);
    assert!(body["paths"]["/api/services/{id}"].is_object());
}

// ── Storage failures ──

struct BrokenStorage;

fn broken<T>() -> StorageResult<T> {
    Err(StorageError::Poisoned("test"))
}

#[async_trait]
impl Storage for BrokenStorage {
    async fn get_user(&self, _: Id) -> StorageResult<Option<User>> { broken() }
    async fn get_user_by_username(&self, _: &str) -> StorageResult<Option<User>> { broken() }
    async fn create_user(&self, _: InsertUser) -> StorageResult<User> { broken() }
    async fn get_all_news(&self) -> StorageResult<Vec<News>> { broken() }
    async fn get_news_by_id(&self, _: Id) -> StorageResult<Option<News>> { broken() }
    async fn create_news(&self, _: InsertNews) -> StorageResult<News> { broken() }
    async fn update_news(&self, _: Id, _: NewsPatch) -> StorageResult<Option<News>> { broken() }
    async fn delete_news(&self, _: Id) -> StorageResult<bool> { broken() }
    async fn get_all_resources(&self) -> StorageResult<Vec<Resource>> { broken() }
    async fn get_resources_by_category(&self, _: &str) -> StorageResult<Vec<Resource>> { broken() }
    async fn get_resource_by_id(&self, _: Id) -> StorageResult<Option<Resource>> { broken() }
    async fn create_resource(&self, _: InsertResource) -> StorageResult<Resource> { broken() }
    async fn update_resource(&self, _: Id, _: ResourcePatch) -> StorageResult<Option<Resource>> { broken() }
    async fn delete_resource(&self, _: Id) -> StorageResult<bool> { broken() }
    async fn get_all_services(&self) -> StorageResult<Vec<Service>> { broken() }
    async fn get_services_by_category(&self, _: &str) -> StorageResult<Vec<Service>> { broken() }
    async fn get_service_by_id(&self, _: Id) -> StorageResult<Option<Service>> { broken() }
    async fn create_service(&self, _: InsertService) -> StorageResult<Service> { broken() }
    async fn update_service(&self, _: Id, _: ServicePatch) -> StorageResult<Option<Service>> { broken() }
    async fn delete_service(&self, _: Id) -> StorageResult<bool> { broken() }
    async fn get_all_directories(&self) -> StorageResult<Vec<Directory>> { broken() }
    async fn get_directories_by_region(&self, _: &str) -> StorageResult<Vec<Directory>> { broken() }
    async fn get_directory_by_id(&self, _: Id) -> StorageResult<Option<Directory>> { broken() }
    async fn create_directory(&self, _: InsertDirectory) -> StorageResult<Directory> { broken() }
    async fn update_directory(&self, _: Id, _: DirectoryPatch) -> StorageResult<Option<Directory>> { broken() }
    async fn delete_directory(&self, _: Id) -> StorageResult<bool> { broken() }
    async fn get_all_statistics(&self) -> StorageResult<Vec<Statistic>> { broken() }
    async fn get_statistic_by_id(&self, _: Id) -> StorageResult<Option<Statistic>> { broken() }
    async fn create_statistic(&self, _: InsertStatistic) -> StorageResult<Statistic> { broken() }
    async fn update_statistic(&self, _: Id, _: StatisticPatch) -> StorageResult<Option<Statistic>> { broken() }
    async fn delete_statistic(&self, _: Id) -> StorageResult<bool> { broken() }
}

#[tokio::test]
async fn storage_failures_become_500() {
    let r = build_router(AppState::new(Arc::new(BrokenStorage)), &ServerConfig::default());

    let (s, body) = call(&r, "GET", "/health", None).await;
    assert_eq!(s, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");

    let (s, body) = call(&r, "GET", "/api/news", None).await;
    assert_eq!(s, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Error fetching news" }));

    let (s, body) = call(&r, "GET", "/api/services/category/Any", None).await;
    assert_eq!(s, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Error fetching services by category" }));

    let (s, body) = call(&r, "DELETE", "/api/statistics/1", None).await;
    assert_eq!(s, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Error deleting statistic" }));

    let (s, body) = call(&r, "POST", "/api/news", Some(news_payload())).await;
    assert_eq!(s, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Error creating news item" }));
}

#[tokio::test]
async fn empty_store_starts_ids_at_one() {
    let r = build_router(AppState::new(Arc::new(MemStorage::empty())), &ServerConfig::default());
    let (_, all) = call(&r, "GET", "/api/news", None).await;
    assert_eq!(all, json!([]));
    let (s, created) = call(&r, "POST", "/api/news", Some(news_payload())).await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
}

pub mod handlers;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::SharedState;
use crate::static_files;

/// All dashboard routes, without middleware
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(pages::index_handler))
        .route("/api/products", get(handlers::products_handler))
        .route("/api/stats", get(handlers::stats_handler))
        .route("/api/categories", get(handlers::categories_handler))
        .route("/export/csv", get(handlers::export_handler))
        .route("/static/*path", get(static_files::serve_static))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::path::Path;
    use tower::ServiceExt;

    const SAMPLE: &str = r#"[
        {"name": "A", "price": "KSh 1,200", "category": "Toys", "scraped_at": "2024-05-01 10:00:00"},
        {"name": "B", "price": "KSh 50", "category": "Toys", "availability": null},
        {"name": "C", "price": "bad", "category": "Games", "sku": "c-3"}
    ]"#;

    async fn get_raw(catalog: &Path, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let app = router(AppState::new(catalog));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, body.to_vec())
    }

    async fn get_json(catalog: &Path, uri: &str) -> Value {
        let (status, content_type, body) = get_raw(catalog, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        serde_json::from_slice(&body).unwrap()
    }

    fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    fn sample_catalog() -> tempfile::NamedTempFile {
        catalog_file(SAMPLE)
    }

    #[tokio::test]
    async fn products_are_returned_verbatim() {
        let file = sample_catalog();
        let body = get_json(file.path(), "/api/products").await;
        let expected: Value = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn stats_for_sample() {
        let file = sample_catalog();
        let body = get_json(file.path(), "/api/stats").await;
        assert_eq!(
            body,
            json!({
                "total_products": 3,
                "categories": 2,
                "price_range": "KSh 50 - KSh 1,200",
                "last_updated": "2024-05-01 10:00:00"
            })
        );
    }

    #[tokio::test]
    async fn categories_keep_first_seen_order() {
        let file = sample_catalog();
        let (_, _, body) = get_raw(file.path(), "/api/categories").await;
        assert_eq!(String::from_utf8(body).unwrap(), r#"{"Toys":2,"Games":1}"#);
    }

    #[tokio::test]
    async fn export_projects_six_columns() {
        let file = sample_catalog();
        let body = get_json(file.path(), "/export/csv").await;
        let rows = body.as_array().unwrap();

        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.as_object().unwrap().len(), 6);
        }
        assert_eq!(
            rows[1],
            json!({
                "Name": "B",
                "Price": "KSh 50",
                "Category": "Toys",
                "Availability": null,
                "Image URL": "",
                "Scraped At": ""
            })
        );
    }

    #[tokio::test]
    async fn off_type_price_keeps_the_rest_of_the_catalog() {
        let raw = r#"[
            {"name": "A", "price": "KSh 1,200", "category": "Toys"},
            {"name": "B", "price": 1500, "category": "Toys"},
            {"name": "C", "price": null, "category": "Games"}
        ]"#;
        let file = catalog_file(raw);

        let products = get_json(file.path(), "/api/products").await;
        assert_eq!(products, serde_json::from_str::<Value>(raw).unwrap());

        assert_eq!(
            get_json(file.path(), "/api/stats").await,
            json!({
                "total_products": 3,
                "categories": 2,
                "price_range": "KSh 1,200 - KSh 1,200",
                "last_updated": "N/A"
            })
        );
        assert_eq!(
            get_json(file.path(), "/api/categories").await,
            json!({"Toys": 2, "Games": 1})
        );

        let rows = get_json(file.path(), "/export/csv").await;
        assert_eq!(rows[1]["Price"], json!(1500));
        assert_eq!(rows[2]["Price"], Value::Null);

        let (status, _, body) = get_raw(file.path(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("<td>B</td>"));
    }

    #[tokio::test]
    async fn missing_catalog_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("romantix_products.json");

        assert_eq!(get_json(&missing, "/api/products").await, json!([]));
        assert_eq!(get_json(&missing, "/api/categories").await, json!({}));
        assert_eq!(get_json(&missing, "/export/csv").await, json!([]));
        assert_eq!(
            get_json(&missing, "/api/stats").await,
            json!({
                "total_products": 0,
                "categories": 0,
                "price_range": "N/A",
                "last_updated": "N/A"
            })
        );
    }

    #[tokio::test]
    async fn malformed_catalog_degrades_to_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[{\"name\": ").unwrap();

        assert_eq!(get_json(file.path(), "/api/products").await, json!([]));
        assert_eq!(get_json(file.path(), "/api/stats").await["total_products"], 0);
    }

    #[tokio::test]
    async fn index_renders_html() {
        let file = sample_catalog();
        let (status, content_type, body) = get_raw(file.path(), "/").await;
        let html = String::from_utf8(body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
        assert!(html.contains("KSh 50 - KSh 1,200"));
        assert!(html.contains("<td>C</td>"));
        assert!(html.contains("Games (1)"));
        assert!(!html.contains("{{"));
    }

    #[tokio::test]
    async fn serves_stylesheet() {
        let file = sample_catalog();
        let (status, content_type, body) = get_raw(file.path(), "/static/dashboard.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/css; charset=utf-8"));
        assert!(!body.is_empty());

        let (status, _, _) = get_raw(file.path(), "/static/nope.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

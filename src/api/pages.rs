//! HTML dashboard

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::core::catalog::{self, Product};
use crate::core::categories::{self, CategoryCounts};
use crate::core::stats::{self, Statistics};
use crate::state::SharedState;

/// One table row; absent fields show as blank, category as "Unknown"
pub struct ProductRow {
    pub name: String,
    pub price: String,
    pub category: String,
    pub availability: String,
    pub image_url: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        let text = |field: Option<&str>| field.unwrap_or_default().to_string();
        Self {
            name: text(p.name()),
            price: text(p.price()),
            category: p.category_or_unknown().to_string(),
            availability: text(p.availability()),
            image_url: text(p.image_url()),
        }
    }
}

/// Renders `templates/dashboard.html`: stat cards, category breakdown and
/// the product table.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub products: Vec<ProductRow>,
    pub stats: Statistics,
    pub categories: CategoryCounts,
}

impl DashboardTemplate {
    pub fn new(products: &[Product]) -> Self {
        Self {
            products: products.iter().map(ProductRow::from).collect(),
            stats: stats::compute(products),
            categories: categories::count(products),
        }
    }
}

/// GET /
pub async fn index_handler(State(state): State<SharedState>) -> Response {
    let products = catalog::load_async(state.catalog_path.clone()).await;

    match DashboardTemplate::new(&products).render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render dashboard: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Render error").into_response()
        }
    }
}

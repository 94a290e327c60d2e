//! JSON API handlers
//!
//! Every route answers 200: an unreadable catalog looks the same as an
//! empty one.

use axum::{extract::State, response::Json};

use crate::core::catalog::{self, Product};
use crate::core::categories::{self, CategoryCounts};
use crate::core::export::{self, ExportRow};
use crate::core::stats::{self, Statistics};
use crate::state::SharedState;

async fn products(state: &SharedState) -> Vec<Product> {
    catalog::load_async(state.catalog_path.clone()).await
}

/// GET /api/products - Catalog as stored
pub async fn products_handler(State(state): State<SharedState>) -> Json<Vec<Product>> {
    Json(products(&state).await)
}

/// GET /api/stats
pub async fn stats_handler(State(state): State<SharedState>) -> Json<Statistics> {
    Json(stats::compute(&products(&state).await))
}

/// GET /api/categories - Category counts in first-seen order
pub async fn categories_handler(State(state): State<SharedState>) -> Json<CategoryCounts> {
    Json(categories::count(&products(&state).await))
}

/// GET /export/csv
///
/// Despite the path, the body is a JSON array of flat rows, not CSV text.
pub async fn export_handler(State(state): State<SharedState>) -> Json<Vec<ExportRow>> {
    Json(export::rows(&products(&state).await))
}

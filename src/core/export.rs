//! Flat six-column projection served by /export/csv

use serde::Serialize;
use serde_json::Value;

use super::catalog::Product;

/// Each column carries the record's stored value as-is, or `""` when the
/// record has no such key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Name")]
    pub name: Value,
    #[serde(rename = "Price")]
    pub price: Value,
    #[serde(rename = "Category")]
    pub category: Value,
    #[serde(rename = "Availability")]
    pub availability: Value,
    #[serde(rename = "Image URL")]
    pub image_url: Value,
    #[serde(rename = "Scraped At")]
    pub scraped_at: Value,
}

impl From<&Product> for ExportRow {
    fn from(p: &Product) -> Self {
        let column = |key: &str| p.get(key).cloned().unwrap_or_else(|| Value::from(""));
        Self {
            name: column("name"),
            price: column("price"),
            category: column("category"),
            availability: column("availability"),
            image_url: column("image_url"),
            scraped_at: column("scraped_at"),
        }
    }
}

pub fn rows(products: &[Product]) -> Vec<ExportRow> {
    products.iter().map(ExportRow::from).collect()
}

//! Product catalog - read-only view of the scraped JSON file

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Category used when a record has none
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One scraped record, kept exactly as stored so it can be written back
/// unchanged. Known fields are read through accessors; a field that is
/// missing, `null` or not a string reads as `None` for this record only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(Map<String, Value>);

impl Product {
    /// Raw value of `key`, if the record has it
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn price(&self) -> Option<&str> {
        self.text("price")
    }

    pub fn category(&self) -> Option<&str> {
        self.text("category")
    }

    pub fn availability(&self) -> Option<&str> {
        self.text("availability")
    }

    pub fn image_url(&self) -> Option<&str> {
        self.text("image_url")
    }

    pub fn scraped_at(&self) -> Option<&str> {
        self.text("scraped_at")
    }

    pub fn category_or_unknown(&self) -> &str {
        self.category().unwrap_or(UNKNOWN_CATEGORY)
    }
}

impl From<Value> for Product {
    /// Non-object values become an empty record
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

type LoadError = Box<dyn std::error::Error + Send + Sync>;

fn read(path: &Path) -> Result<Vec<Product>, LoadError> {
    let data = std::fs::read(path)?;
    let products = serde_json::from_slice(&data)?;
    Ok(products)
}

/// Load the catalog from `path`.
///
/// A missing file is an empty catalog. Read and parse failures are logged
/// and also yield an empty catalog; callers never see an error.
pub fn load(path: &Path) -> Vec<Product> {
    if !path.exists() {
        tracing::debug!("Catalog {} not found, serving empty catalog", path.display());
        return Vec::new();
    }

    match read(path) {
        Ok(products) => {
            tracing::debug!("Loaded {} products from {}", products.len(), path.display());
            products
        }
        Err(e) => {
            tracing::error!("Error loading products from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// `load` on the blocking pool, for use from request handlers
pub async fn load_async(path: PathBuf) -> Vec<Product> {
    match tokio::task::spawn_blocking(move || load(&path)).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("Catalog load task failed: {}", e);
            Vec::new()
        }
    }
}

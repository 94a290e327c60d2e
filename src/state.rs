//! Shared request context

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;

/// Read-only state handed to every handler. Holds where the catalog lives,
/// never the catalog itself: each request reads the file afresh.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog_path: PathBuf,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(catalog_path: impl Into<PathBuf>) -> SharedState {
        Arc::new(Self {
            catalog_path: catalog_path.into(),
        })
    }

    pub fn from_config(config: &Config) -> SharedState {
        Self::new(&config.catalog_file)
    }
}

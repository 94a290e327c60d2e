//! Configuration

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub web_addr: String,
    pub cors: String,
    pub catalog_file: String,
    pub log_file: String,
    pub log_level: String,
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv::dotenv().ok();

    Config {
        web_addr: env::var("WEB_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        cors: env::var("WEB_CORS").unwrap_or_else(|_| "*".to_string()),
        catalog_file: env::var("CATALOG_FILE")
            .unwrap_or_else(|_| "romantix_products.json".to_string()),
        log_file: env::var("LOG_FILE").unwrap_or_else(|_| "dashboard.log".to_string()),
        log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".to_string()),
    }
});

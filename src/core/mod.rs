pub mod catalog;
pub mod categories;
pub mod export;
pub mod stats;

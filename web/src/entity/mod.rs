//! SeaORM entities
//!
//! Table mappings for the PostgreSQL schema in `migrations/`.

pub mod contacts;
pub mod news_releases;
pub mod phones;

//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod contact_repo;
pub mod news_release_repo;
pub mod schema;


pub use contact_repo::PostgresContactRepository;
pub use news_release_repo::PostgresNewsReleaseRepository;
pub use schema::apply_migrations;

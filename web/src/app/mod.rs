//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports.

pub mod contact_query;
pub mod contact_service;
pub mod news_release_service;

pub use contact_service::ContactService;
pub use news_release_service::NewsReleaseService;

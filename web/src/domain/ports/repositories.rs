//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    Contact, ContactId, ContactUpdate, NewContact, NewNewsRelease, NewsRelease, NewsReleaseId,
};
use crate::error::DomainError;

/// Repository for the Contact aggregate (a contact and its phones)
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All contacts with their phones, in storage (creation) order
    async fn find_all(&self) -> Result<Vec<Contact>, DomainError>;

    /// Find a contact and its phones by ID
    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, DomainError>;

    /// Insert a contact and all of its phones atomically
    async fn create(&self, contact: &NewContact) -> Result<Contact, DomainError>;

    /// Overwrite contact fields and upsert the listed phones atomically.
    /// Returns `None` if the contact does not exist.
    async fn update(
        &self,
        id: &ContactId,
        changes: &ContactUpdate,
    ) -> Result<Option<Contact>, DomainError>;

    /// Delete a contact and its phones. Returns false if nothing was deleted.
    async fn delete(&self, id: &ContactId) -> Result<bool, DomainError>;

    /// Number of persisted contacts
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository for NewsRelease entities
#[async_trait]
pub trait NewsReleaseRepository: Send + Sync {
    /// All releases, newest first
    async fn find_all(&self) -> Result<Vec<NewsRelease>, DomainError>;

    async fn find_by_id(&self, id: &NewsReleaseId) -> Result<Option<NewsRelease>, DomainError>;

    async fn create(&self, release: &NewNewsRelease) -> Result<NewsRelease, DomainError>;

    /// Returns `None` if the release does not exist
    async fn update(
        &self,
        id: &NewsReleaseId,
        release: &NewNewsRelease,
    ) -> Result<Option<NewsRelease>, DomainError>;

    /// Returns false if nothing was deleted
    async fn delete(&self, id: &NewsReleaseId) -> Result<bool, DomainError>;
}

//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Contact, ContactId, ContactUpdate, NewContact, NewNewsRelease, NewsRelease, NewsReleaseId,
    Phone, PhoneId,
};
use crate::domain::ports::{ContactRepository, NewsReleaseRepository};
use crate::error::DomainError;

fn unavailable() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

// ============================================================================
// In-Memory Contact Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: Arc<RwLock<Vec<Contact>>>,
    fail: bool,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails like a lost database connection
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a contact for testing
    pub fn with_contact(self, contact: Contact) -> Self {
        self.contacts.write().unwrap().push(contact);
        self
    }

    /// Total phones across all stored contacts
    pub fn phone_count(&self) -> usize {
        self.contacts
            .read()
            .unwrap()
            .iter()
            .map(|c| c.phones.len())
            .sum()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(unavailable())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn find_all(&self) -> Result<Vec<Contact>, DomainError> {
        self.check()?;
        Ok(self.contacts.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, DomainError> {
        self.check()?;
        let contacts = self.contacts.read().unwrap();
        Ok(contacts.iter().find(|c| c.id == *id).cloned())
    }

    async fn create(&self, new_contact: &NewContact) -> Result<Contact, DomainError> {
        self.check()?;
        let id = ContactId::new();
        let contact = Contact {
            id,
            firstname: new_contact.firstname.clone(),
            lastname: new_contact.lastname.clone(),
            email: new_contact.email.clone(),
            phones: new_contact
                .phones
                .iter()
                .map(|p| Phone {
                    id: PhoneId::new(),
                    contact_id: id,
                    number: p.number.clone(),
                    phone_type: p.phone_type,
                })
                .collect(),
        };

        self.contacts.write().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn update(
        &self,
        id: &ContactId,
        changes: &ContactUpdate,
    ) -> Result<Option<Contact>, DomainError> {
        self.check()?;
        let mut contacts = self.contacts.write().unwrap();
        let Some(stored) = contacts.iter_mut().find(|c| c.id == *id) else {
            return Ok(None);
        };

        // Work on a copy so a failed phone lookup leaves the stored contact untouched
        let mut updated = stored.clone();
        updated.firstname = changes.firstname.clone();
        updated.lastname = changes.lastname.clone();
        updated.email = changes.email.clone();

        for change in &changes.phones {
            match change.id {
                Some(phone_id) => {
                    let phone = updated
                        .phones
                        .iter_mut()
                        .find(|p| p.id == phone_id)
                        .ok_or_else(|| {
                            DomainError::NotFound(format!(
                                "Phone {} not found on contact {}",
                                phone_id, id
                            ))
                        })?;
                    phone.number = change.number.clone();
                    phone.phone_type = change.phone_type;
                }
                None => updated.phones.push(Phone {
                    id: PhoneId::new(),
                    contact_id: *id,
                    number: change.number.clone(),
                    phone_type: change.phone_type,
                }),
            }
        }

        *stored = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: &ContactId) -> Result<bool, DomainError> {
        self.check()?;
        let mut contacts = self.contacts.write().unwrap();
        let before = contacts.len();
        contacts.retain(|c| c.id != *id);
        Ok(contacts.len() < before)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check()?;
        Ok(self.contacts.read().unwrap().len() as u64)
    }
}

// ============================================================================
// In-Memory News Release Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryNewsReleaseRepository {
    releases: Arc<RwLock<Vec<NewsRelease>>>,
}

impl InMemoryNewsReleaseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a release for testing
    pub fn with_release(self, release: NewsRelease) -> Self {
        self.releases.write().unwrap().push(release);
        self
    }
}

#[async_trait]
impl NewsReleaseRepository for InMemoryNewsReleaseRepository {
    async fn find_all(&self) -> Result<Vec<NewsRelease>, DomainError> {
        let mut releases = self.releases.read().unwrap().clone();
        releases.sort_by(|a, b| {
            b.released_on
                .cmp(&a.released_on)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        Ok(releases)
    }

    async fn find_by_id(&self, id: &NewsReleaseId) -> Result<Option<NewsRelease>, DomainError> {
        let releases = self.releases.read().unwrap();
        Ok(releases.iter().find(|r| r.id == *id).cloned())
    }

    async fn create(&self, release: &NewNewsRelease) -> Result<NewsRelease, DomainError> {
        let created = NewsRelease {
            id: NewsReleaseId::new(),
            title: release.title.clone(),
            released_on: release.released_on,
            body: release.body.clone(),
        };
        self.releases.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: &NewsReleaseId,
        release: &NewNewsRelease,
    ) -> Result<Option<NewsRelease>, DomainError> {
        let mut releases = self.releases.write().unwrap();
        let Some(stored) = releases.iter_mut().find(|r| r.id == *id) else {
            return Ok(None);
        };

        stored.title = release.title.clone();
        stored.released_on = release.released_on;
        stored.body = release.body.clone();
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: &NewsReleaseId) -> Result<bool, DomainError> {
        let mut releases = self.releases.write().unwrap();
        let before = releases.len();
        releases.retain(|r| r.id != *id);
        Ok(releases.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::contact::{NewPhone, PhoneUpdate};
    use crate::domain::entities::PhoneType;
    use crate::test_utils::test_contact_named;

    #[tokio::test]
    async fn create_assigns_phone_owner() {
        let repo = InMemoryContactRepository::new();
        let new_contact = NewContact {
            firstname: "Aaron".to_string(),
            lastname: "Sumner".to_string(),
            email: None,
            phones: vec![NewPhone {
                number: "555-0100".to_string(),
                phone_type: PhoneType::Home,
            }],
        };

        let contact = repo.create(&new_contact).await.unwrap();

        assert_eq!(contact.phones[0].contact_id, contact.id);
        assert_eq!(repo.phone_count(), 1);
    }

    #[tokio::test]
    async fn update_with_unknown_phone_leaves_contact_untouched() {
        let contact = test_contact_named("Lawrence", "Smith");
        let repo = InMemoryContactRepository::new().with_contact(contact.clone());
        let changes = ContactUpdate {
            firstname: "Larry".to_string(),
            lastname: "Smith".to_string(),
            email: None,
            phones: vec![PhoneUpdate {
                id: Some(PhoneId::new()),
                number: "555-0000".to_string(),
                phone_type: PhoneType::Home,
            }],
        };

        assert!(repo.update(&contact.id, &changes).await.is_err());
        assert_eq!(repo.find_by_id(&contact.id).await.unwrap(), Some(contact));
    }

    #[tokio::test]
    async fn failing_repository_reports_database_error() {
        let repo = InMemoryContactRepository::failing();

        assert!(matches!(
            repo.count().await,
            Err(DomainError::Database(_))
        ));
    }
}

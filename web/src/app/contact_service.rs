//! Contact service
//!
//! Validation and persistence rules for the Contact aggregate. Every write
//! is validated up front; the repository only ever sees valid data.

use std::sync::Arc;

use crate::app::contact_query::filter_by_letter;
use crate::domain::entities::{Contact, ContactId, ContactInput, FirstLetter};
use crate::domain::ports::ContactRepository;
use crate::error::{AppError, DomainError};

/// Service for managing contacts and their phones
pub struct ContactService<CR>
where
    CR: ContactRepository + ?Sized,
{
    contacts: Arc<CR>,
}

impl<CR> ContactService<CR>
where
    CR: ContactRepository + ?Sized,
{
    pub fn new(contacts: Arc<CR>) -> Self {
        Self { contacts }
    }

    /// List contacts, optionally only those whose last name starts with `letter`
    pub async fn list(&self, letter: Option<FirstLetter>) -> Result<Vec<Contact>, AppError> {
        let contacts = self.contacts.find_all().await?;
        Ok(filter_by_letter(contacts, letter))
    }

    /// Get a contact by ID
    pub async fn get(&self, id: &ContactId) -> Result<Contact, AppError> {
        self.contacts
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a contact and its phones in one step
    pub async fn create(&self, input: &ContactInput) -> Result<Contact, AppError> {
        let new_contact = input.validate_new()?;

        let contact = self.contacts.create(&new_contact).await?;

        tracing::info!(
            contact_id = %contact.id,
            phones = contact.phones.len(),
            "Created contact"
        );
        Ok(contact)
    }

    /// Update a contact and its phones in one step. Nothing is written if
    /// the merged result does not validate.
    pub async fn update(&self, id: &ContactId, input: &ContactInput) -> Result<Contact, AppError> {
        let existing = self.get(id).await?;
        let changes = existing.apply(input)?;

        let contact = self
            .contacts
            .update(id, &changes)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(contact_id = %contact.id, "Updated contact");
        Ok(contact)
    }

    /// Delete a contact and all of its phones
    pub async fn delete(&self, id: &ContactId) -> Result<(), AppError> {
        if !self.contacts.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(contact_id = %id, "Deleted contact");
        Ok(())
    }

    /// Number of persisted contacts
    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(self.contacts.count().await?)
    }
}

fn not_found(id: &ContactId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("Contact {} not found", id)))
}

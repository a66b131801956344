//! News release service

use std::sync::Arc;

use crate::domain::entities::{NewsRelease, NewsReleaseId, NewsReleaseInput};
use crate::domain::ports::NewsReleaseRepository;
use crate::error::{AppError, DomainError};

/// Service for managing news releases
pub struct NewsReleaseService<NR>
where
    NR: NewsReleaseRepository + ?Sized,
{
    releases: Arc<NR>,
}

impl<NR> NewsReleaseService<NR>
where
    NR: NewsReleaseRepository + ?Sized,
{
    pub fn new(releases: Arc<NR>) -> Self {
        Self { releases }
    }

    /// All releases, newest first
    pub async fn list(&self) -> Result<Vec<NewsRelease>, AppError> {
        Ok(self.releases.find_all().await?)
    }

    pub async fn get(&self, id: &NewsReleaseId) -> Result<NewsRelease, AppError> {
        self.releases
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, input: &NewsReleaseInput) -> Result<NewsRelease, AppError> {
        let new_release = input.validate()?;
        let release = self.releases.create(&new_release).await?;

        tracing::info!(news_release_id = %release.id, "Created news release");
        Ok(release)
    }

    pub async fn update(
        &self,
        id: &NewsReleaseId,
        input: &NewsReleaseInput,
    ) -> Result<NewsRelease, AppError> {
        let existing = self.get(id).await?;
        let changes = existing.apply(input)?;

        let release = self
            .releases
            .update(id, &changes)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(news_release_id = %release.id, "Updated news release");
        Ok(release)
    }

    pub async fn delete(&self, id: &NewsReleaseId) -> Result<(), AppError> {
        if !self.releases.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(news_release_id = %id, "Deleted news release");
        Ok(())
    }
}

fn not_found(id: &NewsReleaseId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!(
        "News release {} not found",
        id
    )))
}

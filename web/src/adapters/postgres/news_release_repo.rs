//! PostgreSQL adapter for NewsReleaseRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::entities::{NewNewsRelease, NewsRelease, NewsReleaseId};
use crate::domain::ports::NewsReleaseRepository;
use crate::entity::news_releases;
use crate::error::DomainError;

/// PostgreSQL implementation of NewsReleaseRepository
pub struct PostgresNewsReleaseRepository {
    db: DatabaseConnection,
}

impl PostgresNewsReleaseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NewsReleaseRepository for PostgresNewsReleaseRepository {
    async fn find_all(&self) -> Result<Vec<NewsRelease>, DomainError> {
        let results = news_releases::Entity::find()
            .order_by_desc(news_releases::Column::ReleasedOn)
            .order_by_desc(news_releases::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &NewsReleaseId) -> Result<Option<NewsRelease>, DomainError> {
        let result = news_releases::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, release: &NewNewsRelease) -> Result<NewsRelease, DomainError> {
        let model = news_releases::ActiveModel {
            id: Set(NewsReleaseId::new().0),
            title: Set(release.title.clone()),
            released_on: Set(release.released_on),
            body: Set(release.body.clone()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &NewsReleaseId,
        release: &NewNewsRelease,
    ) -> Result<Option<NewsRelease>, DomainError> {
        let exists = news_releases::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let result = news_releases::ActiveModel {
            id: Set(id.0),
            title: Set(release.title.clone()),
            released_on: Set(release.released_on),
            body: Set(release.body.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: &NewsReleaseId) -> Result<bool, DomainError> {
        let result = news_releases::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl From<news_releases::Model> for NewsRelease {
    fn from(model: news_releases::Model) -> Self {
        NewsRelease {
            id: NewsReleaseId(model.id),
            title: model.title,
            released_on: model.released_on,
            body: model.body,
        }
    }
}

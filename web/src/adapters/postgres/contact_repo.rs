//! PostgreSQL adapter for ContactRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::entities::{
    Contact, ContactId, ContactUpdate, NewContact, Phone, PhoneId, PhoneType,
};
use crate::domain::ports::ContactRepository;
use crate::entity::{contacts, phones};
use crate::error::DomainError;

/// PostgreSQL implementation of ContactRepository
pub struct PostgresContactRepository {
    db: DatabaseConnection,
}

impl PostgresContactRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Load one contact with its phones on any connection (pool or transaction)
async fn load<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<Contact>, DomainError> {
    let Some(model) = contacts::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?
    else {
        return Ok(None);
    };

    let phone_models = phones::Entity::find()
        .filter(phones::Column::ContactId.eq(id))
        .order_by_asc(phones::Column::Id)
        .all(conn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(Some(to_contact(model, phone_models)))
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn find_all(&self) -> Result<Vec<Contact>, DomainError> {
        let rows = contacts::Entity::find()
            .find_with_related(phones::Entity)
            .order_by_asc(contacts::Column::Id)
            .order_by_asc(phones::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(contact, phones)| to_contact(contact, phones))
            .collect())
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, DomainError> {
        load(&self.db, id.0).await
    }

    async fn create(&self, contact: &NewContact) -> Result<Contact, DomainError> {
        let id = ContactId::new();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let model = contacts::ActiveModel {
            id: Set(id.0),
            firstname: Set(contact.firstname.clone()),
            lastname: Set(contact.lastname.clone()),
            email: Set(contact.email.clone()),
        }
        .insert(&txn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut phone_models = Vec::with_capacity(contact.phones.len());
        for phone in &contact.phones {
            let phone_model = phones::ActiveModel {
                id: Set(PhoneId::new().0),
                contact_id: Set(id.0),
                number: Set(phone.number.clone()),
                phone_type: Set(phone.phone_type.to_string()),
            }
            .insert(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
            phone_models.push(phone_model);
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(to_contact(model, phone_models))
    }

    async fn update(
        &self,
        id: &ContactId,
        changes: &ContactUpdate,
    ) -> Result<Option<Contact>, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let exists = contacts::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .is_some();
        if !exists {
            return Ok(None);
        }

        contacts::ActiveModel {
            id: Set(id.0),
            firstname: Set(changes.firstname.clone()),
            lastname: Set(changes.lastname.clone()),
            email: Set(changes.email.clone()),
        }
        .update(&txn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        for phone in &changes.phones {
            match phone.id {
                Some(phone_id) => {
                    let result = phones::Entity::update_many()
                        .col_expr(phones::Column::Number, Expr::value(phone.number.clone()))
                        .col_expr(
                            phones::Column::PhoneType,
                            Expr::value(phone.phone_type.to_string()),
                        )
                        .filter(phones::Column::Id.eq(phone_id.0))
                        .filter(phones::Column::ContactId.eq(id.0))
                        .exec(&txn)
                        .await
                        .map_err(|e| DomainError::Database(e.to_string()))?;

                    // Dropping the transaction rolls back the contact update
                    if result.rows_affected == 0 {
                        return Err(DomainError::NotFound(format!(
                            "Phone {} not found on contact {}",
                            phone_id, id
                        )));
                    }
                }
                None => {
                    phones::ActiveModel {
                        id: Set(PhoneId::new().0),
                        contact_id: Set(id.0),
                        number: Set(phone.number.clone()),
                        phone_type: Set(phone.phone_type.to_string()),
                    }
                    .insert(&txn)
                    .await
                    .map_err(|e| DomainError::Database(e.to_string()))?;
                }
            }
        }

        let updated = load(&txn, id.0).await?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(updated)
    }

    async fn delete(&self, id: &ContactId) -> Result<bool, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        phones::Entity::delete_many()
            .filter(phones::Column::ContactId.eq(id.0))
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let result = contacts::Entity::delete_by_id(id.0)
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        contacts::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

/// Convert SeaORM model to domain entity
impl From<phones::Model> for Phone {
    fn from(model: phones::Model) -> Self {
        Phone {
            id: PhoneId(model.id),
            contact_id: ContactId(model.contact_id),
            number: model.number,
            phone_type: model.phone_type.parse().unwrap_or(PhoneType::Home),
        }
    }
}

fn to_contact(model: contacts::Model, phones: Vec<phones::Model>) -> Contact {
    Contact {
        id: ContactId(model.id),
        firstname: model.firstname,
        lastname: model.lastname,
        email: model.email,
        phones: phones.into_iter().map(Phone::from).collect(),
    }
}

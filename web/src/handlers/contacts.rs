//! Contact handlers
//!
//! The seven resource actions plus the `_method` override route.

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use super::found;
use super::params::{self, FormFields, MethodOverride};
use crate::domain::entities::{ContactId, ContactInput, FirstLetter};
use crate::error::{AppError, DomainError};
use crate::views::contacts::{self as view, ContactForm, FormTarget};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub letter: Option<String>,
}

fn contact_id(raw: &str) -> Result<ContactId, AppError> {
    params::parse_id(raw, "Contact").map(ContactId)
}

/// GET /contacts
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let letter = FirstLetter::parse(query.letter.as_deref());
    let contacts = state.contact_service.list(letter).await?;
    let total = state.contact_service.count().await?;

    Ok(Html(view::render_index(&contacts, letter, total)))
}

/// GET /contacts/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let contact = state.contact_service.get(&contact_id(&id)?).await?;

    Ok(Html(view::render_show(&contact)))
}

/// GET /contacts/new
pub async fn new() -> Html<String> {
    let input = ContactInput::default();

    Html(view::render_form(&ContactForm {
        input: &input,
        errors: None,
        target: FormTarget::Create,
    }))
}

/// POST /contacts
///
/// Redirects to the new contact, or re-renders the form with errors.
pub async fn create(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Result<Response, AppError> {
    let input = params::contact_input(&fields)?;

    match state.contact_service.create(&input).await {
        Ok(contact) => Ok(found(&format!("/contacts/{}", contact.id))),
        Err(AppError::Domain(DomainError::Validation(errors))) => {
            tracing::debug!(%errors, "Contact rejected");
            Ok(Html(view::render_form(&ContactForm {
                input: &input,
                errors: Some(&errors),
                target: FormTarget::Create,
            }))
            .into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /contacts/:id/edit
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let contact = state.contact_service.get(&contact_id(&id)?).await?;
    let input = contact.to_input();

    Ok(Html(view::render_form(&ContactForm {
        input: &input,
        errors: None,
        target: FormTarget::Update(contact.id),
    })))
}

/// PATCH /contacts/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<FormFields>,
) -> Result<Response, AppError> {
    update_contact(&state, contact_id(&id)?, &fields).await
}

/// DELETE /contacts/:id
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    destroy_contact(&state, contact_id(&id)?).await
}

/// POST /contacts/:id
///
/// Form fallback for PATCH and DELETE, chosen by the `_method` field.
pub async fn override_method(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<FormFields>,
) -> Result<Response, AppError> {
    let id = contact_id(&id)?;

    match params::method_override(&fields)? {
        MethodOverride::Patch => update_contact(&state, id, &fields).await,
        MethodOverride::Delete => destroy_contact(&state, id).await,
    }
}

async fn update_contact(
    state: &AppState,
    id: ContactId,
    fields: &[(String, String)],
) -> Result<Response, AppError> {
    let input = params::contact_input(fields)?;

    match state.contact_service.update(&id, &input).await {
        Ok(contact) => Ok(found(&format!("/contacts/{}", contact.id))),
        Err(AppError::Domain(DomainError::Validation(errors))) => {
            tracing::debug!(contact_id = %id, %errors, "Contact update rejected");
            Ok(Html(view::render_form(&ContactForm {
                input: &input,
                errors: Some(&errors),
                target: FormTarget::Update(id),
            }))
            .into_response())
        }
        Err(e) => Err(e),
    }
}

async fn destroy_contact(state: &AppState, id: ContactId) -> Result<Response, AppError> {
    state.contact_service.delete(&id).await?;
    Ok(found("/contacts"))
}

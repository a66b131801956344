//! News release handlers

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
    Form,
};

use super::found;
use super::params::{self, FormFields, MethodOverride};
use crate::domain::entities::{NewsReleaseId, NewsReleaseInput};
use crate::error::{AppError, DomainError};
use crate::views::news_releases as view;
use crate::AppState;

fn news_release_id(raw: &str) -> Result<NewsReleaseId, AppError> {
    params::parse_id(raw, "News release").map(NewsReleaseId)
}

/// GET /news_releases
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let releases = state.news_release_service.list().await?;
    Ok(Html(view::render_index(&releases)))
}

/// GET /news_releases/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let release = state.news_release_service.get(&news_release_id(&id)?).await?;
    Ok(Html(view::render_show(&release)))
}

/// GET /news_releases/new
pub async fn new() -> Html<String> {
    Html(view::render_form(&NewsReleaseInput::default(), None, None))
}

/// POST /news_releases
pub async fn create(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Result<Response, AppError> {
    let input = params::news_release_input(&fields);

    match state.news_release_service.create(&input).await {
        Ok(release) => Ok(found(&format!("/news_releases/{}", release.id))),
        Err(AppError::Domain(DomainError::Validation(errors))) => {
            Ok(Html(view::render_form(&input, Some(&errors), None)).into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /news_releases/:id/edit
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let release = state.news_release_service.get(&news_release_id(&id)?).await?;
    Ok(Html(view::render_form(
        &release.to_input(),
        None,
        Some(release.id),
    )))
}

/// PATCH /news_releases/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<FormFields>,
) -> Result<Response, AppError> {
    update_release(&state, news_release_id(&id)?, &fields).await
}

/// DELETE /news_releases/:id
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = news_release_id(&id)?;
    state.news_release_service.delete(&id).await?;
    Ok(found("/news_releases"))
}

/// POST /news_releases/:id
pub async fn override_method(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<FormFields>,
) -> Result<Response, AppError> {
    let id = news_release_id(&id)?;

    match params::method_override(&fields)? {
        MethodOverride::Patch => update_release(&state, id, &fields).await,
        MethodOverride::Delete => {
            state.news_release_service.delete(&id).await?;
            Ok(found("/news_releases"))
        }
    }
}

async fn update_release(
    state: &AppState,
    id: NewsReleaseId,
    fields: &[(String, String)],
) -> Result<Response, AppError> {
    let input = params::news_release_input(fields);

    match state.news_release_service.update(&id, &input).await {
        Ok(release) => Ok(found(&format!("/news_releases/{}", release.id))),
        Err(AppError::Domain(DomainError::Validation(errors))) => {
            Ok(Html(view::render_form(&input, Some(&errors), Some(id))).into_response())
        }
        Err(e) => Err(e),
    }
}

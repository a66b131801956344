//! Contacts web app
//!
//! Server-rendered CRUD over contacts (with their phone numbers) and news
//! releases, backed by PostgreSQL.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    response::Response,
    routing::get,
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod views;

#[cfg(test)]
mod test_utils;


use adapters::{apply_migrations, PostgresContactRepository, PostgresNewsReleaseRepository};
use app::{ContactService, NewsReleaseService};
use config::Config;
use domain::ports::{ContactRepository, NewsReleaseRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService<dyn ContactRepository>>,
    pub news_release_service: Arc<NewsReleaseService<dyn NewsReleaseRepository>>,
}

impl AppState {
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        releases: Arc<dyn NewsReleaseRepository>,
    ) -> Self {
        Self {
            contact_service: Arc::new(ContactService::new(contacts)),
            news_release_service: Arc::new(NewsReleaseService::new(releases)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn root() -> Response {
    handlers::found("/contacts")
}

/// Every route the app serves
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        // Contacts
        .route(
            "/contacts",
            get(handlers::contacts::index).post(handlers::contacts::create),
        )
        .route("/contacts/new", get(handlers::contacts::new))
        .route(
            "/contacts/:id",
            get(handlers::contacts::show)
                .patch(handlers::contacts::update)
                .put(handlers::contacts::update)
                .delete(handlers::contacts::destroy)
                .post(handlers::contacts::override_method),
        )
        .route("/contacts/:id/edit", get(handlers::contacts::edit))
        // News releases
        .route(
            "/news_releases",
            get(handlers::news_releases::index).post(handlers::news_releases::create),
        )
        .route("/news_releases/new", get(handlers::news_releases::new))
        .route(
            "/news_releases/:id",
            get(handlers::news_releases::show)
                .patch(handlers::news_releases::update)
                .put(handlers::news_releases::update)
                .delete(handlers::news_releases::destroy)
                .post(handlers::news_releases::override_method),
        )
        .route("/news_releases/:id/edit", get(handlers::news_releases::edit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,contacts_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting contacts...");

    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    apply_migrations(&db)
        .await
        .context("Failed to apply database schema")?;

    let state = AppState::new(
        Arc::new(PostgresContactRepository::new(db.clone())),
        Arc::new(PostgresNewsReleaseRepository::new(db)),
    );

    let app = build_router(state);

    let addr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

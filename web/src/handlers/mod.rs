//! HTTP handlers
//!
//! Axum request handlers rendering HTML pages.

pub mod contacts;
pub mod news_releases;
pub mod params;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// 302 redirect, as browsers expect after a form submission
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

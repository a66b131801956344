//! Unified error types for the contacts app
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `ValidationErrors`: Field-level messages attached to a failed validation
//! - `AppError`: Application layer errors (rendered as HTML error pages)

use std::fmt;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

/// A single field-level validation message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered collection of field-level validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages recorded for a field, in insertion order
    pub fn get(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// "Firstname can't be blank" style sentences for display
    pub fn full_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| format!("{} {}", humanize(&e.field), e.message))
            .collect()
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

/// Turn `phones[1].phone_type` into `Phones 2 phone type`
fn humanize(field: &str) -> String {
    let mut out = String::new();
    let mut chars = field.chars().peekable();
    let mut index = String::new();

    while let Some(c) = chars.next() {
        match c {
            '[' => {
                index.clear();
                while let Some(&d) = chars.peek() {
                    chars.next();
                    if d == ']' {
                        break;
                    }
                    index.push(d);
                }
                match index.parse::<usize>() {
                    Ok(n) => out.push_str(&format!(" {}", n + 1)),
                    Err(_) => out.push_str(&format!(" {}", index)),
                }
            }
            '.' | '_' => out.push(' '),
            c => out.push(c),
        }
    }

    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => out,
    }
}

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) | AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation failed",
                Some(errors.to_string()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = views::error_page(status, title, details.as_deref());

        (status, Html(body)).into_response()
    }
}

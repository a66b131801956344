//! News release domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, ValidationErrors};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unique identifier for a news release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsReleaseId(pub Uuid);

impl NewsReleaseId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for NewsReleaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NewsReleaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A published news release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsRelease {
    pub id: NewsReleaseId,
    pub title: String,
    pub released_on: NaiveDate,
    pub body: String,
}

impl NewsRelease {
    /// `2013-07-20: Title`
    pub fn title_with_date(&self) -> String {
        format!("{}: {}", self.released_on.format(DATE_FORMAT), self.title)
    }

    pub fn to_input(&self) -> NewsReleaseInput {
        NewsReleaseInput {
            title: Some(self.title.clone()),
            released_on: Some(self.released_on.format(DATE_FORMAT).to_string()),
            body: Some(self.body.clone()),
        }
    }

    /// Merge submitted fields over the current values and validate
    pub fn apply(&self, input: &NewsReleaseInput) -> Result<NewNewsRelease, DomainError> {
        let current = self.to_input();
        let merged = NewsReleaseInput {
            title: input.title.clone().or(current.title),
            released_on: input.released_on.clone().or(current.released_on),
            body: input.body.clone().or(current.body),
        };
        merged.validate()
    }
}

/// Submitted news release fields. `None` means the field was not submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsReleaseInput {
    pub title: Option<String>,
    pub released_on: Option<String>,
    pub body: Option<String>,
}

impl NewsReleaseInput {
    pub fn validate(&self) -> Result<NewNewsRelease, DomainError> {
        let mut errors = ValidationErrors::new();

        let title = present(self.title.as_deref(), "title", &mut errors);
        let body = present(self.body.as_deref(), "body", &mut errors);
        let released_on = match present(self.released_on.as_deref(), "released_on", &mut errors) {
            Some(raw) => match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add("released_on", "is not a valid date");
                    None
                }
            },
            None => None,
        };

        match (title, released_on, body) {
            (Some(title), Some(released_on), Some(body)) if errors.is_empty() => {
                Ok(NewNewsRelease {
                    title,
                    released_on,
                    body,
                })
            }
            _ => Err(DomainError::Validation(errors)),
        }
    }
}

/// Validated data needed to create or overwrite a news release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNewsRelease {
    pub title: String,
    pub released_on: NaiveDate,
    pub body: String,
}

fn present(value: Option<&str>, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.to_string()),
        _ => {
            errors.add(field, "can't be blank");
            None
        }
    }
}

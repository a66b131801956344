//! Request parameter decoding
//!
//! HTML forms post flat `application/x-www-form-urlencoded` pairs with
//! bracketed keys (`contact[phones_attributes][0][number]`). These helpers
//! turn them into the typed inputs the services expect.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::domain::entities::{
    ContactAttrs, ContactInput, Field, NewsReleaseInput, PhoneAttrs, PhoneId,
};
use crate::error::AppError;

/// Raw form body as ordered key/value pairs
pub type FormFields = Vec<(String, String)>;

const PHONES_PREFIX: &str = "contact[phones_attributes][";

/// Verb requested through the `_method` field of a POSTed form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodOverride {
    Patch,
    Delete,
}

pub fn method_override(fields: &[(String, String)]) -> Result<MethodOverride, AppError> {
    let method = fields
        .iter()
        .find(|(key, _)| key == "_method")
        .map(|(_, value)| value.trim().to_ascii_lowercase())
        .ok_or_else(|| AppError::BadRequest("Missing _method field".to_string()))?;

    match method.as_str() {
        "patch" | "put" => Ok(MethodOverride::Patch),
        "delete" => Ok(MethodOverride::Delete),
        other => Err(AppError::BadRequest(format!("Unsupported _method: {}", other))),
    }
}

/// Parse a path id; anything that is not a UUID is reported as missing
pub fn parse_id(raw: &str, kind: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("{} {} not found", kind, raw)))
}

/// Decode `contact[...]` fields into a nested-attributes payload.
///
/// Phone rows are ordered by their numeric index. Rows where every field
/// is blank are dropped.
pub fn contact_input(fields: &[(String, String)]) -> Result<ContactInput, AppError> {
    let mut contact = ContactAttrs::default();
    let mut rows: BTreeMap<usize, PhoneAttrs> = BTreeMap::new();

    for (key, value) in fields {
        if let Some(rest) = key.strip_prefix(PHONES_PREFIX) {
            let (index, attr) = split_phone_key(rest)
                .ok_or_else(|| AppError::BadRequest(format!("Malformed phone field: {}", key)))?;
            let row = rows.entry(index).or_default();

            match attr {
                "id" if value.trim().is_empty() => {}
                "id" => {
                    let id = Uuid::parse_str(value.trim()).map_err(|_| {
                        AppError::BadRequest(format!("Malformed phone id: {}", value))
                    })?;
                    row.id = Some(PhoneId(id));
                }
                "number" => row.number = Some(value.clone()),
                "phone_type" => row.phone_type = Some(value.clone()),
                _ => {}
            }
            continue;
        }

        match key.as_str() {
            "contact[firstname]" => contact.firstname = Field::from(value.as_str()),
            "contact[lastname]" => contact.lastname = Field::from(value.as_str()),
            "contact[email]" => contact.email = Field::from(value.as_str()),
            _ => {}
        }
    }

    Ok(ContactInput {
        contact,
        phones: rows.into_values().filter(|row| !row.is_blank()).collect(),
    })
}

/// `3][number]` -> `(3, "number")`
fn split_phone_key(rest: &str) -> Option<(usize, &str)> {
    let (index, attr) = rest.split_once("][")?;
    let index = index.parse().ok()?;
    let attr = attr.strip_suffix(']')?;
    Some((index, attr))
}

/// Decode `news_release[...]` fields
pub fn news_release_input(fields: &[(String, String)]) -> NewsReleaseInput {
    let mut input = NewsReleaseInput::default();

    for (key, value) in fields {
        match key.as_str() {
            "news_release[title]" => input.title = Some(value.clone()),
            "news_release[released_on]" => input.released_on = Some(value.clone()),
            "news_release[body]" => input.body = Some(value.clone()),
            _ => {}
        }
    }

    input
}

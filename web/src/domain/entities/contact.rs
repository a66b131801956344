//! Contact domain entity
//!
//! A contact owns an ordered list of phones. Contacts and their phones are
//! validated and persisted together as one aggregate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, ValidationErrors};

const BLANK: &str = "can't be blank";
const NOT_IN_LIST: &str = "is not included in the list";

/// Unique identifier for a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(pub Uuid);

impl ContactId {
    /// Time-ordered, so sorting by id follows creation order
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ContactId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a phone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneId(pub Uuid);

impl PhoneId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for PhoneId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PhoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of phone number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Home,
    Office,
    Mobile,
}

impl PhoneType {
    pub const ALL: [PhoneType; 3] = [PhoneType::Home, PhoneType::Office, PhoneType::Mobile];
}

impl std::fmt::Display for PhoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhoneType::Home => write!(f, "home"),
            PhoneType::Office => write!(f, "office"),
            PhoneType::Mobile => write!(f, "mobile"),
        }
    }
}

impl std::str::FromStr for PhoneType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(PhoneType::Home),
            "office" | "work" => Ok(PhoneType::Office),
            "mobile" | "cell" => Ok(PhoneType::Mobile),
            _ => Err(format!("Unknown phone type: {}", s)),
        }
    }
}

/// A phone number owned by a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phone {
    pub id: PhoneId,
    pub contact_id: ContactId,
    pub number: String,
    pub phone_type: PhoneType,
}

/// A persisted contact together with its phones
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: ContactId,
    pub firstname: String,
    pub lastname: String,
    pub email: Option<String>,
    pub phones: Vec<Phone>,
}

impl Contact {
    /// Full display name
    pub fn name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    pub fn phone(&self, id: &PhoneId) -> Option<&Phone> {
        self.phones.iter().find(|p| p.id == *id)
    }

    /// Current values as form input, used to pre-fill the edit form
    pub fn to_input(&self) -> ContactInput {
        ContactInput {
            contact: ContactAttrs {
                firstname: Field::from(self.firstname.as_str()),
                lastname: Field::from(self.lastname.as_str()),
                email: Field::from(self.email.clone()),
            },
            phones: self
                .phones
                .iter()
                .map(|p| PhoneAttrs {
                    id: Some(p.id),
                    number: Some(p.number.clone()),
                    phone_type: Some(p.phone_type.to_string()),
                })
                .collect(),
        }
    }

    /// Merge submitted attributes over the persisted values and validate
    /// the result. Attributes left out of the input keep their current
    /// value; phones without an id are added, phones with an id must
    /// already belong to this contact.
    pub fn apply(&self, input: &ContactInput) -> Result<ContactUpdate, DomainError> {
        let attrs = &input.contact;
        let mut errors = ValidationErrors::new();

        let firstname = required(
            attrs.firstname.or_current(Some(self.firstname.as_str())),
            "firstname",
            &mut errors,
        );
        let lastname = required(
            attrs.lastname.or_current(Some(self.lastname.as_str())),
            "lastname",
            &mut errors,
        );
        let email = optional(attrs.email.or_current(self.email.as_deref()));

        let mut phones = Vec::with_capacity(input.phones.len());
        for (index, phone_attrs) in input.phones.iter().enumerate() {
            let existing = match phone_attrs.id {
                Some(id) => Some(self.phone(&id).ok_or_else(|| {
                    DomainError::NotFound(format!("Phone {} not found on contact {}", id, self.id))
                })?),
                None => None,
            };

            let number = phone_attrs
                .number
                .as_deref()
                .or(existing.map(|p| p.number.as_str()));
            let current_type = existing.map(|p| p.phone_type.to_string());
            let phone_type = phone_attrs
                .phone_type
                .as_deref()
                .or(current_type.as_deref());

            if let Some((number, phone_type)) = validate_phone(index, number, phone_type, &mut errors)
            {
                phones.push(PhoneUpdate {
                    id: phone_attrs.id,
                    number,
                    phone_type,
                });
            }
        }

        errors.into_result()?;

        Ok(ContactUpdate {
            firstname: firstname.unwrap_or_default(),
            lastname: lastname.unwrap_or_default(),
            email,
            phones,
        })
    }
}

/// One submitted contact attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field {
    /// Not part of the submission
    #[default]
    Absent,
    /// Explicitly set to nothing
    Null,
    Value(String),
}

impl Field {
    /// The submitted text, if there is one
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Field::Value(v) => Some(v.as_str()),
            Field::Absent | Field::Null => None,
        }
    }

    /// Resolve against the stored value: only an absent field keeps it
    pub fn or_current<'a>(&'a self, current: Option<&'a str>) -> Option<&'a str> {
        match self {
            Field::Absent => current,
            Field::Null => None,
            Field::Value(v) => Some(v.as_str()),
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Value(value.to_string())
    }
}

impl From<Option<String>> for Field {
    fn from(value: Option<String>) -> Self {
        value.map_or(Field::Null, Field::Value)
    }
}

/// Submitted contact fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactAttrs {
    pub firstname: Field,
    pub lastname: Field,
    pub email: Field,
}

/// Submitted fields for one nested phone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneAttrs {
    pub id: Option<PhoneId>,
    pub number: Option<String>,
    pub phone_type: Option<String>,
}

impl PhoneAttrs {
    /// True when every submitted field is missing or whitespace
    pub fn is_blank(&self) -> bool {
        self.id.is_none()
            && self.number.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.phone_type.as_deref().map_or(true, |s| s.trim().is_empty())
    }
}

/// Nested-attributes payload: a contact and its phones in one unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub contact: ContactAttrs,
    pub phones: Vec<PhoneAttrs>,
}

impl ContactInput {
    /// Validate the payload as a brand new contact
    pub fn validate_new(&self) -> Result<NewContact, DomainError> {
        let attrs = &self.contact;
        let mut errors = ValidationErrors::new();

        let firstname = required(attrs.firstname.as_deref(), "firstname", &mut errors);
        let lastname = required(attrs.lastname.as_deref(), "lastname", &mut errors);
        let email = optional(attrs.email.as_deref());

        let phones: Vec<NewPhone> = self
            .phones
            .iter()
            .enumerate()
            .filter_map(|(index, p)| {
                validate_phone(
                    index,
                    p.number.as_deref(),
                    p.phone_type.as_deref(),
                    &mut errors,
                )
            })
            .map(|(number, phone_type)| NewPhone { number, phone_type })
            .collect();

        errors.into_result()?;

        Ok(NewContact {
            firstname: firstname.unwrap_or_default(),
            lastname: lastname.unwrap_or_default(),
            email,
            phones,
        })
    }
}

/// Validated data needed to create a contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub firstname: String,
    pub lastname: String,
    pub email: Option<String>,
    pub phones: Vec<NewPhone>,
}

/// Validated data needed to create a phone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhone {
    pub number: String,
    pub phone_type: PhoneType,
}

/// Validated replacement values for an existing contact.
/// Phones listed here are updated (with id) or added (without id);
/// phones not listed are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactUpdate {
    pub firstname: String,
    pub lastname: String,
    pub email: Option<String>,
    pub phones: Vec<PhoneUpdate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneUpdate {
    pub id: Option<PhoneId>,
    pub number: String,
    pub phone_type: PhoneType,
}

/// Whitespace-only counts as blank; accepted values are kept as submitted
fn required(value: Option<&str>, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.to_string()),
        _ => {
            errors.add(field, BLANK);
            None
        }
    }
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

fn validate_phone(
    index: usize,
    number: Option<&str>,
    phone_type: Option<&str>,
    errors: &mut ValidationErrors,
) -> Option<(String, PhoneType)> {
    let number = required(number, &format!("phones[{}].number", index), errors);

    let type_field = format!("phones[{}].phone_type", index);
    let phone_type = match phone_type.map(str::trim) {
        Some(t) if !t.is_empty() => match t.parse::<PhoneType>() {
            Ok(pt) => Some(pt),
            Err(_) => {
                errors.add(type_field, NOT_IN_LIST);
                None
            }
        },
        _ => {
            errors.add(type_field, BLANK);
            None
        }
    };

    Some((number?, phone_type?))
}

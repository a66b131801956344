//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::NaiveDate;

use crate::domain::entities::{
    Contact, ContactAttrs, ContactId, ContactInput, Field, NewsRelease, NewsReleaseId, Phone,
    PhoneAttrs, PhoneId, PhoneType,
};

/// Create a test contact with a home and an office phone
pub fn test_contact_named(firstname: &str, lastname: &str) -> Contact {
    let id = ContactId::new();
    Contact {
        id,
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        email: Some(format!(
            "{}.{}@example.com",
            firstname.to_lowercase(),
            lastname.to_lowercase()
        )),
        phones: vec![
            test_phone(id, "555-0100", PhoneType::Home),
            test_phone(id, "555-0101", PhoneType::Office),
        ],
    }
}

/// Create a phone owned by the given contact
pub fn test_phone(contact_id: ContactId, number: &str, phone_type: PhoneType) -> Phone {
    Phone {
        id: PhoneId::new(),
        contact_id,
        number: number.to_string(),
        phone_type,
    }
}

/// Nested attributes for a new phone
pub fn phone_attrs(number: &str, phone_type: &str) -> PhoneAttrs {
    PhoneAttrs {
        id: None,
        number: Some(number.to_string()),
        phone_type: Some(phone_type.to_string()),
    }
}

/// A complete, valid create payload with three phones
pub fn valid_contact_input() -> ContactInput {
    ContactInput {
        contact: ContactAttrs {
            firstname: Field::from("Aaron"),
            lastname: Field::from("Sumner"),
            email: Field::from("aaron@example.com"),
        },
        phones: vec![
            phone_attrs("555-0100", "home"),
            phone_attrs("555-0101", "office"),
            phone_attrs("555-0102", "mobile"),
        ],
    }
}

/// A create payload missing the last name
pub fn invalid_contact_input() -> ContactInput {
    ContactInput {
        contact: ContactAttrs {
            firstname: Field::from("Aaron"),
            lastname: Field::Absent,
            email: Field::from("aaron@example.com"),
        },
        phones: vec![],
    }
}

/// Create a test news release released on the given date
pub fn test_news_release(title: &str, year: i32, month: u32, day: u32) -> NewsRelease {
    NewsRelease {
        id: NewsReleaseId::new(),
        title: title.to_string(),
        released_on: NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date"),
        body: "Lorem ipsum dolor sit amet.".to_string(),
    }
}

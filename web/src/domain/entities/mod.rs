//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod contact;
pub mod letter;
pub mod news_release;

pub use contact::{
    Contact, ContactAttrs, ContactId, ContactInput, ContactUpdate, Field, NewContact, Phone,
    PhoneAttrs, PhoneId, PhoneType,
};
pub use letter::FirstLetter;
pub use news_release::{NewNewsRelease, NewsRelease, NewsReleaseId, NewsReleaseInput};

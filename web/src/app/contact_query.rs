//! Alphabetical filtering for the contact listing

use crate::domain::entities::{Contact, FirstLetter};

/// Keep the contacts whose last name starts with `letter` (case-sensitive).
/// No letter means no filtering: the input is returned unchanged.
pub fn filter_by_letter(contacts: Vec<Contact>, letter: Option<FirstLetter>) -> Vec<Contact> {
    match letter {
        Some(letter) => contacts
            .into_iter()
            .filter(|c| letter.matches(&c.lastname))
            .collect(),
        None => contacts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_contact_named;

    fn lastnames(contacts: &[Contact]) -> Vec<&str> {
        contacts.iter().map(|c| c.lastname.as_str()).collect()
    }

    #[test]
    fn filter_keeps_matching_lastnames() {
        let contacts = vec![
            test_contact_named("John", "Smith"),
            test_contact_named("Jane", "Jones"),
            test_contact_named("Sam", "Sumner"),
        ];

        let filtered = filter_by_letter(contacts, Some(FirstLetter('S')));

        assert_eq!(lastnames(&filtered), vec!["Smith", "Sumner"]);
    }

    #[test]
    fn filter_ignores_firstname() {
        let contacts = vec![test_contact_named("Sam", "Jones")];

        let filtered = filter_by_letter(contacts, Some(FirstLetter('S')));

        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_is_case_sensitive() {
        let contacts = vec![
            test_contact_named("John", "smith"),
            test_contact_named("Jane", "Smith"),
        ];

        let filtered = filter_by_letter(contacts, Some(FirstLetter('s')));

        assert_eq!(lastnames(&filtered), vec!["smith"]);
    }

    #[test]
    fn no_letter_returns_input_unchanged() {
        let contacts = vec![
            test_contact_named("Jane", "Jones"),
            test_contact_named("John", "Smith"),
        ];
        let expected = contacts.clone();

        assert_eq!(filter_by_letter(contacts, None), expected);
    }

    #[test]
    fn filter_on_empty_input() {
        assert!(filter_by_letter(vec![], Some(FirstLetter('A'))).is_empty());
    }
}

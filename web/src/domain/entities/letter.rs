//! First-letter filter used by the contact listing

use serde::Serialize;

/// A single character that a contact's last name must start with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FirstLetter(pub char);

impl FirstLetter {
    /// Parse the raw `letter` query value. Absent or blank input means no
    /// filter; otherwise only the first character is significant.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim)
            .and_then(|s| s.chars().next())
            .map(FirstLetter)
    }

    /// Case-sensitive prefix match
    pub fn matches(&self, value: &str) -> bool {
        value.starts_with(self.0)
    }
}

impl std::fmt::Display for FirstLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

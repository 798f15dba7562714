//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Player identifier - newtype for type safety.
///
/// Opaque to the engine: the chat adapter supplies the platform's user id
/// as a string. The inner String is private to ensure all construction goes
/// through the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create a new `UserId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the user ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self::new(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_new_and_as_str() {
        let id = UserId::new("42");
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn user_id_from_numeric_platform_id() {
        let id = UserId::from(7_553_801_366_u64);
        assert_eq!(id.as_str(), "7553801366");
    }

    #[test]
    fn user_id_display() {
        let id = UserId::from("display-test");
        assert_eq!(format!("{id}"), "display-test");
    }
}

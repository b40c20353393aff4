use serde::{Deserialize, Serialize};
use std::fmt;

/// Required length of an ISDN, in characters
pub const ISDN_LENGTH: usize = 8;

/// ISDN value object identifying a book
///
/// # Invariants
/// - Exactly 8 characters long
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isdn(String);

impl Isdn {
    /// Creates a new Isdn value object
    ///
    /// # Returns
    /// * `Ok(Isdn)` - If the code has exactly 8 characters
    /// * `Err(String)` - Otherwise
    ///
    /// # Example
    /// ```
    /// use biblioteca_api::domain::book::Isdn;
    ///
    /// let isdn = Isdn::new("AB123456").expect("valid isdn");
    /// assert_eq!(isdn.as_str(), "AB123456");
    /// ```
    pub fn new(isdn: impl Into<String>) -> Result<Self, String> {
        let isdn = isdn.into();
        if Self::is_valid(&isdn) {
            Ok(Isdn(isdn))
        } else {
            Err(format!("Invalid ISDN: {}", isdn))
        }
    }

    fn is_valid(isdn: &str) -> bool {
        isdn.chars().count() == ISDN_LENGTH
    }

    /// Returns the ISDN as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Isdn {
    type Error = String;

    fn try_from(isdn: String) -> Result<Self, Self::Error> {
        Isdn::new(isdn)
    }
}

impl From<Isdn> for String {
    fn from(isdn: Isdn) -> Self {
        isdn.0
    }
}

impl fmt::Display for Isdn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

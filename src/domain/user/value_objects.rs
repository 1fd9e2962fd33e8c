use serde::{Deserialize, Serialize};
use std::fmt;

/// Email value object representing a syntactically valid address
///
/// # Invariants
/// - Surrounding whitespace is trimmed
/// - Exactly one '@' with a non-empty local part
/// - Domain contains a '.' that is neither its first nor last character
/// - No interior whitespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Example
    /// ```
    /// use agentput_admin::domain::user::Email;
    ///
    /// let email = Email::new("a@b.com").expect("valid email");
    /// assert_eq!(email.as_str(), "a@b.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into().trim().to_string();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }

    fn is_valid(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }
        let mut parts = email.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return false;
        };
        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// Password accepted by the registration form
///
/// Debug output is redacted so credentials never reach the logs.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Minimum number of characters accepted at registration
    pub const MIN_LENGTH: usize = 6;

    pub fn new(password: impl Into<String>) -> Result<Self, String> {
        let password = password.into();
        if password.is_empty() {
            return Err("Password is required".to_string());
        }
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(format!(
                "Password must be at least {} characters",
                Self::MIN_LENGTH
            ));
        }
        Ok(Password(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

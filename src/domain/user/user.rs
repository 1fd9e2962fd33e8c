use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{Email, Password};

/// Profile of the signed-in user as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, with = "crate::domain::time::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::domain::time::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub password: Password,
}

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: Email,
    pub password: String,
}

/// Token issued by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

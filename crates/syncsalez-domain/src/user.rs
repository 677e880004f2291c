//! User-facing auth DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::validate::{ValidationError, require_email, require_non_empty, require_password};

/// Public view of a user. Never carries the password or its hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub email: String,
    pub name: String,
}

/// `auth.register` payload.
#[derive(Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    #[serde(rename = "phonenumber")]
    pub phone_number: String,
    pub password: String,
}

impl RegisterUser {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_email("email", &self.email)?;
        require_non_empty("phonenumber", &self.phone_number)?;
        require_password("password", &self.password)
    }
}

impl fmt::Debug for RegisterUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `auth.login` payload.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_email("email", &self.email)?;
        require_password("password", &self.password)
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Signed session token handed back by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub access_token: String,
}

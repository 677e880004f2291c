use chrono::{DateTime, Utc};

use syncsalez_domain::id::UserId;
use syncsalez_domain::user::UserSummary;

/// bcrypt work factor for stored password hashes.
pub const BCRYPT_COST: u32 = 10;

/// A stored user row. `password_hash` never leaves the auth service.
#[derive(Clone)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub phone_number: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("phone_number", &self.phone_number)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

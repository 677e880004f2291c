//! Bearer headers for exercising the gateway auth gate.

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};

use syncsalez_auth_types::token::{issue_session_token, issue_session_token_expiring_at};
use syncsalez_domain::id::UserId;

/// Secret shared by test gateways and [`MockSession`].
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Identity to sign into test requests.
pub struct MockSession {
    pub user_id: UserId,
    pub email: String,
}

impl MockSession {
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }

    /// A fresh session for a random user.
    pub fn random() -> Self {
        Self::new(UserId::generate(), "tester@example.com")
    }

    /// `Authorization: Bearer <token>` signed with [`TEST_JWT_SECRET`].
    pub fn bearer(&self) -> (HeaderName, HeaderValue) {
        let (token, _) = issue_session_token(self.user_id, &self.email, TEST_JWT_SECRET)
            .expect("sign test session token");
        bearer_header(&token)
    }

    /// Same identity, but the token expired long ago.
    pub fn expired_bearer(&self) -> (HeaderName, HeaderValue) {
        let token =
            issue_session_token_expiring_at(self.user_id, &self.email, 1_000_000, TEST_JWT_SECRET)
                .expect("sign expired test token");
        bearer_header(&token)
    }

    /// Correct shape, wrong signing key.
    pub fn forged_bearer(&self) -> (HeaderName, HeaderValue) {
        let (token, _) = issue_session_token(self.user_id, &self.email, "not-the-gateway-secret")
            .expect("sign forged token");
        bearer_header(&token)
    }
}

pub fn bearer_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).expect("token is a valid header value"),
    )
}

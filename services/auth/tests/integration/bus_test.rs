use bytes::Bytes;
use serde_json::{Value, json};

use syncsalez_auth::handlers::bus::AuthBus;
use syncsalez_auth_types::token::validate_session_token;
use syncsalez_bus::local::LocalRelay;
use syncsalez_bus::relay::{Relay, RelayError, send};
use syncsalez_bus::subjects::{AUTH_LOGIN, AUTH_REGISTER, AUTH_SUBJECTS, STORE_CREATE};
use syncsalez_domain::user::{SessionToken, UserSummary};

use crate::helpers::{MockUserRepo, TEST_JWT_SECRET};

fn relay() -> LocalRelay {
    LocalRelay::new().mount(
        AUTH_SUBJECTS,
        AuthBus {
            repo: MockUserRepo::empty(),
            jwt_secret: TEST_JWT_SECRET.to_owned(),
        },
    )
}

fn register_body() -> Value {
    json!({
        "name": "Ann",
        "email": "a@x.com",
        "phonenumber": "0800",
        "password": "secret1",
    })
}

#[tokio::test]
async fn should_register_then_login_over_bus() {
    let relay = relay();

    let user: UserSummary = send(&relay, AUTH_REGISTER, &register_body()).await.unwrap();
    assert_eq!(user.email, "a@x.com");

    let token: SessionToken = send(
        &relay,
        AUTH_LOGIN,
        &json!({ "email": "a@x.com", "password": "secret1" }),
    )
    .await
    .unwrap();
    let identity = validate_session_token(&token.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(identity.user_id, user.id);
}

#[tokio::test]
async fn should_reply_conflict_on_second_registration() {
    let relay = relay();
    let _: UserSummary = send(&relay, AUTH_REGISTER, &register_body()).await.unwrap();

    let err = send::<_, UserSummary>(&relay, AUTH_REGISTER, &register_body())
        .await
        .unwrap_err();
    match err {
        RelayError::Remote(e) => {
            assert_eq!(e.kind, "EMAIL_TAKEN");
            assert_eq!(e.status, 500);
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn should_reply_unauthorized_on_bad_login() {
    let err = send::<_, SessionToken>(
        &relay(),
        AUTH_LOGIN,
        &json!({ "email": "a@x.com", "password": "secret1" }),
    )
    .await
    .unwrap_err();
    match err {
        RelayError::Remote(e) => {
            assert_eq!(e.kind, "INVALID_CREDENTIALS");
            assert_eq!(e.status, 401);
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn should_reply_invalid_payload_on_missing_field() {
    let err = send::<_, UserSummary>(&relay(), AUTH_REGISTER, &json!({ "email": "a@x.com" }))
        .await
        .unwrap_err();
    match err {
        RelayError::Remote(e) => {
            assert_eq!(e.kind, "INVALID_PAYLOAD");
            assert_eq!(e.status, 400);
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn should_reply_unknown_subject_for_foreign_subject() {
    let handler = AuthBus {
        repo: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let relay = LocalRelay::new().mount(&[STORE_CREATE], handler);

    let raw = relay
        .request(STORE_CREATE, Bytes::from_static(b"{}"))
        .await
        .unwrap();
    let reply: Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(reply["err"]["kind"], "UNKNOWN_SUBJECT");
    assert_eq!(reply["err"]["status"], 404);
}

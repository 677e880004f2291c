use axum::http::StatusCode;
use serde_json::Value;

use syncsalez_bus::subjects::{STORE_CREATE, STORE_VERIFY};
use syncsalez_domain::store::StoreSummary;
use syncsalez_testing::auth::{MockSession, bearer_header};
use syncsalez_testing::relay::StubRelay;

use crate::helpers::{canned_store, server_with, store_body};

fn relay() -> StubRelay {
    StubRelay::new()
        .reply_ok(STORE_CREATE, canned_store(false))
        .reply_ok(STORE_VERIFY, canned_store(true))
}

#[tokio::test]
async fn should_reject_missing_token_before_relaying() {
    let relay = relay();
    let server = server_with(relay.clone());

    let resp = server.post("/stores/create-store").json(&store_body()).await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json();
    assert_eq!(body["statusCode"], 401);
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(body["message"], "Invalid or missing token");
    assert!(relay.calls().is_empty());
}

#[tokio::test]
async fn should_reject_expired_token() {
    let relay = relay();
    let server = server_with(relay.clone());
    let (name, value) = MockSession::random().expired_bearer();

    let resp = server
        .post("/stores/create-store")
        .add_header(name, value)
        .json(&store_body())
        .await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json::<Value>()["message"], "Token expired");
    assert!(relay.calls().is_empty());
}

#[tokio::test]
async fn should_reject_token_signed_with_other_key() {
    let relay = relay();
    let server = server_with(relay.clone());
    let (name, value) = MockSession::random().forged_bearer();

    let resp = server
        .post("/stores/create-store")
        .add_header(name, value)
        .json(&store_body())
        .await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert!(relay.calls().is_empty());
}

#[tokio::test]
async fn should_reject_garbage_bearer_on_verify() {
    let relay = relay();
    let server = server_with(relay.clone());
    let (name, value) = bearer_header("not-a-jwt");

    let resp = server
        .post(&format!("/stores/{}/verify", canned_store(false).id))
        .add_header(name, value)
        .await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert!(relay.calls().is_empty());
}

#[tokio::test]
async fn should_relay_session_subject_as_creator() {
    let relay = relay();
    let server = server_with(relay.clone());
    let session = MockSession::random();
    let (name, value) = session.bearer();

    let resp = server
        .post("/stores/create-store")
        .add_header(name, value)
        .json(&store_body())
        .await;

    assert_eq!(resp.status_code(), StatusCode::CREATED);
    let store: StoreSummary = resp.json();
    assert!(!store.is_verified);

    let calls = relay.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].subject, STORE_CREATE);
    assert_eq!(calls[0].payload["userId"], session.user_id.to_string());
    assert_eq!(calls[0].payload["createStoreDto"]["businessName"], "Ann's Shop");
}

#[tokio::test]
async fn should_ignore_user_id_smuggled_in_body() {
    let relay = relay();
    let server = server_with(relay.clone());
    let session = MockSession::random();
    let (name, value) = session.bearer();
    let mut body = store_body();
    body["userId"] = Value::from("00000000-0000-0000-0000-000000000000");

    server
        .post("/stores/create-store")
        .add_header(name, value)
        .json(&body)
        .await;

    assert_eq!(
        relay.calls()[0].payload["userId"],
        session.user_id.to_string()
    );
}

#[tokio::test]
async fn should_leave_public_routes_ungated() {
    let server = server_with(relay());
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

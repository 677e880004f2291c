use axum::http::StatusCode;
use serde_json::{Value, json};

use syncsalez_domain::user::UserSummary;

use crate::helpers::{InMemoryUsers, directory_server, server_with};

fn bob() -> Value {
    json!({
        "name": "Bob",
        "email": "bob@x.com",
        "phonenumber": "0800",
        "password": "hunter22",
    })
}

#[tokio::test]
async fn should_create_then_find_user() {
    let users = InMemoryUsers::default();
    let server = directory_server(users.clone());

    let created = server.post("/auth/create-user").json(&bob()).await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let created: UserSummary = created.json();

    let found = server.get("/auth/find-user-by-email/bob@x.com").await;
    assert_eq!(found.status_code(), StatusCode::OK);
    assert_eq!(found.json::<UserSummary>(), created);

    let stored = users.users.lock().unwrap();
    assert_ne!(stored[0].password_hash, "hunter22");
}

#[tokio::test]
async fn should_never_echo_password() {
    let server = directory_server(InMemoryUsers::default());
    let body: Value = server.post("/auth/create-user").json(&bob()).await.json();
    assert!(body.get("password").is_none());
    assert!(!body.to_string().contains("hunter22"));
}

#[tokio::test]
async fn should_report_unknown_email_as_404() {
    let server = directory_server(InMemoryUsers::default());

    let resp = server.get("/auth/find-user-by-email/nobody@x.com").await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["message"], "User not found");
}

#[tokio::test]
async fn should_report_duplicate_email_as_500() {
    let server = directory_server(InMemoryUsers::default());
    server.post("/auth/create-user").json(&bob()).await;

    let resp = server.post("/auth/create-user").json(&bob()).await;

    assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.json::<Value>()["message"], "Email already registered");
}

#[tokio::test]
async fn should_reject_short_password() {
    let server = directory_server(InMemoryUsers::default());
    let mut body = bob();
    body["password"] = Value::from("abc");

    let resp = server.post("/auth/create-user").json(&body).await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json::<Value>()["message"],
        "password must be longer than or equal to 6 characters"
    );
}

#[tokio::test]
async fn should_not_mount_directory_without_database() {
    let server = server_with(syncsalez_testing::relay::StubRelay::new());
    let resp = server.get("/auth/find-user-by-email/bob@x.com").await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
}

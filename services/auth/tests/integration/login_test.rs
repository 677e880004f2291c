use syncsalez_auth::error::AuthServiceError;
use syncsalez_auth::usecase::session::LoginUseCase;
use syncsalez_auth::usecase::user::RegisterUseCase;
use syncsalez_auth_types::token::{SESSION_TOKEN_TTL_SECS, validate_session_token};

use crate::helpers::{MockUserRepo, TEST_JWT_SECRET, ann, ann_login, stored_user};

fn login(repo: MockUserRepo) -> LoginUseCase<MockUserRepo> {
    LoginUseCase {
        repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

#[tokio::test]
async fn should_issue_token_carrying_user_id_and_email() {
    let repo = MockUserRepo::empty();
    let registered = RegisterUseCase { repo: repo.clone() }
        .execute(ann())
        .await
        .unwrap();

    let token = login(repo).execute(ann_login("secret1")).await.unwrap();

    let identity = validate_session_token(&token.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(identity.user_id, registered.id);
    assert_eq!(identity.email, "a@x.com");
}

#[tokio::test]
async fn should_expire_token_after_a_year() {
    let repo = MockUserRepo::empty();
    repo.users
        .lock()
        .unwrap()
        .push(stored_user("a@x.com", "secret1"));

    let token = login(repo).execute(ann_login("secret1")).await.unwrap();

    let identity = validate_session_token(&token.access_token, TEST_JWT_SECRET).unwrap();
    let now = chrono::Utc::now().timestamp() as u64;
    assert!(identity.exp > now + SESSION_TOKEN_TTL_SECS - 60);
    assert!(identity.exp <= now + SESSION_TOKEN_TTL_SECS + 1);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let repo = MockUserRepo::empty();
    repo.users
        .lock()
        .unwrap()
        .push(stored_user("a@x.com", "secret1"));

    let result = login(repo).execute(ann_login("wrongpass")).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_not_distinguish_unknown_email_from_wrong_password() {
    let repo = MockUserRepo::empty();
    repo.users
        .lock()
        .unwrap()
        .push(stored_user("a@x.com", "secret1"));

    let wrong_password = login(repo.clone())
        .execute(ann_login("wrongpass"))
        .await
        .unwrap_err();
    let mut unknown = ann_login("secret1");
    unknown.email = "nobody@x.com".into();
    let unknown_email = login(repo).execute(unknown).await.unwrap_err();

    assert_eq!(wrong_password.kind(), unknown_email.kind());
    assert_eq!(wrong_password.status(), unknown_email.status());
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn should_reject_malformed_login_payload() {
    let mut input = ann_login("secret1");
    input.email = "a-at-x".into();
    let result = login(MockUserRepo::empty()).execute(input).await;
    assert!(matches!(result, Err(AuthServiceError::Validation(_))));
}

use syncsalez_auth::error::AuthServiceError;
use syncsalez_auth::infra::password::verify_password;
use syncsalez_auth::usecase::user::{FindUserByEmailUseCase, RegisterUseCase};
use syncsalez_domain::user::RegisterUser;

use crate::helpers::{FailingUserRepo, MockUserRepo, ann};

// ── RegisterUseCase ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_and_return_summary_without_password() {
    let repo = MockUserRepo::empty();
    let usecase = RegisterUseCase { repo: repo.clone() };

    let summary = usecase.execute(ann()).await.unwrap();

    assert_eq!(summary.email, "a@x.com");
    assert_eq!(summary.name, "Ann");
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 3);
    assert!(json.get("password").is_none());

    let stored = repo.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, summary.id);
    assert_eq!(stored[0].phone_number, "0800");
}

#[tokio::test]
async fn should_store_bcrypt_hash_not_plaintext() {
    let repo = MockUserRepo::empty();
    RegisterUseCase { repo: repo.clone() }
        .execute(ann())
        .await
        .unwrap();

    let hash = repo.stored()[0].password_hash.clone();
    assert_ne!(hash, "secret1");
    assert!(hash.starts_with("$2"));
    assert!(verify_password("secret1".into(), hash).await.unwrap());
}

#[tokio::test]
async fn should_reject_short_password_without_storing() {
    let repo = MockUserRepo::empty();
    let input = RegisterUser {
        password: "abc".into(),
        ..ann()
    };

    let result = RegisterUseCase { repo: repo.clone() }.execute(input).await;

    match result {
        Err(AuthServiceError::Validation(e)) => assert_eq!(e.field, "password"),
        other => panic!("expected Validation, got {other:?}"),
    }
    assert!(repo.stored().is_empty());
}

#[tokio::test]
async fn should_reject_malformed_email() {
    let input = RegisterUser {
        email: "not-an-email".into(),
        ..ann()
    };
    let result = RegisterUseCase {
        repo: MockUserRepo::empty(),
    }
    .execute(input)
    .await;
    assert!(matches!(result, Err(AuthServiceError::Validation(_))));
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let repo = MockUserRepo::empty();
    let usecase = RegisterUseCase { repo: repo.clone() };
    usecase.execute(ann()).await.unwrap();

    let second = RegisterUser {
        name: "Other Ann".into(),
        ..ann()
    };
    let result = usecase.execute(second).await;

    assert!(
        matches!(result, Err(AuthServiceError::EmailTaken)),
        "expected EmailTaken, got {result:?}"
    );
    assert_eq!(repo.stored().len(), 1);
}

#[tokio::test]
async fn should_surface_storage_failure_as_internal() {
    let result = RegisterUseCase {
        repo: FailingUserRepo,
    }
    .execute(ann())
    .await;
    assert!(matches!(result, Err(AuthServiceError::Internal(_))));
}

// ── FindUserByEmailUseCase ───────────────────────────────────────────────────

#[tokio::test]
async fn should_find_registered_user_by_email() {
    let repo = MockUserRepo::empty();
    let registered = RegisterUseCase { repo: repo.clone() }
        .execute(ann())
        .await
        .unwrap();

    let found = FindUserByEmailUseCase { repo }
        .execute("a@x.com")
        .await
        .unwrap();
    assert_eq!(found, registered);
}

#[tokio::test]
async fn should_report_unknown_email_as_not_found() {
    let result = FindUserByEmailUseCase {
        repo: MockUserRepo::empty(),
    }
    .execute("nobody@x.com")
    .await;
    assert!(matches!(result, Err(AuthServiceError::UserNotFound)));
}

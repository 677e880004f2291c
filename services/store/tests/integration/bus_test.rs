use serde_json::json;

use syncsalez_bus::local::LocalRelay;
use syncsalez_bus::messages::VerifyStoreRequest;
use syncsalez_bus::relay::{RelayError, send};
use syncsalez_bus::subjects::{STORE_CREATE, STORE_SUBJECTS, STORE_VERIFY};
use syncsalez_domain::id::{StoreId, UserId};
use syncsalez_domain::store::StoreSummary;
use syncsalez_store::handlers::bus::StoreBus;

use crate::helpers::{MockStoreRepo, create_request};

fn relay(repo: MockStoreRepo) -> LocalRelay {
    LocalRelay::new().mount(STORE_SUBJECTS, StoreBus { repo })
}

#[tokio::test]
async fn should_create_then_verify_over_bus() {
    let repo = MockStoreRepo::empty();
    let relay = relay(repo.clone());

    let created: StoreSummary = send(&relay, STORE_CREATE, &create_request(UserId::generate()))
        .await
        .unwrap();
    assert!(!created.is_verified);

    let verified: StoreSummary = send(&relay, STORE_VERIFY, &VerifyStoreRequest { id: created.id })
        .await
        .unwrap();
    assert!(verified.is_verified);
    assert_eq!(verified.id, created.id);
    assert_eq!(repo.tables.lock().unwrap().permissions.len(), 6);
}

#[tokio::test]
async fn should_accept_camel_case_wire_payload() {
    let payload = json!({
        "createStoreDto": {
            "businessName": "Ann's Shop",
            "businessType": "SERVICE",
            "businessEmail": "shop@x.com",
            "logo": "https://cdn.x.com/logo.png"
        },
        "userId": UserId::generate(),
    });
    let created: StoreSummary = send(&relay(MockStoreRepo::empty()), STORE_CREATE, &payload)
        .await
        .unwrap();
    assert_eq!(created.logo.as_deref(), Some("https://cdn.x.com/logo.png"));
}

#[tokio::test]
async fn should_reply_not_found_for_unknown_store() {
    let err = send::<_, StoreSummary>(
        &relay(MockStoreRepo::empty()),
        STORE_VERIFY,
        &VerifyStoreRequest {
            id: StoreId::generate(),
        },
    )
    .await
    .unwrap_err();
    match err {
        RelayError::Remote(e) => {
            assert_eq!(e.kind, "STORE_NOT_FOUND");
            assert_eq!(e.status, 404);
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn should_reply_invalid_payload_for_non_uuid_id() {
    let err = send::<_, StoreSummary>(
        &relay(MockStoreRepo::empty()),
        STORE_VERIFY,
        &json!({ "id": "42" }),
    )
    .await
    .unwrap_err();
    match err {
        RelayError::Remote(e) => assert_eq!(e.kind, "INVALID_PAYLOAD"),
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn should_reply_provisioning_failed_as_500() {
    let err = send::<_, StoreSummary>(
        &relay(MockStoreRepo::failing()),
        STORE_CREATE,
        &create_request(UserId::generate()),
    )
    .await
    .unwrap_err();
    match err {
        RelayError::Remote(e) => {
            assert_eq!(e.kind, "PROVISIONING_FAILED");
            assert_eq!(e.status, 500);
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

use std::collections::HashSet;

use syncsalez_domain::id::UserId;
use syncsalez_domain::store::{ADMIN_ROLE, CreateStore, PermissionName};
use syncsalez_store::error::StoreServiceError;
use syncsalez_store::usecase::store::CreateStoreUseCase;

use crate::helpers::{MockStoreRepo, anns_shop, create_request};

#[tokio::test]
async fn should_create_unverified_store() {
    let repo = MockStoreRepo::empty();
    let store = CreateStoreUseCase { repo: repo.clone() }
        .execute(create_request(UserId::generate()))
        .await
        .unwrap();

    assert!(!store.is_verified);
    assert_eq!(store.business_name, "Ann's Shop");
    assert_eq!(store.business_email, "shop@x.com");
    assert_eq!(repo.tables.lock().unwrap().stores.len(), 1);
}

#[tokio::test]
async fn should_provision_single_admin_role_and_membership() {
    let repo = MockStoreRepo::empty();
    let creator = UserId::generate();
    let store = CreateStoreUseCase { repo: repo.clone() }
        .execute(create_request(creator))
        .await
        .unwrap();

    let tables = repo.tables.lock().unwrap();
    assert_eq!(tables.roles.len(), 1);
    let role = &tables.roles[0];
    assert_eq!(role.name, ADMIN_ROLE);
    assert_eq!(role.store_id, store.id);

    assert_eq!(tables.store_users.len(), 1);
    let member = &tables.store_users[0];
    assert_eq!(member.user_id, creator);
    assert_eq!(member.store_id, store.id);
    assert_eq!(member.role_id, role.id);
}

#[tokio::test]
async fn should_grant_all_six_permissions_to_admin() {
    let repo = MockStoreRepo::empty();
    CreateStoreUseCase { repo: repo.clone() }
        .execute(create_request(UserId::generate()))
        .await
        .unwrap();

    let tables = repo.tables.lock().unwrap();
    let role_id = tables.roles[0].id;
    assert_eq!(tables.permissions.len(), 6);
    assert!(tables.permissions.iter().all(|p| p.role_id == role_id && p.value));

    let names: HashSet<PermissionName> = tables.permissions.iter().map(|p| p.name).collect();
    assert_eq!(names, HashSet::from(PermissionName::ALL));
}

#[tokio::test]
async fn should_give_each_store_its_own_role() {
    let repo = MockStoreRepo::empty();
    let usecase = CreateStoreUseCase { repo: repo.clone() };
    let creator = UserId::generate();
    let first = usecase.execute(create_request(creator)).await.unwrap();
    let second = usecase.execute(create_request(creator)).await.unwrap();

    assert_ne!(first.id, second.id);
    let tables = repo.tables.lock().unwrap();
    assert_eq!(tables.roles.len(), 2);
    assert_ne!(tables.roles[0].id, tables.roles[1].id);
    assert_eq!(tables.permissions.len(), 12);
}

#[tokio::test]
async fn should_reject_empty_business_name_before_writing() {
    let repo = MockStoreRepo::empty();
    let mut request = create_request(UserId::generate());
    request.create_store_dto = CreateStore {
        business_name: String::new(),
        ..anns_shop()
    };

    let result = CreateStoreUseCase { repo: repo.clone() }
        .execute(request)
        .await;

    match result {
        Err(StoreServiceError::Validation(e)) => assert_eq!(e.field, "businessName"),
        other => panic!("expected Validation, got {other:?}"),
    }
    assert!(repo.tables.lock().unwrap().stores.is_empty());
}

#[tokio::test]
async fn should_reject_malformed_business_email() {
    let mut request = create_request(UserId::generate());
    request.create_store_dto.business_email = "shop".into();

    let result = CreateStoreUseCase {
        repo: MockStoreRepo::empty(),
    }
    .execute(request)
    .await;
    assert!(matches!(result, Err(StoreServiceError::Validation(_))));
}

#[tokio::test]
async fn should_report_provisioning_failure_and_leave_no_rows() {
    let repo = MockStoreRepo::failing();
    let result = CreateStoreUseCase { repo: repo.clone() }
        .execute(create_request(UserId::generate()))
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.kind(), "PROVISIONING_FAILED");
    assert_eq!(err.status().as_u16(), 500);
    let tables = repo.tables.lock().unwrap();
    assert!(tables.stores.is_empty() && tables.roles.is_empty());
}

use syncsalez_bus::messages::CreateStoreRequest;
use syncsalez_domain::id::StoreId;
use syncsalez_domain::store::StoreSummary;

use crate::domain::repository::StoreRepository;
use crate::domain::types::Provisioning;
use crate::error::StoreServiceError;

// ── CreateStore ──────────────────────────────────────────────────────────────

pub struct CreateStoreUseCase<R: StoreRepository> {
    pub repo: R,
}

impl<R: StoreRepository> CreateStoreUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateStoreRequest,
    ) -> Result<StoreSummary, StoreServiceError> {
        input.create_store_dto.validate()?;
        let plan = Provisioning::admin_store(input.create_store_dto, input.user_id);
        self.repo.provision(&plan).await?;
        tracing::info!(
            store_id = %plan.store.id,
            user_id = %input.user_id,
            "store provisioned"
        );
        Ok(plan.store.summary())
    }
}

// ── VerifyStore ──────────────────────────────────────────────────────────────

pub struct VerifyStoreUseCase<R: StoreRepository> {
    pub repo: R,
}

impl<R: StoreRepository> VerifyStoreUseCase<R> {
    /// Idempotent: verifying an already-verified store returns it unchanged.
    pub async fn execute(&self, id: StoreId) -> Result<StoreSummary, StoreServiceError> {
        let store = self
            .repo
            .mark_verified(id)
            .await?
            .ok_or(StoreServiceError::StoreNotFound)?;
        tracing::info!(store_id = %store.id, "store verified");
        Ok(store.summary())
    }
}

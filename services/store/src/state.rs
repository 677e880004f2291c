use sea_orm::DatabaseConnection;

use crate::handlers::bus::StoreBus;
use crate::infra::db::DbStoreRepository;

/// Shared service state.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn store_repo(&self) -> DbStoreRepository {
        DbStoreRepository {
            db: self.db.clone(),
        }
    }

    pub fn bus_handler(&self) -> StoreBus<DbStoreRepository> {
        StoreBus {
            repo: self.store_repo(),
        }
    }
}

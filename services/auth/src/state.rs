use sea_orm::DatabaseConnection;

#[cfg(feature = "session")]
use crate::handlers::bus::AuthBus;
use crate::infra::db::DbUserRepository;

/// Shared service state.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    #[cfg(feature = "session")]
    pub fn bus_handler(&self) -> AuthBus<DbUserRepository> {
        AuthBus {
            repo: self.user_repo(),
            jwt_secret: self.jwt_secret.clone(),
        }
    }
}

use sea_orm_migration::prelude::*;

mod m20250120_000001_create_stores;
mod m20250120_000002_create_roles;
mod m20250120_000003_create_store_users;
mod m20250120_000004_create_permissions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250120_000001_create_stores::Migration),
            Box::new(m20250120_000002_create_roles::Migration),
            Box::new(m20250120_000003_create_store_users::Migration),
            Box::new(m20250120_000004_create_permissions::Migration),
        ]
    }
}

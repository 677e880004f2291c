use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoreUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StoreUsers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StoreUsers::UserId).uuid().not_null())
                    .col(ColumnDef::new(StoreUsers::StoreId).uuid().not_null())
                    .col(ColumnDef::new(StoreUsers::RoleId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(StoreUsers::Table, StoreUsers::StoreId)
                            .to(Stores::Table, Stores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StoreUsers::Table, StoreUsers::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(StoreUsers::Table)
                    .col(StoreUsers::UserId)
                    .name("idx_store_users_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoreUsers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StoreUsers {
    Table,
    Id,
    UserId,
    StoreId,
    RoleId,
}

#[derive(Iden)]
enum Stores {
    Table,
    Id,
}

#[derive(Iden)]
enum Roles {
    Table,
    Id,
}

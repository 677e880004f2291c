use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stores::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Stores::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Stores::BusinessName).string().not_null())
                    .col(ColumnDef::new(Stores::BusinessType).string().not_null())
                    .col(ColumnDef::new(Stores::PhoneNumber).string().null())
                    .col(ColumnDef::new(Stores::BusinessEmail).string().not_null())
                    .col(ColumnDef::new(Stores::BusinessLocation).string().null())
                    .col(ColumnDef::new(Stores::Logo).string().null())
                    .col(
                        ColumnDef::new(Stores::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Stores::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stores::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Stores {
    Table,
    Id,
    BusinessName,
    BusinessType,
    PhoneNumber,
    BusinessEmail,
    BusinessLocation,
    Logo,
    IsVerified,
    CreatedAt,
}

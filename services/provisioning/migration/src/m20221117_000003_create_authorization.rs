use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authorization::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Authorization::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Authorization::RoleId).integer().not_null())
                    .col(ColumnDef::new(Authorization::UserId).integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authorization::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Authorization {
    #[iden = "Authorization"]
    Table,
    #[iden = "Id"]
    Id,
    #[iden = "RoleId"]
    RoleId,
    #[iden = "UserId"]
    UserId,
}

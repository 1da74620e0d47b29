use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessKey::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessKey::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AccessKey::DisplayName).text().not_null())
                    .col(ColumnDef::new(AccessKey::Type).text().null())
                    .col(ColumnDef::new(AccessKey::IsActive).boolean().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessKey::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AccessKey {
    #[iden = "AccessKey"]
    Table,
    #[iden = "Id"]
    Id,
    #[iden = "DisplayName"]
    DisplayName,
    #[iden = "Type"]
    Type,
    #[iden = "IsActive"]
    IsActive,
}

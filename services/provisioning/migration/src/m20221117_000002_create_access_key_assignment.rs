use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessKeyAssignment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessKeyAssignment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AccessKeyAssignment::AccessKeyId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccessKeyAssignment::UserId)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessKeyAssignment::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AccessKeyAssignment {
    #[iden = "AccessKeyAssignment"]
    Table,
    #[iden = "Id"]
    Id,
    #[iden = "AccessKeyId"]
    AccessKeyId,
    #[iden = "UserId"]
    UserId,
}

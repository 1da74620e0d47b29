use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Looked up by value, but uniqueness is left to the caller.
                    .col(ColumnDef::new(User::EmployeeId).text().not_null())
                    .col(ColumnDef::new(User::FirstName).text().not_null())
                    .col(ColumnDef::new(User::LastName).text().not_null())
                    .col(ColumnDef::new(User::Email).text().not_null())
                    .col(ColumnDef::new(User::Active).boolean().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum User {
    #[iden = "User"]
    Table,
    #[iden = "Id"]
    Id,
    #[iden = "EmployeeId"]
    EmployeeId,
    #[iden = "FirstName"]
    FirstName,
    #[iden = "LastName"]
    LastName,
    #[iden = "Email"]
    Email,
    #[iden = "Active"]
    Active,
}

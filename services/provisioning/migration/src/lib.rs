use sea_orm_migration::prelude::*;

mod m20221117_000001_create_access_key;
mod m20221117_000002_create_access_key_assignment;
mod m20221117_000003_create_authorization;
mod m20221117_000004_create_role;
mod m20221117_000005_create_user;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20221117_000001_create_access_key::Migration),
            Box::new(m20221117_000002_create_access_key_assignment::Migration),
            Box::new(m20221117_000003_create_authorization::Migration),
            Box::new(m20221117_000004_create_role::Migration),
            Box::new(m20221117_000005_create_user::Migration),
        ]
    }
}

use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use provisioning::config::ProvisioningConfig;
use provisioning::router::build_router;
use provisioning::state::AppState;
use provisioning_core::tracing::init_tracing;
use provisioning_migration::Migrator;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ProvisioningConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to apply migrations");
        info!("database schema up to date");
    }

    let router = build_router(AppState { db });
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("provisioning service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}

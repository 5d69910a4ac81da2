use std::sync::Arc;

use booking_server::{
    config::AppConfig,
    repository::Repository,
    services::{codes::CodeStore, Services},
    AppState,
};
use sqlx::postgres::PgPoolOptions;

fn database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| AppConfig::default().database.url)
}

/// State over a pool that never connects unless a handler reaches the store
pub fn lazy_state() -> AppState {
    let config = AppConfig::default();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("Failed to build lazy pool");
    let codes = CodeStore::open(&config.redis.url).expect("Failed to build Redis client");
    let services = Services::new(Repository::new(pool), &config, codes);

    AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    }
}

/// Repository over a migrated test database
pub async fn repository() -> Repository {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url())
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Repository::new(pool)
}

/// Short token that keeps rows of one test apart from everything else
pub fn unique_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    sqlite_booking_repo::SqliteBookingRepo, sqlite_field_repo::SqliteFieldRepo,
    sqlite_membership_repo::SqliteMembershipRepo, sqlite_user_repo::SqliteUserRepo,
    sqlite_venue_repo::SqliteVenueRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_migrations(&pool).await;

    let auth_service = Arc::new(AuthService::new(config));

    AppState {
        config: config.clone(),
        user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        venue_repo: Arc::new(SqliteVenueRepo::new(pool.clone())),
        field_repo: Arc::new(SqliteFieldRepo::new(pool.clone())),
        booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
        membership_repo: Arc::new(SqliteMembershipRepo::new(pool.clone())),
        auth_service,
    }
}

async fn run_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");
}

#![allow(dead_code)]

use fieldbook::{
    api::router::create_router,
    config::Config,
    domain::services::auth_service::AuthService,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo, sqlite_field_repo::SqliteFieldRepo,
        sqlite_membership_repo::SqliteMembershipRepo, sqlite_user_repo::SqliteUserRepo,
        sqlite_venue_repo::SqliteVenueRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "secret-pass-123";

pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: "test-secret".to_string(),
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            venue_repo: Arc::new(SqliteVenueRepo::new(pool.clone())),
            field_repo: Arc::new(SqliteFieldRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            membership_repo: Arc::new(SqliteMembershipRepo::new(pool.clone())),
            auth_service: Arc::new(AuthService::new(&config)),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn api(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };

        self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    pub async fn register(&self, name: &str, email: &str, role: &str) -> Value {
        let response = self.api("POST", "/api/v1/register", None, Some(json!({
            "name": name,
            "email": email,
            "password": TEST_PASSWORD,
            "password_confirmation": TEST_PASSWORD,
            "role": role,
        }))).await;

        if !response.status().is_success() {
            panic!("Register failed in test helper: status {}", response.status());
        }

        parse_body(response).await
    }

    pub async fn login(&self, email: &str) -> String {
        let response = self.api("POST", "/api/v1/login", None, Some(json!({
            "email": email,
            "password": TEST_PASSWORD,
        }))).await;

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let body = parse_body(response).await;
        body["data"]["token"].as_str().expect("No token in login body").to_string()
    }

    /// Registers a fresh account and returns its bearer token.
    pub async fn signup(&self, name: &str, email: &str, role: &str) -> String {
        self.register(name, email, role).await;
        self.login(email).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

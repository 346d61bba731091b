mod models;
mod service;
mod config;
mod dtos;
mod error;
mod db;
mod utils;
mod handler;
mod routes;

use std::{net::SocketAddr, sync::Arc};

use axum::http::{header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE}, HeaderValue, Method};
use config::{Config, DEFAULT_SECRET_KEY};
use crate::db::{
    db::DBClient,
    leveldb::LevelExt,
    productdb::ProductExt,
    userdb::UserExt,
    CatalogStore,
};
use dotenv::dotenv;
use routes::create_router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::filter::LevelFilter;

use service::{
    catalog_service::CatalogService,
    onboarding_service::OnboardingService,
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub onboarding_service: Arc<OnboardingService<dyn UserExt>>,
    pub catalog_service: Arc<CatalogService<dyn CatalogStore>>,
}

impl AppState {
    pub fn new(db_client: DBClient) -> Self {
        Self::with_store(Arc::new(db_client))
    }

    /// Wires every service to one store; tests pass an in-memory one.
    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: UserExt + ProductExt + LevelExt + 'static,
    {
        let users: Arc<dyn UserExt> = store.clone();
        let catalog: Arc<dyn CatalogStore> = store;

        Self {
            onboarding_service: Arc::new(OnboardingService::new(users)),
            catalog_service: Arc::new(CatalogService::new(catalog)),
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received, draining connections");
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let max_level = std::env::var("RUST_LOG_LEVEL")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::DEBUG);

    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .init();

    let config = match Config::init() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("🔥 Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let pool = match PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await
    {
        Ok(pool) => {
            tracing::info!("✅ Connection to the database is successful!");
            pool
        }
        Err(err) => {
            tracing::error!("🔥 Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    if config.secret_key == DEFAULT_SECRET_KEY {
        tracing::warn!("SECRET_KEY is not set; using the development default");
    }

    let db_client = DBClient::new(pool);

    if config.run_migrations {
        if let Err(err) = db_client.run_migrations().await {
            tracing::error!("🔥 Failed to run migrations: {}", err);
            std::process::exit(1);
        }
        tracing::info!("✅ Migrations are up to date");
    }

    let allowed_origins: Vec<HeaderValue> = config.allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST]);

    let app_state = Arc::new(AppState::new(db_client));

    let app = create_router(app_state).layer(cors);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", &config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("🔥 Failed to bind port {}: {}", config.port, err);
            std::process::exit(1);
        }
    };

    tracing::info!("🚀 Server is running on http://localhost:{}", config.port);

    if let Err(err) = axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("🔥 Server error: {}", err);
        std::process::exit(1);
    }
}

use std::sync::Arc;

use axum::{response::Html, routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{auth::auth_handler, levels::level_handler, products::product_handler},
    AppState,
};

async fn index() -> Html<&'static str> {
    Html("<h1>Indoinvsta backend API is up. User module ready.</h1>")
}

// Health check handler
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .merge(auth_handler())
        .merge(product_handler())
        .merge(level_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .merge(api_route)
}

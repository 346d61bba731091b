use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Extension, Json, Router};

use crate::{
    dtos::productdtos::{LevelFilterDto, LevelListResponseDto},
    error::HttpError,
    AppState,
};

pub fn level_handler() -> Router {
    Router::new().route("/levels", get(get_levels))
}

pub async fn get_levels(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let levels = app_state.catalog_service
        .list_levels()
        .await?;

    Ok(Json(LevelListResponseDto {
        levels: levels.iter().map(LevelFilterDto::filter_level).collect(),
    }))
}

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    dtos::{
        productdtos::{CreateProductDto, ProductFilterDto, ProductListResponseDto},
        userdtos::Response,
    },
    error::HttpError,
    models::productmodel::NewProduct,
    AppState,
};

pub fn product_handler() -> Router {
    Router::new()
        .route("/products", get(get_active_products).post(create_product))
}

// TODO: gate behind an admin credential once one exists; today any caller may publish.
pub async fn create_product(
    Extension(app_state): Extension<Arc<AppState>>,
    payload: Result<Json<CreateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Json(body) = payload?;

    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let new_product = NewProduct::try_from(body)?;

    let product = app_state.catalog_service
        .create_product(new_product)
        .await?;

    let response = Response {
        status: "success",
        message: format!("Product '{}' created successfully", product.product_name),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_active_products(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let products = app_state.catalog_service
        .list_active_products()
        .await?;

    Ok(Json(ProductListResponseDto {
        products: ProductFilterDto::filter_products(&products),
    }))
}

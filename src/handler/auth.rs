use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    dtos::userdtos::{RegisterResponseDto, RegisterUserDto, Response, VerifyOtpDto},
    error::{ErrorMessage, HttpError},
    service::onboarding_service::{Registration, VerificationOutcome},
    utils::client_ip::client_ip,
    AppState,
};

pub fn auth_handler() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/verify", post(verify_otp))
}

pub async fn register(
    Extension(app_state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    payload: Result<Json<RegisterUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Json(body) = payload?;

    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let phone_number = body.phone_number
        .ok_or_else(|| HttpError::bad_request(ErrorMessage::PhoneNumberRequired.to_string()))?;

    let registration = Registration {
        phone_number,
        referred_by_code: body.referral_code,
        ip_address: client_ip(&headers, connect_info.map(|ConnectInfo(addr)| addr)),
    };

    let issued = app_state.onboarding_service
        .register(registration, Utc::now())
        .await?;

    // The OTP would be sent by SMS here; it is echoed back for testing instead.
    let response = RegisterResponseDto {
        status: "success".to_string(),
        message: "Registration successful. Please verify the OTP.".to_string(),
        otp_for_testing: issued.otp,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn verify_otp(
    Extension(app_state): Extension<Arc<AppState>>,
    payload: Result<Json<VerifyOtpDto>, JsonRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Json(body) = payload?;

    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let (phone_number, otp_code) = body.phone_number
        .zip(body.otp_code)
        .ok_or_else(|| HttpError::bad_request(ErrorMessage::PhoneAndOtpRequired.to_string()))?;

    let outcome = app_state.onboarding_service
        .verify_otp(&phone_number, &otp_code, Utc::now())
        .await?;

    let message = match outcome {
        VerificationOutcome::Verified => "Verification successful! Your account is now active.",
        VerificationOutcome::AlreadyVerified => "Account is already verified.",
    };

    Ok(Json(Response {
        status: "success",
        message: message.to_string(),
    }))
}

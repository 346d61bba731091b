use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct RegisterUserDto {
    #[validate(
        required(message = "Phone number is required"),
        length(min = 1, message = "Phone number is required"),
        length(max = 20, message = "Phone number must be at most 20 characters")
    )]
    pub phone_number: Option<String>,

    #[validate(length(max = 15, message = "Referral code must be at most 15 characters"))]
    pub referral_code: Option<String>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct VerifyOtpDto {
    #[validate(
        required(message = "Phone number is required"),
        length(min = 1, message = "Phone number is required")
    )]
    pub phone_number: Option<String>,

    #[validate(
        required(message = "OTP code is required"),
        length(min = 1, message = "OTP code is required")
    )]
    pub otp_code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponseDto {
    pub status: String,
    pub message: String,
    // Stands in for the SMS channel; must not ship to production.
    pub otp_for_testing: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub status: &'static str,
    pub message: String,
}

// service/onboarding_service.rs
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use subtle::ConstantTimeEq;
use tracing::{info, warn};

use crate::{
    db::userdb::UserExt,
    error::ErrorMessage,
    models::usermodel::{NewUser, User},
    service::error::ServiceError,
    utils::code_generator::{generate_otp, generate_referral_code},
};

pub const OTP_VALIDITY_MINUTES: i64 = 5;

#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub phone_number: String,
    pub referred_by_code: Option<String>,
    pub ip_address: Option<String>,
}

/// A freshly registered user plus the OTP that would normally go out by SMS.
#[derive(Debug, Clone)]
pub struct IssuedOtp {
    pub user: User,
    pub otp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    AlreadyVerified,
}

#[derive(Debug, Clone)]
pub struct OnboardingService<S: ?Sized> {
    db_client: Arc<S>,
}

impl<S: UserExt + ?Sized> OnboardingService<S> {
    pub fn new(db_client: Arc<S>) -> Self {
        Self { db_client }
    }

    pub async fn register(
        &self,
        registration: Registration,
        now: DateTime<Utc>,
    ) -> Result<IssuedOtp, ServiceError> {
        if registration.phone_number.is_empty() {
            return Err(ServiceError::Validation(ErrorMessage::PhoneNumberRequired.to_string()));
        }

        let existing = self.db_client
            .get_user_by_phone(&registration.phone_number)
            .await?;

        if existing.is_some() {
            return Err(ServiceError::PhoneNumberTaken(registration.phone_number));
        }

        let otp = generate_otp();
        let new_user = NewUser {
            phone_number: registration.phone_number.clone(),
            referral_code: generate_referral_code(),
            referred_by_code: registration.referred_by_code.filter(|code| !code.is_empty()),
            ip_address: registration.ip_address,
            otp_code: otp.clone(),
            otp_expiration: now + Duration::minutes(OTP_VALIDITY_MINUTES),
        };

        let user = self.db_client
            .save_user(new_user)
            .await
            .map_err(|e| {
                if ServiceError::is_phone_unique_violation(&e) {
                    ServiceError::PhoneNumberTaken(registration.phone_number.clone())
                } else {
                    ServiceError::Database(e)
                }
            })?;

        info!(
            "Registered user {} with referral code {}",
            user.id, user.referral_code
        );

        Ok(IssuedOtp { user, otp })
    }

    /// Expiry is checked before the code itself, so a correct but late code still fails.
    pub async fn verify_otp(
        &self,
        phone_number: &str,
        otp_submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<VerificationOutcome, ServiceError> {
        if phone_number.is_empty() || otp_submitted.is_empty() {
            return Err(ServiceError::Validation(ErrorMessage::PhoneAndOtpRequired.to_string()));
        }

        let user = self.db_client
            .get_user_by_phone(phone_number)
            .await?
            .ok_or_else(|| ServiceError::UserNotFound(phone_number.to_string()))?;

        if user.is_verified() {
            info!("User {} re-submitted an OTP after verification", user.id);
            return Ok(VerificationOutcome::AlreadyVerified);
        }
        let stored_otp = user.otp_code.as_deref().unwrap_or_default();

        match user.otp_expiration {
            Some(expires_at) if now <= expires_at => {}
            _ => {
                warn!("Expired OTP submitted for user {}", user.id);
                return Err(ServiceError::OtpExpired(phone_number.to_string()));
            }
        }

        let matches: bool = stored_otp.as_bytes().ct_eq(otp_submitted.as_bytes()).into();
        if !matches {
            warn!("Wrong OTP submitted for user {}", user.id);
            return Err(ServiceError::OtpMismatch(phone_number.to_string()));
        }

        self.db_client.clear_user_otp(user.id).await?;

        info!("User {} verified", user.id);

        Ok(VerificationOutcome::Verified)
    }
}

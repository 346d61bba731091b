use bigdecimal::BigDecimal;
use chrono::prelude::*;

#[derive(Debug, sqlx::FromRow, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub phone_number: String,
    pub level_id: i32,
    pub withdrawable_balance: BigDecimal,
    pub active_investment_balance: BigDecimal,
    pub referral_code: String,
    // Free-text stamp of whoever referred this user, never resolved.
    pub referred_by_code: Option<String>,
    pub ip_address: Option<String>,

    pub otp_code: Option<String>,
    pub otp_expiration: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// A user counts as verified once the OTP code has been cleared.
    pub fn is_verified(&self) -> bool {
        self.otp_code.is_none()
    }
}

/// Row values supplied by registration; everything else takes column defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub phone_number: String,
    pub referral_code: String,
    pub referred_by_code: Option<String>,
    pub ip_address: Option<String>,
    pub otp_code: String,
    pub otp_expiration: DateTime<Utc>,
}

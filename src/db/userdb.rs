// db/userdb.rs
use async_trait::async_trait;

use super::db::DBClient;
use crate::models::usermodel::{NewUser, User};

#[async_trait]
pub trait UserExt: Send + Sync + std::fmt::Debug {
    async fn get_user_by_phone(
        &self,
        phone_number: &str,
    ) -> Result<Option<User>, sqlx::Error>;

    async fn save_user(
        &self,
        new_user: NewUser,
    ) -> Result<User, sqlx::Error>;

    /// Clears the OTP code; the expiration stamp is left as it was.
    async fn clear_user_otp(
        &self,
        user_id: i32,
    ) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_user_by_phone(
        &self,
        phone_number: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT
                id, phone_number, level_id,
                withdrawable_balance, active_investment_balance,
                referral_code, referred_by_code, ip_address,
                otp_code, otp_expiration,
                created_at
            FROM users
            WHERE phone_number = $1
            "#
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await
    }

    async fn save_user(
        &self,
        new_user: NewUser,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                phone_number, referral_code, referred_by_code,
                ip_address, otp_code, otp_expiration
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, phone_number, level_id,
                withdrawable_balance, active_investment_balance,
                referral_code, referred_by_code, ip_address,
                otp_code, otp_expiration,
                created_at
            "#
        )
        .bind(new_user.phone_number)
        .bind(new_user.referral_code)
        .bind(new_user.referred_by_code)
        .bind(new_user.ip_address)
        .bind(new_user.otp_code)
        .bind(new_user.otp_expiration)
        .fetch_one(&self.pool)
        .await
    }

    async fn clear_user_otp(
        &self,
        user_id: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET otp_code = NULL
            WHERE id = $1
            "#
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

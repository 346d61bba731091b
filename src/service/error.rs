use thiserror::Error;

use crate::error::{ErrorMessage, HttpError};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Phone number {0} is already registered")]
    PhoneNumberTaken(String),

    #[error("No user registered with phone number {0}")]
    UserNotFound(String),

    #[error("OTP for {0} has expired")]
    OtpExpired(String),

    #[error("OTP for {0} does not match")]
    OtpMismatch(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ServiceError {
    /// True when the insert lost a race against another registration of the same phone.
    pub fn is_phone_unique_violation(error: &sqlx::Error) -> bool {
        match error {
            sqlx::Error::Database(db_error) => {
                db_error.is_unique_violation()
                    && db_error
                        .constraint()
                        .map_or(false, |name| name.contains("phone_number"))
            }
            _ => false,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::Validation(message) => HttpError::bad_request(message),
            ServiceError::PhoneNumberTaken(_) => {
                HttpError::conflict(ErrorMessage::PhoneNumberExist.to_string())
            }
            ServiceError::UserNotFound(_) => {
                HttpError::not_found(ErrorMessage::UserNotFound.to_string())
            }
            ServiceError::OtpExpired(_) => {
                HttpError::bad_request(ErrorMessage::OtpExpired.to_string())
            }
            ServiceError::OtpMismatch(_) => {
                HttpError::bad_request(ErrorMessage::OtpMismatch.to_string())
            }
            ServiceError::Database(e) => {
                tracing::error!("Database error: {}", e);
                HttpError::server_error(ErrorMessage::ServerError.to_string())
            }
        }
    }
}

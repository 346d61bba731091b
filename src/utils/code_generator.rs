// utils/code_generator.rs
use rand::Rng;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const OTP_LENGTH: usize = 6;
pub const REFERRAL_PREFIX: &str = "INV";
pub const REFERRAL_SUFFIX_LENGTH: usize = 7;

/// Uniform draw from uppercase letters and digits.
pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CODE_CHARSET[rng.random_range(0..CODE_CHARSET.len())] as char)
        .collect()
}

pub fn generate_otp() -> String {
    generate_random_code(OTP_LENGTH)
}

// Not checked against existing codes; the unique column is the only guard.
pub fn generate_referral_code() -> String {
    format!("{}{}", REFERRAL_PREFIX, generate_random_code(REFERRAL_SUFFIX_LENGTH))
}

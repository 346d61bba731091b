pub mod catalog_service;
pub mod error;
pub mod onboarding_service;

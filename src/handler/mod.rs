pub mod auth;
pub mod levels;
pub mod products;

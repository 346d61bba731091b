pub mod client_ip;
pub mod code_generator;
pub mod decimal;

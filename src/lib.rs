pub mod api;
pub mod breaker;
pub mod cipher;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod random;
pub mod scorer;
// cmd and reports are binary modules (see main.rs).

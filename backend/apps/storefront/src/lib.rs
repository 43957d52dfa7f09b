//! Storefront Server
//!
//! Wires the page, auth and CAPTCHA routers into one application.
//! The binary in `main.rs` only reads configuration, picks the mail
//! transport and serves [`app::build_router`].

pub mod app;
pub mod config;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

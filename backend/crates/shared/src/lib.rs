//! Shared Kernel
//!
//! Error vocabulary shared by every storefront crate:
//! - [`error::kind::ErrorKind`] maps failures onto HTTP status codes
//! - [`error::app_error::AppError`] is the unified error value
//! - `conversions` renders it as an axum response

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

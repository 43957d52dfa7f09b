//! Presentation Layer
//!
//! HTTP handler, form DTO, router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CaptchaAppState;
pub use router::{captcha_router, captcha_router_generic};

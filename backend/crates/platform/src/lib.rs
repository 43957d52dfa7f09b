//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the storefront crates:
//! - Cryptographic utilities (HMAC-SHA256, Base64, random keys, constant-time eq)
//! - Outbound mail transport behind the [`mail::MailSender`] trait
//! - Request body extraction accepting both form and JSON payloads

pub mod crypto;
pub mod extract;
pub mod mail;

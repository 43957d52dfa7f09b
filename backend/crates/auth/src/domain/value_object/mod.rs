//! Value Object Module

pub mod challenge_token;
pub mod email;
pub mod totp_secret;

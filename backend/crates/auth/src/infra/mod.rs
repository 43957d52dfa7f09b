//! Infrastructure Layer
//!
//! Implementations of domain traits backed by external crates.

pub mod totp;

pub use totp::RfcTotpProvider;

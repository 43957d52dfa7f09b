//! QR Enrollment Image
//!
//! The QR image itself is rendered by an external service; the server only
//! builds the image URL that embeds the enrollment URI.

use url::Url;

use crate::error::{AuthError, AuthResult};

/// Build `<service_url>?size=<n>x<n>&data=<enrollment_uri>`, percent-encoding the URI
pub fn qr_image_url(service_url: &str, size_px: u32, enrollment_uri: &str) -> AuthResult<String> {
    let size = format!("{size_px}x{size_px}");
    let url = Url::parse_with_params(service_url, [("size", size.as_str()), ("data", enrollment_uri)])
        .map_err(|e| AuthError::Internal(format!("Invalid QR service URL: {}", e)))?;
    Ok(url.into())
}

//! Payment token generation.
//!
//! Tokens are the only artifact this service produces: opaque, unguessable
//! strings minted from the operating system's cryptographically secure
//! random source. They are never stored; once a token leaves the handler
//! the service has no record it was ever issued.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::AppError;

/// Number of random bytes in a token before encoding.
pub const TOKEN_BYTES: usize = 32;

/// Generate a fresh payment token.
///
/// Draws 32 bytes from the OS random source and encodes them with the
/// URL-safe base64 alphabet (padded, 44 characters).
///
/// # Errors
///
/// Returns `AppError::TokenGeneration` if the OS random source fails.
/// This is expected never to happen in practice; the fallible API exists
/// so that an exhausted or unavailable source surfaces as an internal
/// error on one request instead of crashing the process.
pub fn generate_token() -> Result<String, AppError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.try_fill_bytes(&mut bytes)?;

    Ok(URL_SAFE.encode(bytes))
}

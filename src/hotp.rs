//! HOTP engine: HMAC computation, dynamic truncation, and decimal rendering.

use ring::hmac;

use crate::{Algorithm, Error, Result};

pub(crate) const MIN_DIGITS: u8 = 6;
pub(crate) const MAX_DIGITS: u8 = 8;

// https://tools.ietf.org/html/rfc4226#section-5.3 states "Implementations MUST extract a 6-digit
// code at a minimum and possibly 7 and 8-digit codes." The 31-bit truncation space caps the
// practical maximum at 8.
pub(crate) fn validate_digits(digits: u8) -> bool {
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits)
}

// "Dynamic truncation" (https://tools.ietf.org/html/rfc4226#section-5.3)
fn truncate(digest: &[u8]) -> u32 {
    // Four bits form the offset, so offset + 3 can reach index 18; every supported digest is at
    // least 20 bytes, which the assertion makes explicit rather than relying on indexing to
    // panic somewhere less obvious.
    assert!(digest.len() >= 20);
    // Get the offset location from the last 4 bits of the digest
    let offset = (digest[digest.len() - 1] & 0xf) as usize;
    let bytes = [
        // Strip the leading bit to remove signed/unsigned ambiguity
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ];
    u32::from_be_bytes(bytes)
}

/// Computes an HOTP password of the desired length for the given counter value.
///
/// The counter is serialized as eight big-endian bytes regardless of host byte order, HMACed
/// under `secret`, truncated to 31 bits per [RFC 4226 section 5.3][5.3], reduced modulo
/// `10^digits`, and rendered as a decimal string left-padded with `'0'` to exactly `digits`
/// characters.
///
/// # Errors
///
/// Returns [`Error::InvalidDigits`] if `digits` lies outside of the range [6, 8]. The check is
/// repeated here even though [`Generator`][crate::Generator] construction enforces it.
///
/// [5.3]: https://datatracker.ietf.org/doc/html/rfc4226#section-5.3
pub(crate) fn generate_password(
    algorithm: Algorithm,
    digits: u8,
    secret: &[u8],
    counter: u64,
) -> Result<String> {
    if !validate_digits(digits) {
        return Err(Error::InvalidDigits);
    }
    let key = hmac::Key::new(algorithm.hmac_algorithm(), secret);
    let digest = hmac::sign(&key, &counter.to_be_bytes());
    let password = truncate(digest.as_ref()) % 10_u32.pow(digits.into());
    Ok(format!("{:0width$}", password, width = usize::from(digits)))
}

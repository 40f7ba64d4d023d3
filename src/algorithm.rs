//! Hash function selection.

use ring::hmac;

/// Cryptographic hash function used to calculate the HMAC from which a password is derived.
///
/// [RFC 4226][4226] prescribes HMAC-SHA1 as the digest method. [RFC 6238][6238] extends HOTP to
/// allow the HMAC-SHA256 and HMAC-SHA512 methods as well, so all three are supported here. The
/// choice of hash function also fixes the digest length (20, 32, or 64 bytes respectively).
///
/// [4226]: https://datatracker.ietf.org/doc/html/rfc4226
/// [6238]: https://datatracker.ietf.org/doc/html/rfc6238
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// The SHA-1 hash function.
    Sha1,
    /// The SHA-256 hash function.
    Sha256,
    /// The SHA-512 hash function.
    Sha512,
}

impl Algorithm {
    /// The length, in bytes, of a digest produced under this algorithm.
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha512 => 64,
        }
    }

    // SHA-1 is fine for HMAC-based OTPs (RFC 6238, section 3); ring just insists on the
    // legacy-use name.
    pub(crate) fn hmac_algorithm(self) -> hmac::Algorithm {
        match self {
            Algorithm::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            Algorithm::Sha256 => hmac::HMAC_SHA256,
            Algorithm::Sha512 => hmac::HMAC_SHA512,
        }
    }
}

//! One-time password generation per [RFC 4226][4226] (HOTP) and [RFC 6238][6238] (TOTP).
//!
//! A [`Generator`] holds all of the parameters needed to produce a password: a moving
//! [`Factor`] (an explicit counter, or a timer period), a shared secret, a hash [`Algorithm`],
//! and a digit count. Password generation is a pure function of these parameters and the target
//! time; generators are immutable values and may be shared freely between threads.
//!
//! This crate only generates passwords. Secret storage, provisioning-URI parsing, and
//! server-side validation are left to the calling code.
//!
//! # Examples
//!
//! ```rust
//! use one_time_password::{Algorithm, Factor, Generator};
//!
//! # fn main() -> Result<(), one_time_password::Error> {
//! let generator = Generator::new(
//!     Factor::Timer { period: 30.0 },
//!     b"12345678901234567890".to_vec(),
//!     Algorithm::Sha1,
//!     6,
//! )?;
//! // Seconds since the Unix epoch; the RFC 6238 test time.
//! assert_eq!(generator.password_at(59.0)?, "287082");
//! # Ok(())
//! # }
//! ```
//!
//! [4226]: https://datatracker.ietf.org/doc/html/rfc4226
//! [6238]: https://datatracker.ietf.org/doc/html/rfc6238

mod algorithm;
mod factor;
mod hotp;

pub use crate::algorithm::Algorithm;
pub use crate::factor::Factor;

use core::fmt;

use log::trace;

/// OTP error type.
///
/// Every variant is a deterministic validation failure; none is transient, so retrying a failed
/// call with the same arguments is never useful.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Error {
    /// The requested time is before the Unix epoch.
    InvalidTime,
    /// The timer period is not a positive number of seconds.
    InvalidPeriod,
    /// The requested number of digits was outside of the range [6, 8].
    InvalidDigits,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTime => write!(f, "Invalid time (before the Unix epoch)"),
            Error::InvalidPeriod => {
                write!(f, "Invalid period (must be a positive number of seconds)")
            }
            Error::InvalidDigits => write!(f, "Invalid digit count (must be between 6 and 8)"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// A `Generator` contains all of the parameters needed to generate a one-time password.
///
/// Construction validates every parameter (see [`Generator::new`]), so a `Generator` that
/// exists is always able to produce a password for any valid time. Values are immutable;
/// "advancing" a counter-based generator produces a new value via [`successor`][Self::successor].
///
/// Two generators compare equal iff all four parameters are equal, with the secret compared
/// byte-wise.
#[derive(Clone, PartialEq)]
pub struct Generator {
    factor: Factor,
    secret: Vec<u8>,
    algorithm: Algorithm,
    digits: u8,
}

impl Generator {
    /// Creates a new password generator with the given parameters.
    ///
    /// The secret may be any byte sequence, including an empty one; the algorithm itself
    /// mandates no minimum key length, though anything shorter than the 16 bytes RFC 4226
    /// requires of real deployments is a poor idea outside of tests.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPeriod`] if `factor` is a [`Factor::Timer`] whose period is not
    /// strictly positive, and [`Error::InvalidDigits`] if `digits` lies outside of the range
    /// [6, 8]. Invalid parameters are never clamped or defaulted.
    pub fn new(factor: Factor, secret: Vec<u8>, algorithm: Algorithm, digits: u8) -> Result<Self> {
        if let Factor::Timer { period } = factor {
            if !(period > 0.0) {
                return Err(Error::InvalidPeriod);
            }
        }
        if !hotp::validate_digits(digits) {
            return Err(Error::InvalidDigits);
        }
        Ok(Generator {
            factor,
            secret,
            algorithm,
            digits,
        })
    }

    /// The moving factor, either timer- or counter-based.
    pub fn factor(&self) -> Factor {
        self.factor
    }

    /// The secret shared between the client and server.
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// The cryptographic hash function used to generate the password.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The number of digits in the password.
    pub fn digits(&self) -> u8 {
        self.digits
    }

    /// Generates the password for the given point in time.
    ///
    /// `time` is the target time, as seconds since the Unix epoch. For counter-based generators
    /// the time is ignored; for timer-based generators it selects the time step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTime`] for a negative `time` on a timer-based generator. The
    /// period and digit count are re-validated on every call and yield
    /// [`Error::InvalidPeriod`] or [`Error::InvalidDigits`] should they ever be violated.
    pub fn password_at(&self, time: f64) -> Result<String> {
        let counter = self.factor.counter_at(time)?;
        trace!(
            "generating {}-digit {:?} password for counter {}",
            self.digits,
            self.algorithm,
            counter
        );
        hotp::generate_password(self.algorithm, self.digits, &self.secret, counter)
    }

    /// Returns a `Generator` configured to generate the *next* password, which follows the
    /// password generated by `self`.
    ///
    /// For a counter-based generator this is an identical generator whose counter is one
    /// greater; the counter wraps to zero at `u64::MAX` (RFC 4226 places no bound on the
    /// counter, and no real token survives 2^64 uses). For a timer-based generator, passwords
    /// advance with wall-clock time and the result is a value equal to `self`.
    ///
    /// The successor is built directly from the already-validated parameters, so this cannot
    /// fail.
    #[must_use]
    pub fn successor(&self) -> Self {
        match self.factor {
            Factor::Counter(counter) => Generator {
                factor: Factor::Counter(counter.wrapping_add(1)),
                secret: self.secret.clone(),
                algorithm: self.algorithm,
                digits: self.digits,
            },
            Factor::Timer { .. } => self.clone(),
        }
    }
}

// Hand-written so the secret can never leak through a `{:?}` in a log line or panic message.
impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("factor", &self.factor)
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("digits", &self.digits)
            .finish()
    }
}

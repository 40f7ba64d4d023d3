//! Moving factor types and counter derivation.

use crate::{Error, Result};

/// A moving factor with which a generator produces different one-time passwords over time.
///
/// The two variants correspond to the two OTP flavors: `Counter` indicates an HOTP
/// ([RFC 4226][4226]), `Timer` a TOTP ([RFC 6238][6238]).
///
/// [4226]: https://datatracker.ietf.org/doc/html/rfc4226
/// [6238]: https://datatracker.ietf.org/doc/html/rfc6238
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Factor {
    /// An 8-byte synchronized moving counter. After each use of the password generator, the
    /// counter should be incremented (see [`Generator::successor`][successor]) to stay in sync
    /// with the server.
    ///
    /// [successor]: crate::Generator::successor
    Counter(u64),
    /// A time-based moving factor. The period remains constant and is used as a divisor for the
    /// number of seconds since the Unix epoch.
    Timer {
        /// The length of a time step, in seconds. Must be strictly positive.
        period: f64,
    },
}

impl Factor {
    /// Calculates the counter value needed to generate the password for the target time.
    ///
    /// For a `Counter` factor, the counter value is returned unchanged and `time` is ignored.
    /// For a `Timer` factor, the counter is the number of whole periods elapsed since the Unix
    /// epoch, `⌊time / period⌋`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTime`] if `time` is negative, or [`Error::InvalidPeriod`] if the
    /// period is not strictly positive. Both apply to `Timer` factors only.
    pub fn counter_at(self, time: f64) -> Result<u64> {
        match self {
            Factor::Counter(counter) => Ok(counter),
            Factor::Timer { period } => {
                if time < 0.0 {
                    return Err(Error::InvalidTime);
                }
                // Re-checked here even though construction already validates it, so a factor
                // built directly can never divide by zero. The comparison also rejects NaN.
                if !(period > 0.0) {
                    return Err(Error::InvalidPeriod);
                }
                Ok((time / period) as u64)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_ignores_time() {
        let factor = Factor::Counter(42);
        assert_eq!(factor.counter_at(0.0), Ok(42));
        assert_eq!(factor.counter_at(1_234_567_890.0), Ok(42));
        assert_eq!(factor.counter_at(-1.0), Ok(42));
    }

    #[test]
    fn timer_divides_by_period() {
        let factor = Factor::Timer { period: 30.0 };
        assert_eq!(factor.counter_at(0.0), Ok(0));
        assert_eq!(factor.counter_at(29.9), Ok(0));
        assert_eq!(factor.counter_at(30.0), Ok(1));
        assert_eq!(factor.counter_at(59.0), Ok(1));
        assert_eq!(factor.counter_at(60.0), Ok(2));
        assert_eq!(factor.counter_at(1_111_111_109.0), Ok(37_037_036));
    }

    #[test]
    fn timer_subsecond_period() {
        let factor = Factor::Timer { period: 0.5 };
        assert_eq!(factor.counter_at(2.0), Ok(4));
    }

    #[test]
    fn timer_rejects_negative_time() {
        let factor = Factor::Timer { period: 30.0 };
        assert_eq!(factor.counter_at(-1.0), Err(Error::InvalidTime));
        assert_eq!(factor.counter_at(-0.5), Err(Error::InvalidTime));
    }

    #[test]
    fn timer_rejects_bad_period() {
        assert_eq!(
            Factor::Timer { period: 0.0 }.counter_at(59.0),
            Err(Error::InvalidPeriod)
        );
        assert_eq!(
            Factor::Timer { period: -30.0 }.counter_at(59.0),
            Err(Error::InvalidPeriod)
        );
        assert_eq!(
            Factor::Timer { period: f64::NAN }.counter_at(59.0),
            Err(Error::InvalidPeriod)
        );
    }

    #[test]
    fn time_check_precedes_period_check() {
        // Matches the guard order in derivation: a factor that is wrong in both ways reports
        // the time problem first.
        assert_eq!(
            Factor::Timer { period: 0.0 }.counter_at(-1.0),
            Err(Error::InvalidTime)
        );
    }
}

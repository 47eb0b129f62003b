//! Period arithmetic: Nyquist bound and period sample count.

use crate::error::Error;
use crate::validate::{check_frequency, check_frequency_vs_nyquist, check_sampling_rate};

/// The Nyquist frequency for a sampling rate: the highest frequency that can
/// be unambiguously captured at that rate, `sampling_rate / 2` (floored).
///
/// # Errors
///
/// Returns [`Error::SamplingRateTooLow`] if `sampling_rate < 1`.
///
/// # Examples
///
/// ```
/// use wavecycle::nyquist_frequency;
///
/// assert_eq!(nyquist_frequency(48_000)?, 24_000);
/// assert_eq!(nyquist_frequency(1001)?, 500);
/// # Ok::<(), wavecycle::Error>(())
/// ```
pub fn nyquist_frequency(sampling_rate: u32) -> Result<u32, Error> {
    check_sampling_rate(sampling_rate)?;

    Ok(sampling_rate / 2)
}

/// How many discrete samples represent one period of `frequency` Hz sampled
/// at `sampling_rate` Hz: `ceil(sampling_rate / frequency)` with real-valued
/// division.
///
/// When the sampling rate is not an integer multiple of the frequency the
/// count is inexact; that quantization error is inherent to digital sampling
/// and deliberately not treated as an error condition.
///
/// # Errors
///
/// Returns an [`Error`] if the sampling rate is below 1 Hz, the frequency is
/// below 1 Hz, or the frequency exceeds the Nyquist bound.
///
/// # Examples
///
/// ```
/// use wavecycle::period_sample_count;
///
/// assert_eq!(period_sample_count(1000, 10)?, 100);
/// assert_eq!(period_sample_count(44_100, 440)?, 101);
/// # Ok::<(), wavecycle::Error>(())
/// ```
pub fn period_sample_count(sampling_rate: u32, frequency: u32) -> Result<usize, Error> {
    check_sampling_rate(sampling_rate)?;
    check_frequency(frequency)?;
    check_frequency_vs_nyquist(frequency, sampling_rate)?;

    Ok((sampling_rate as f64 / frequency as f64).ceil() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nyquist_is_half_the_sampling_rate() {
        assert_eq!(nyquist_frequency(1000), Ok(500));
        assert_eq!(nyquist_frequency(999), Ok(499));
        assert_eq!(nyquist_frequency(1), Ok(0));
    }

    #[test]
    fn test_nyquist_rejects_zero_sampling_rate() {
        assert_eq!(nyquist_frequency(0), Err(Error::SamplingRateTooLow(0)));
    }

    #[test]
    fn test_exact_period() {
        assert_eq!(period_sample_count(1000, 10), Ok(100));
        assert_eq!(period_sample_count(48_000, 1000), Ok(48));
    }

    #[test]
    fn test_inexact_period_rounds_up() {
        // 44100 / 440 = 100.2272...
        assert_eq!(period_sample_count(44_100, 440), Ok(101));
        // 1000 / 3 = 333.33...
        assert_eq!(period_sample_count(1000, 3), Ok(334));
    }

    #[test]
    fn test_period_at_nyquist_is_two_samples() {
        assert_eq!(period_sample_count(1000, 500), Ok(2));
    }

    #[test]
    fn test_period_rejects_invalid_arguments() {
        assert_eq!(period_sample_count(0, 10), Err(Error::SamplingRateTooLow(0)));
        assert_eq!(period_sample_count(1000, 0), Err(Error::FrequencyTooLow(0)));
        assert_eq!(
            period_sample_count(1000, 501),
            Err(Error::FrequencyAboveNyquist {
                frequency: 501,
                nyquist: 500
            })
        );
    }
}

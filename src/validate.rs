//! Stateless parameter guards.
//!
//! Free functions that check one precondition each and otherwise have no
//! effect. They are independent: callers run every check that applies to a
//! request before generating anything, and a failure from any of them
//! surfaces unchanged as [`Error`].

use crate::error::Error;
use crate::period::nyquist_frequency;
use crate::sample::Sample;

/// Checks that a sampling rate is at least 1 Hz.
pub fn check_sampling_rate(sampling_rate: u32) -> Result<(), Error> {
    if sampling_rate < 1 {
        return Err(Error::SamplingRateTooLow(sampling_rate));
    }
    Ok(())
}

/// Checks that a target frequency is at least 1 Hz.
pub fn check_frequency(frequency: u32) -> Result<(), Error> {
    if frequency < 1 {
        return Err(Error::FrequencyTooLow(frequency));
    }
    Ok(())
}

/// Checks that a peak-to-peak amplitude meets the minimum for the output
/// domain of `T`: 2 for signed integers, 1 otherwise.
///
/// A NaN amplitude fails the comparison and is rejected like any other
/// below-minimum value.
pub fn check_amplitude<T: Sample>(peak_to_peak: T) -> Result<(), Error> {
    let min = T::DOMAIN.min_amplitude();
    let got = peak_to_peak.to_f64();
    if got < min || got.is_nan() {
        return Err(Error::AmplitudeBelowMinimum { min, got });
    }
    Ok(())
}

/// Checks that a target frequency does not exceed the Nyquist frequency for
/// the given sampling rate.
pub fn check_frequency_vs_nyquist(frequency: u32, sampling_rate: u32) -> Result<(), Error> {
    let nyquist = nyquist_frequency(sampling_rate)?;
    if frequency > nyquist {
        return Err(Error::FrequencyAboveNyquist { frequency, nyquist });
    }
    Ok(())
}

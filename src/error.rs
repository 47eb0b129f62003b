//! Error type for invalid generation parameters.
//!
//! Every failure in this crate is an invalid-argument error: the caller
//! supplied a sampling rate, frequency, or amplitude that cannot describe a
//! realizable waveform. These are configuration mistakes to be corrected and
//! re-invoked, not transient conditions to retry, so there is a single error
//! enum with one variant per cause and no other failure machinery.

use thiserror::Error;

/// An invalid argument passed to a generator constructor or to
/// [`generate_period`](crate::PeriodGenerator::generate_period).
///
/// All variants are raised synchronously before any sample is produced, so a
/// failed call never returns a partial period.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Sampling rate below 1 Hz.
    #[error("sampling rate must be >= 1, got {0}")]
    SamplingRateTooLow(u32),

    /// Requested frequency below 1 Hz.
    #[error("frequency must be >= 1, got {0}")]
    FrequencyTooLow(u32),

    /// Requested frequency above the Nyquist frequency for the configured
    /// sampling rate.
    #[error("frequency {frequency} Hz must be <= sampling rate / 2 (Nyquist frequency, {nyquist} Hz)")]
    FrequencyAboveNyquist {
        /// The rejected frequency in Hz.
        frequency: u32,
        /// The Nyquist bound, `sampling_rate / 2`, in Hz.
        nyquist: u32,
    },

    /// Peak-to-peak amplitude below the minimum for the output domain.
    #[error("peak-to-peak amplitude must be >= {min}, got {got}")]
    AmplitudeBelowMinimum {
        /// The domain-specific minimum (2 for signed integers, 1 otherwise).
        min: f64,
        /// The rejected amplitude, widened to f64.
        got: f64,
    },
}

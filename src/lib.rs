//! Wavecycle - deterministic single-period waveform generation.
//!
//! This library generates exactly one period of a sine, square, sawtooth, or
//! triangle waveform as discrete samples, from a sampling rate, target
//! frequency, peak-to-peak amplitude, and phase shift. It is meant for
//! callers who need parametric test or synthesis signals (DSP test
//! harnesses, synthesizer voices, calibration tones) without a full
//! signal-processing pipeline: every call is stateless, synchronous, and
//! returns the whole period or an error, never a partial buffer.
//!
//! Output can be rendered into unsigned integers, signed integers, or
//! floats. Unsigned periods are lifted to `[0, peak_to_peak]` since those
//! types cannot hold negative samples; signed and floating periods stay
//! centered in `[-peak_to_peak / 2, peak_to_peak / 2]`.
//!
//! # Examples
//!
//! ```
//! use wavecycle::{PeriodGenerator, Shape};
//!
//! // 100 samples of a 10 Hz triangle at 1 kHz, as u16 in [0, 512]
//! let generator = PeriodGenerator::<u16>::new(Shape::Triangle, 1000)?;
//! let period = generator.generate_period(10, 512, 0.0)?;
//! assert_eq!(period.len(), 100);
//! assert!(period.iter().all(|&v| v <= 512));
//! # Ok::<(), wavecycle::Error>(())
//! ```

pub mod error;
pub mod generator;
pub mod period;
pub mod sample;
pub mod shape;
pub mod validate;

// Re-export the full public surface at the crate root
pub use error::Error;
pub use generator::PeriodGenerator;
pub use period::{nyquist_frequency, period_sample_count};
pub use sample::{DomainKind, Sample};
pub use shape::Shape;

//! The waveform period generator.

use std::marker::PhantomData;

use crate::error::Error;
use crate::period::period_sample_count;
use crate::sample::{DomainKind, Sample};
use crate::shape::Shape;
use crate::validate::{check_amplitude, check_frequency, check_sampling_rate};

/// Generates exactly one period of a periodic waveform as samples of `T`.
///
/// A generator is configured once with a shape and a sampling rate; the
/// output domain follows from the chosen sample type `T`. It holds no other
/// state, so one instance can serve any number of `generate_period` calls,
/// concurrently from multiple threads if desired, with different
/// frequencies, amplitudes, and phase shifts. Calls are independent and
/// deterministic: identical inputs always produce an identical sequence.
///
/// # Examples
///
/// ```
/// use wavecycle::{PeriodGenerator, Shape};
///
/// // One period of a 440 Hz sine at 48 kHz, 2.0 peak-to-peak, no shift
/// let generator = PeriodGenerator::<f64>::new(Shape::Sine, 48_000)?;
/// let period = generator.generate_period(440, 2.0, 0.0)?;
/// assert_eq!(period.len(), 110); // ceil(48000 / 440)
/// # Ok::<(), wavecycle::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PeriodGenerator<T: Sample> {
    shape: Shape,
    sampling_rate: u32,
    domain: DomainKind,
    _sample: PhantomData<fn() -> T>,
}

impl<T: Sample> PeriodGenerator<T> {
    /// Creates a generator for the given shape and sampling rate (Hz).
    ///
    /// # Errors
    ///
    /// Returns [`Error::SamplingRateTooLow`] if `sampling_rate < 1`.
    pub fn new(shape: Shape, sampling_rate: u32) -> Result<Self, Error> {
        check_sampling_rate(sampling_rate)?;

        Ok(Self {
            shape,
            sampling_rate,
            domain: T::DOMAIN,
            _sample: PhantomData,
        })
    }

    /// Creates a sine-wave generator. Shorthand for
    /// [`new`](Self::new) with [`Shape::Sine`].
    pub fn sine(sampling_rate: u32) -> Result<Self, Error> {
        Self::new(Shape::Sine, sampling_rate)
    }

    /// Creates a square-wave generator.
    pub fn square(sampling_rate: u32) -> Result<Self, Error> {
        Self::new(Shape::Square, sampling_rate)
    }

    /// Creates a sawtooth-wave generator.
    pub fn sawtooth(sampling_rate: u32) -> Result<Self, Error> {
        Self::new(Shape::Sawtooth, sampling_rate)
    }

    /// Creates a triangle-wave generator.
    pub fn triangle(sampling_rate: u32) -> Result<Self, Error> {
        Self::new(Shape::Triangle, sampling_rate)
    }

    /// The sampling rate (Hz) configured for this generator.
    pub fn sampling_rate(&self) -> u32 {
        self.sampling_rate
    }

    /// The waveform shape this generator produces.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The output numeric domain, derived from `T` at construction.
    pub fn domain(&self) -> DomainKind {
        self.domain
    }

    /// Generates one period of the waveform.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Target frequency in Hz; must be at least 1 and at
    ///   most the Nyquist frequency (`sampling_rate / 2`).
    /// * `peak_to_peak` - Total swing from trough to crest, in the output
    ///   domain; at least 2 for signed integer types, at least 1 otherwise.
    /// * `phase_shift` - Starting-point offset in radians, any value;
    ///   interpreted modulo 2π.
    ///
    /// Returns `ceil(sampling_rate / frequency)` samples covering exactly
    /// one period. Unsigned output lies in `[0, peak_to_peak]`; signed and
    /// floating output in `[-peak_to_peak / 2, peak_to_peak / 2]`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] describing the violated bound if any argument is
    /// invalid; no samples are produced on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavecycle::PeriodGenerator;
    ///
    /// let generator = PeriodGenerator::<u16>::square(1000)?;
    /// let period = generator.generate_period(10, 8, 0.0)?;
    /// assert_eq!(period.len(), 100);
    /// assert_eq!(period[0], 8);
    /// assert_eq!(period[50], 0);
    /// # Ok::<(), wavecycle::Error>(())
    /// ```
    pub fn generate_period(
        &self,
        frequency: u32,
        peak_to_peak: T,
        phase_shift: f64,
    ) -> Result<Vec<T>, Error> {
        check_frequency(frequency)?;
        check_amplitude(peak_to_peak)?;

        // re-validates frequency against the Nyquist bound
        let period = period_sample_count(self.sampling_rate, frequency)?;

        let amplitude = peak_to_peak.to_f64();
        let dc_offset = self.domain.dc_offset();

        let mut samples = Vec::with_capacity(period);
        for i in 0..period {
            let value = self
                .shape
                .sample_at(i, period, amplitude, phase_shift, dc_offset);
            samples.push(T::from_f64(value));
        }

        Ok(samples)
    }
}

//! Frequency verification: repeat one generated period to fill roughly one
//! second of audio, take the FFT, and require the dominant non-DC bin to
//! land within 5% of the requested frequency.

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;
use wavecycle::{PeriodGenerator, Sample, Shape};

const FREQUENCY_TOLERANCE: f64 = 0.05; // 5%

/// Replicates one period across a one-second buffer and returns the
/// frequency (Hz) of the strongest spectral bin above DC.
fn dominant_frequency<T: Sample>(
    generator: &PeriodGenerator<T>,
    frequency: u32,
    peak_to_peak: T,
) -> f64 {
    let period = generator
        .generate_period(frequency, peak_to_peak, 0.0)
        .unwrap();
    let repeats = generator.sampling_rate() as usize / period.len();

    let mut buffer: Vec<Complex<f64>> = Vec::with_capacity(repeats * period.len());
    for _ in 0..repeats {
        buffer.extend(period.iter().map(|s| Complex::new(s.to_f64(), 0.0)));
    }

    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(buffer.len()).process(&mut buffer);

    let mut dominant_bin = 1;
    let mut dominant_norm = 0.0;
    for (bin, value) in buffer.iter().enumerate().take(buffer.len() / 2).skip(1) {
        let norm = value.norm();
        if norm > dominant_norm {
            dominant_bin = bin;
            dominant_norm = norm;
        }
    }

    dominant_bin as f64 * generator.sampling_rate() as f64 / buffer.len() as f64
}

fn assert_dominant_frequency<T: Sample>(
    generator: &PeriodGenerator<T>,
    frequency: u32,
    peak_to_peak: T,
) {
    let dominant = dominant_frequency(generator, frequency, peak_to_peak);
    let tolerance = frequency as f64 * FREQUENCY_TOLERANCE;
    assert!(
        (dominant - frequency as f64).abs() <= tolerance,
        "{:?}: dominant bin at {dominant} Hz, requested {frequency} Hz",
        generator.shape(),
    );
}

#[test]
fn test_sine_dominant_frequency() {
    assert_dominant_frequency(&PeriodGenerator::<u16>::sine(1000).unwrap(), 10, 1);
    assert_dominant_frequency(&PeriodGenerator::<u16>::sine(1000).unwrap(), 10, 1024);
    assert_dominant_frequency(&PeriodGenerator::<f64>::sine(24_000).unwrap(), 440, 256.0);
    assert_dominant_frequency(&PeriodGenerator::<f64>::sine(48_000).unwrap(), 440, 1.0);
    assert_dominant_frequency(&PeriodGenerator::<u16>::sine(24_000).unwrap(), 440, 2048);
    assert_dominant_frequency(&PeriodGenerator::<i8>::sine(1000).unwrap(), 10, 100);
    assert_dominant_frequency(&PeriodGenerator::<i32>::sine(1000).unwrap(), 10, 200);
    assert_dominant_frequency(&PeriodGenerator::<f32>::sine(1000).unwrap(), 10, 1.0);
}

#[test]
fn test_square_dominant_frequency() {
    assert_dominant_frequency(&PeriodGenerator::<u16>::square(1000).unwrap(), 10, 10);
    assert_dominant_frequency(&PeriodGenerator::<f64>::square(24_000).unwrap(), 440, 256.0);
    assert_dominant_frequency(&PeriodGenerator::<f64>::square(48_000).unwrap(), 440, 1.0);
    assert_dominant_frequency(&PeriodGenerator::<u16>::square(24_000).unwrap(), 440, 2048);
    assert_dominant_frequency(&PeriodGenerator::<i8>::square(1000).unwrap(), 10, 100);
    assert_dominant_frequency(&PeriodGenerator::<f32>::square(1000).unwrap(), 10, 1.0);
}

#[test]
fn test_sawtooth_dominant_frequency() {
    assert_dominant_frequency(&PeriodGenerator::<u16>::sawtooth(1000).unwrap(), 10, 10);
    assert_dominant_frequency(&PeriodGenerator::<f64>::sawtooth(24_000).unwrap(), 440, 256.0);
    assert_dominant_frequency(&PeriodGenerator::<f64>::sawtooth(48_000).unwrap(), 440, 1.0);
    assert_dominant_frequency(&PeriodGenerator::<u16>::sawtooth(24_000).unwrap(), 440, 2048);
    assert_dominant_frequency(&PeriodGenerator::<i8>::sawtooth(1000).unwrap(), 10, 100);
    assert_dominant_frequency(&PeriodGenerator::<f32>::sawtooth(1000).unwrap(), 10, 1.0);
}

#[test]
fn test_triangle_dominant_frequency() {
    assert_dominant_frequency(&PeriodGenerator::<u16>::triangle(1000).unwrap(), 10, 10);
    assert_dominant_frequency(&PeriodGenerator::<f64>::triangle(24_000).unwrap(), 440, 256.0);
    assert_dominant_frequency(&PeriodGenerator::<f64>::triangle(48_000).unwrap(), 440, 1.0);
    assert_dominant_frequency(&PeriodGenerator::<u16>::triangle(24_000).unwrap(), 440, 2048);
    assert_dominant_frequency(&PeriodGenerator::<i8>::triangle(1000).unwrap(), 10, 100);
    assert_dominant_frequency(&PeriodGenerator::<f32>::triangle(1000).unwrap(), 10, 1.0);
}

#[test]
fn test_dominant_frequency_survives_phase_shift() {
    let generator = PeriodGenerator::<f64>::sine(8000).unwrap();
    let period = generator
        .generate_period(200, 2.0, std::f64::consts::PI / 3.0)
        .unwrap();
    let mut buffer: Vec<Complex<f64>> = Vec::with_capacity(8000);
    for _ in 0..(8000 / period.len()) {
        buffer.extend(period.iter().map(|&s| Complex::new(s, 0.0)));
    }
    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(buffer.len()).process(&mut buffer);
    let dominant = buffer
        .iter()
        .enumerate()
        .take(buffer.len() / 2)
        .skip(1)
        .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))
        .map(|(bin, _)| bin)
        .unwrap();
    let hz = dominant as f64 * 8000.0 / buffer.len() as f64;
    assert!((hz - 200.0).abs() <= 10.0);
}

//! Waveform shapes and their per-index sample formulas.
//!
//! Each shape answers one question: what is the value at offset `i` of a
//! period of `p` samples, for a peak-to-peak amplitude `A`, a phase shift in
//! radians, and a DC offset `d`? All formulas evaluate in `f64` and share
//! the same structure, so a single `d` term captures the whole difference
//! between zero-centered (signed, floating) and lifted (unsigned) output:
//! results lie in `[-A/2, A/2]` when `d = 0` and `[0, A]` when `d = 1`.
//!
//! Phase handling differs by construction. Sine has a natural continuous
//! phase argument, so the radian shift goes straight into the trig call.
//! Square, sawtooth, and triangle are defined piecewise over integer sample
//! indices; their shift is discretized to a whole-sample offset first
//! ([`phase_to_offset`]) so the waveform breakpoints stay exact.

use std::f64::consts::TAU;

/// The four supported periodic waveform shapes.
///
/// A closed set: shapes are dispatched by `match`, not through trait
/// objects, since nothing is added at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `sin(2πi/p + φ)`, scaled and lifted into the output domain.
    Sine,
    /// High for the first half of the period, low for the second.
    Square,
    /// Rises linearly through the period, dropping at the wrap point.
    Sawtooth,
    /// Rises linearly to the quarter-period peak, falls to the
    /// three-quarter trough, rises again.
    Triangle,
}

impl Shape {
    /// Computes the continuous-valued sample at index `i` of a period.
    ///
    /// `period` must be positive and `peak_to_peak` at least the domain
    /// minimum; the orchestrator validates both before looping, so this
    /// function performs no checks of its own.
    pub(crate) fn sample_at(
        self,
        i: usize,
        period: usize,
        peak_to_peak: f64,
        phase_shift: f64,
        dc_offset: f64,
    ) -> f64 {
        let a = peak_to_peak;
        let d = dc_offset;
        let p = period as i64;
        let i = i as i64;

        match self {
            Shape::Sine => {
                let angle = TAU * i as f64 / p as f64 + phase_shift;
                (angle.sin() + d) * a / 2.0
            }
            Shape::Square => {
                let s = phase_to_offset(phase_shift, period);
                let level = if 2 * wrap(i + s, p) < p { 1.0 } else { -1.0 };
                (level + d) * a / 2.0
            }
            Shape::Sawtooth => {
                let s = phase_to_offset(phase_shift, period);
                let ramp = wrap(i - p / 2 + s, p) as f64;
                a / p as f64 * ramp - (1.0 - d) * a / 2.0
            }
            Shape::Triangle => {
                let s = phase_to_offset(phase_shift, period);
                let fold = (wrap(i - p / 4 + s, p) - p / 2).abs() as f64;
                2.0 * a / p as f64 * fold - (1.0 - d) * a / 2.0
            }
        }
    }
}

/// Canonical non-negative modulo: the result is in `[0, p)` even for
/// negative `x`. Used everywhere an index is taken modulo the period.
pub(crate) fn wrap(x: i64, p: i64) -> i64 {
    x.rem_euclid(p)
}

/// Maps a radian phase shift onto an equivalent whole-sample offset in
/// `[0, period)`.
///
/// The shift is first reduced to `[0, 2π)` with a non-negative modulo, so
/// negative shifts and shifts beyond one full turn land on the same offset
/// as their canonical equivalent, then scaled by the period and floored.
pub(crate) fn phase_to_offset(phase_shift: f64, period: usize) -> i64 {
    let turns = phase_shift.rem_euclid(TAU) / TAU;
    (turns * period as f64).floor() as i64
}

//! Output sample domains.
//!
//! A generated period can be rendered into unsigned integers, signed
//! integers, or floating-point values. The three domains differ in exactly
//! two ways: whether the waveform must be lifted above zero (unsigned types
//! cannot hold negative samples) and the smallest peak-to-peak amplitude
//! that still produces a nonzero swing. Both facts are captured by
//! [`DomainKind`] and derived from the concrete output type through the
//! [`Sample`] trait, so the waveform formulas themselves stay domain-free.

/// The numeric domain of an output sample type.
///
/// Fixed at generator construction by the chosen output type and immutable
/// afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainKind {
    /// Unsigned integers (`u8`, `u16`, ...). Samples lie in `[0, peak_to_peak]`.
    Unsigned,
    /// Signed integers (`i8`, `i16`, ...). Samples lie in
    /// `[-peak_to_peak / 2, peak_to_peak / 2]`.
    SignedInteger,
    /// `f32` / `f64`. Samples lie in `[-peak_to_peak / 2, peak_to_peak / 2]`.
    FloatingPoint,
}

impl DomainKind {
    /// DC offset applied inside the waveform formulas.
    ///
    /// Unsigned domains cannot represent negative values, so the waveform is
    /// shifted up by one half-swing; signed and floating domains stay
    /// centered at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavecycle::DomainKind;
    ///
    /// assert_eq!(DomainKind::Unsigned.dc_offset(), 1.0);
    /// assert_eq!(DomainKind::FloatingPoint.dc_offset(), 0.0);
    /// ```
    pub const fn dc_offset(self) -> f64 {
        match self {
            DomainKind::Unsigned => 1.0,
            DomainKind::SignedInteger | DomainKind::FloatingPoint => 0.0,
        }
    }

    /// Smallest valid peak-to-peak amplitude for this domain.
    ///
    /// Signed integer domains need at least two representable levels to
    /// express a nonzero swing around zero, so their minimum is 2; unsigned
    /// and floating domains accept 1.
    pub const fn min_amplitude(self) -> f64 {
        match self {
            DomainKind::SignedInteger => 2.0,
            DomainKind::Unsigned | DomainKind::FloatingPoint => 1.0,
        }
    }
}

/// A numeric type a waveform period can be rendered into.
///
/// Waveform math runs in `f64`; this trait widens the caller's amplitude
/// into that working domain and narrows each finished sample back out.
/// Integer conversions round half away from zero and saturate at the type's
/// bounds, one rule for every shape and every integer width.
pub trait Sample: Copy + PartialOrd + Send + Sync + 'static {
    /// The numeric domain this type belongs to.
    const DOMAIN: DomainKind;

    /// Widens this value to the `f64` working domain.
    fn to_f64(self) -> f64;

    /// Narrows a finished sample out of the `f64` working domain.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_sample_for_int {
    ($domain:expr => $($t:ty),+) => {
        $(
            impl Sample for $t {
                const DOMAIN: DomainKind = $domain;

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    // `as` saturates at the integer bounds
                    value.round() as $t
                }
            }
        )+
    };
}

macro_rules! impl_sample_for_float {
    ($($t:ty),+) => {
        $(
            impl Sample for $t {
                const DOMAIN: DomainKind = DomainKind::FloatingPoint;

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )+
    };
}

impl_sample_for_int!(DomainKind::Unsigned => u8, u16, u32, u64);
impl_sample_for_int!(DomainKind::SignedInteger => i8, i16, i32, i64);
impl_sample_for_float!(f32, f64);

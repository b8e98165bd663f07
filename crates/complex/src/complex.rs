//! The [`Complex`] value type.

use std::cmp::Ordering;
use std::fmt;

/// A complex number, made of a real and an imaginary [`f64`].
///
/// Any pair of floats is a valid [`Complex`], including infinite and NaN components. Nothing is
/// normalized, and arithmetic never panics: non-finite values propagate through the usual
/// IEEE-754 rules.
///
/// [`PartialEq`] compares both components. To compare by magnitude, use
/// [`Complex::cmp_magnitude`] or [`Complex::magnitude_eq`].
///
/// The compound operators (`+=`, `-=`, `*=`, `/=`) go through the [`std::ops`] `*Assign`
/// traits, which return `()`, so they can't be chained. Only [`Complex::set`],
/// [`Complex::set_real`], [`Complex::assign`] and [`Complex::assign_real`] return `&mut Self`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    real: f64,
    imaginary: f64,
}

impl Complex {
    /// `0+0i`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `1+0i`
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// The imaginary unit, `0+1i`.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Assembles a [`Complex`] from its real and imaginary parts.
    #[inline]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Assembles a purely real [`Complex`], with a zero imaginary part.
    #[inline]
    pub const fn from_real(real: f64) -> Self {
        Self::new(real, 0.0)
    }

    /// Returns the real part.
    #[inline]
    pub const fn real(&self) -> f64 {
        self.real
    }

    /// Returns the imaginary part.
    #[inline]
    pub const fn imaginary(&self) -> f64 {
        self.imaginary
    }

    /// Overwrites both parts.
    #[inline]
    pub fn set(&mut self, real: f64, imaginary: f64) -> &mut Self {
        self.real = real;
        self.imaginary = imaginary;
        self
    }

    /// Overwrites the real part, and resets the imaginary part to zero.
    #[inline]
    pub fn set_real(&mut self, real: f64) -> &mut Self {
        self.set(real, 0.0)
    }

    /// Copies both parts of `rhs` into `self`.
    #[inline]
    pub fn assign(&mut self, rhs: Self) -> &mut Self {
        *self = rhs;
        self
    }

    /// Assigns a real scalar, which is the way to clear the imaginary part: `self` becomes
    /// `(scalar, 0)` regardless of its previous value.
    #[inline]
    pub fn assign_real(&mut self, scalar: f64) -> &mut Self {
        *self = Self::from_real(scalar);
        self
    }

    pub(crate) fn real_mut(&mut self) -> &mut f64 {
        &mut self.real
    }

    pub(crate) fn imaginary_mut(&mut self) -> &mut f64 {
        &mut self.imaginary
    }

    /// The magnitude (absolute value), `sqrt(re^2 + im^2)`.
    ///
    /// NaN if either part is NaN, otherwise +Inf if either part is infinite. The sum of squares
    /// is computed directly rather than through [`f64::hypot`], so very large finite parts can
    /// overflow to +Inf.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.real * self.real + self.imaginary * self.imaginary).sqrt()
    }

    /// Alias for [`Complex::magnitude`].
    #[inline]
    pub fn abs(&self) -> f64 {
        self.magnitude()
    }

    /// Orders two values by magnitude. [`None`] if either magnitude is NaN.
    #[inline]
    pub fn cmp_magnitude(&self, other: &Self) -> Option<Ordering> {
        self.magnitude().partial_cmp(&other.magnitude())
    }

    /// Whether both values have the same magnitude (i.e `3+4i` and `5+0i`).
    #[inline]
    pub fn magnitude_eq(&self, other: &Self) -> bool {
        self.magnitude() == other.magnitude()
    }
}

impl fmt::Display for Complex {
    /// Writes `<real><sign><imaginary>i`. The `+` sign is written whenever the imaginary part is
    /// not strictly negative (zero and NaN included); negative values carry their own `-`.
    ///
    /// A precision (`{:.2}`) applies to both parts.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.imaginary < 0.0 { "" } else { "+" };

        match formatter.precision() {
            Some(prec) => write!(
                formatter,
                "{:.prec$}{sign}{:.prec$}i",
                self.real, self.imaginary
            ),
            None => write!(formatter, "{}{sign}{}i", self.real, self.imaginary),
        }
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(real: f64) -> Self {
        Self::from_real(real)
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((real, imaginary): (f64, f64)) -> Self {
        Self::new(real, imaginary)
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(c: Complex) -> Self {
        (c.real, c.imaginary)
    }
}

/// Converts to the magnitude.
impl From<Complex> for f64 {
    #[inline]
    fn from(c: Complex) -> f64 {
        c.magnitude()
    }
}

impl num_traits::Zero for Complex {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }
}

impl num_traits::One for Complex {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

//! [`std::ops`] impls for [`Complex`].
//!
//! Scalars only ever touch the real part when added or subtracted, and scale both parts when
//! multiplied or divided. The one asymmetric case is `scalar - complex`, which also negates the
//! imaginary part.
// the macro below casts every scalar type (f64 included) through `as f64`.
#![allow(clippy::unnecessary_cast)]

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::Complex;

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.real() + rhs.real(), self.imaginary() + rhs.imaginary())
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.add(rhs);
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.real() - rhs.real(), self.imaginary() - rhs.imaginary())
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.sub(rhs);
    }
}

impl Mul for Complex {
    type Output = Self;

    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (self.real(), self.imaginary());
        let (c, d) = (rhs.real(), rhs.imaginary());

        Self::new(a * c - b * d, a * d + b * c)
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul(rhs);
    }
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Add<$scalar> for Complex {
                type Output = Self;

                #[inline]
                fn add(self, rhs: $scalar) -> Self::Output {
                    Self::new(self.real() + rhs as f64, self.imaginary())
                }
            }

            impl Add<Complex> for $scalar {
                type Output = Complex;

                #[inline]
                fn add(self, rhs: Complex) -> Self::Output {
                    Complex::new(self as f64 + rhs.real(), rhs.imaginary())
                }
            }

            impl AddAssign<$scalar> for Complex {
                #[inline]
                fn add_assign(&mut self, rhs: $scalar) {
                    *self.real_mut() += rhs as f64;
                }
            }

            impl Sub<$scalar> for Complex {
                type Output = Self;

                #[inline]
                fn sub(self, rhs: $scalar) -> Self::Output {
                    Self::new(self.real() - rhs as f64, self.imaginary())
                }
            }

            impl Sub<Complex> for $scalar {
                type Output = Complex;

                #[inline]
                fn sub(self, rhs: Complex) -> Self::Output {
                    Complex::new(self as f64 - rhs.real(), -rhs.imaginary())
                }
            }

            impl SubAssign<$scalar> for Complex {
                #[inline]
                fn sub_assign(&mut self, rhs: $scalar) {
                    *self.real_mut() -= rhs as f64;
                }
            }

            impl Mul<$scalar> for Complex {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: $scalar) -> Self::Output {
                    let rhs = rhs as f64;
                    Self::new(self.real() * rhs, self.imaginary() * rhs)
                }
            }

            impl Mul<Complex> for $scalar {
                type Output = Complex;

                #[inline]
                fn mul(self, rhs: Complex) -> Self::Output {
                    let lhs = self as f64;
                    Complex::new(lhs * rhs.real(), lhs * rhs.imaginary())
                }
            }

            impl MulAssign<$scalar> for Complex {
                #[inline]
                fn mul_assign(&mut self, rhs: $scalar) {
                    let rhs = rhs as f64;
                    *self.real_mut() *= rhs;
                    *self.imaginary_mut() *= rhs;
                }
            }

            impl Div<$scalar> for Complex {
                type Output = Self;

                #[inline]
                fn div(self, rhs: $scalar) -> Self::Output {
                    let rhs = rhs as f64;
                    Self::new(self.real() / rhs, self.imaginary() / rhs)
                }
            }

            impl DivAssign<$scalar> for Complex {
                #[inline]
                fn div_assign(&mut self, rhs: $scalar) {
                    let rhs = rhs as f64;
                    *self.real_mut() /= rhs;
                    *self.imaginary_mut() /= rhs;
                }
            }
        )*
    };
}

impl_scalar_ops!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

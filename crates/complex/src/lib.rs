#![deny(clippy::suspicious, clippy::complexity, clippy::perf, clippy::style)]
//! A [`Complex`] number value type, made of a real and an imaginary [`f64`].
//!
//! Supported operations:
//!
//! - arithmetic with other [`Complex`] values and with plain numeric scalars, through the
//!   [`std::ops`] traits (including the compound `*Assign` forms).
//! - the magnitude (`sqrt(re^2 + im^2)`), via [`Complex::magnitude`] or `f64::from`.
//! - text output via [`std::fmt::Display`] (`3-4i`, `3+0i`).
//! - stream-style text input, via [`Complex::read_from`], a reusable [`Scanner`], or
//!   [`str::parse`].
//!
//! With the `serde` feature (on by default), [`Complex`] serializes as `[real, imaginary]`.
pub mod complex;
#[cfg(feature = "serde")]
mod de;
pub mod error;
mod ops;
#[cfg(any(test, feature = "random"))]
mod random;
pub mod read;
#[cfg(feature = "serde")]
mod ser;

pub use crate::complex::Complex;
pub use crate::error::{Component, ReadError};
pub use crate::read::Scanner;

//! Minimal complex arithmetic shared by the numerical exercises.
//!
//! A single explicit `Complex` type with the handful of operations the
//! series evaluator and landscape generators need. Powers of a positive
//! real base use the principal logarithm, so no branch-cut handling is
//! required anywhere in this crate.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A complex number with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// A purely real value.
    pub fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// Squared magnitude. Cheaper than [`Complex::abs`] when only
    /// comparisons are needed.
    pub fn abs_sq(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude `|z|`.
    pub fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn conj(&self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// Multiply by a real scalar.
    pub fn scale(&self, factor: f64) -> Complex {
        Complex::new(self.re * factor, self.im * factor)
    }

    /// Complex exponential `e^z`.
    pub fn exp(&self) -> Complex {
        let magnitude = self.re.exp();
        let (sin, cos) = self.im.sin_cos();
        Complex::new(magnitude * cos, magnitude * sin)
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(self, other: Complex) -> Complex {
        let denom = other.abs_sq();
        Complex::new(
            (self.re * other.re + self.im * other.im) / denom,
            (self.im * other.re - self.re * other.im) / denom,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

/// Raise a positive real `base` to a complex `exponent`.
///
/// Computed as `exp(exponent * ln(base))`. The principal log of a
/// positive real has zero imaginary part, so the result is unambiguous.
pub fn powc(base: f64, exponent: Complex) -> Complex {
    debug_assert!(base > 0.0, "powc requires a positive real base");
    exponent.scale(base.ln()).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);
        let sum = a + b;
        assert!((sum.re - 4.0).abs() < EPS && (sum.im - 1.0).abs() < EPS);
        let product = a * b;
        assert!((product.re - 5.0).abs() < EPS && (product.im - 5.0).abs() < EPS);
        let quotient = product / b;
        assert!((quotient.re - a.re).abs() < EPS && (quotient.im - a.im).abs() < EPS);
    }

    #[test]
    fn test_abs() {
        assert!((Complex::new(3.0, 4.0).abs() - 5.0).abs() < EPS);
        assert!((Complex::new(3.0, 4.0).abs_sq() - 25.0).abs() < EPS);
    }

    #[test]
    fn test_exp_of_imaginary_unit_pi() {
        // e^(iπ) = -1
        let value = Complex::new(0.0, std::f64::consts::PI).exp();
        assert!((value.re + 1.0).abs() < EPS);
        assert!(value.im.abs() < EPS);
    }

    #[test]
    fn test_powc_real_exponent_matches_powf() {
        let value = powc(2.0, Complex::from_real(10.0));
        assert!((value.re - 1024.0).abs() < 1e-9);
        assert!(value.im.abs() < 1e-9);
    }

    #[test]
    fn test_powc_imaginary_exponent_has_unit_magnitude() {
        // |b^(it)| = 1 for real b > 0
        let value = powc(3.0, Complex::new(0.0, 2.5));
        assert!((value.abs() - 1.0).abs() < EPS);
    }
}

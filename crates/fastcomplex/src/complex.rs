use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::{
    capability::{ComplexNumber, ComplexNumberArray},
    error::{ArrayIndex, ComplexResult},
    kernel::{self, Parts},
    operand::Operand,
    ops::{BinaryOp, UnaryOp},
    repr,
};

/// Immutable complex value.
///
/// Every operation returns a new value. Equality and hashing use canonical
/// equality: components compare by bit pattern, except that all values
/// containing a NaN are equal to each other. This makes `Complex` usable as a
/// hash-map key; use [`equal_real_imag`](ComplexNumber::equal_real_imag) for
/// IEEE semantics.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    pub const I: Self = Self::new(0.0, 1.0);

    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// A purely real value; the imaginary part is `+0.0`.
    #[must_use]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// `abs * (cos arg + i sin arg)`.
    #[must_use]
    pub fn from_polar(abs: f64, arg: f64) -> Self {
        kernel::from_polar(abs, arg).into()
    }

    /// Copies slot `index` of an array.
    pub fn from_array<A: ComplexNumberArray + ?Sized>(array: &A, index: impl ArrayIndex) -> ComplexResult<Self> {
        array.get(index)
    }

    /// Applies a named unary operation.
    #[must_use]
    pub fn apply_unary(self, op: UnaryOp) -> Self {
        op.apply(self.parts()).into()
    }

    /// Applies a named binary operation with `self` on the left.
    #[must_use]
    pub fn apply_binary(self, op: BinaryOp, rhs: impl Into<Operand>) -> Self {
        op.apply(self.parts(), rhs.into()).into()
    }

    /// `self` raised to a real or complex exponent.
    #[must_use]
    pub fn pow(self, exponent: impl Into<Operand>) -> Self {
        self.apply_binary(BinaryOp::Pow, exponent)
    }

    /// Logarithm in an arbitrary complex base.
    #[must_use]
    pub fn log_base(self, base: impl Into<Operand>) -> Self {
        kernel::log_base(self.parts(), base.into().parts()).into()
    }

    #[must_use]
    pub fn negate(self) -> Self {
        -self
    }

    #[must_use]
    pub fn conjugate(self) -> Self {
        kernel::conjugate(self.parts()).into()
    }

    /// `1 / self`.
    #[must_use]
    pub fn invert(self) -> Self {
        kernel::invert(self.parts()).into()
    }
}

/// Generates value-returning wrappers for the unary kernel functions.
macro_rules! unary_methods {
    ($($(#[$meta:meta])* $name:ident,)+) => {
        impl Complex {
            $(
                $(#[$meta])*
                #[must_use]
                pub fn $name(self) -> Self {
                    kernel::$name(self.parts()).into()
                }
            )+
        }
    };
}

unary_methods! {
    /// Principal square root; the real part is always `>= 0`.
    sqrt,
    exp,
    /// Principal natural logarithm.
    log,
    /// `log(1 + self)`, accurate for small `self`.
    log1p,
    /// `exp(self) - 1`, accurate for small `self`.
    expm1,
    log10,
    sin,
    cos,
    tan,
    sinh,
    cosh,
    tanh,
    asin,
    acos,
    atan,
    asinh,
    acosh,
    atanh,
}

impl ComplexNumber for Complex {
    #[inline]
    fn real(&self) -> f64 {
        self.re
    }

    #[inline]
    fn imag(&self) -> f64 {
        self.im
    }

    fn snapshot(&self) -> Complex {
        *self
    }
}

impl From<Parts> for Complex {
    #[inline]
    fn from((re, im): Parts) -> Self {
        Self { re, im }
    }
}

impl From<Complex> for Parts {
    #[inline]
    fn from(c: Complex) -> Self {
        (c.re, c.im)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

impl From<i32> for Complex {
    fn from(re: i32) -> Self {
        Self::from_real(f64::from(re))
    }
}

impl From<Operand> for Complex {
    fn from(operand: Operand) -> Self {
        operand.parts().into()
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        kernel::equal(self.parts(), other.parts())
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        kernel::canonical_bits(self.parts()).hash(state);
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&repr::complex_repr(self.parts()))
    }
}

// ============================================================================
// Operators
// ============================================================================

/// Implements a binary operator for `Complex op Complex`, `Complex op f64` and
/// `f64 op Complex`, each through the matching kernel function.
macro_rules! binary_operator {
    ($trait:ident, $method:ident, $complex:ident, $real_rhs:ident, $real_lhs:expr) => {
        impl $trait for Complex {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                kernel::$complex(self.parts(), rhs.parts()).into()
            }
        }

        impl $trait<f64> for Complex {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: f64) -> Self {
                kernel::$real_rhs(self.parts(), rhs).into()
            }
        }

        impl $trait<Complex> for f64 {
            type Output = Complex;

            #[inline]
            fn $method(self, rhs: Complex) -> Complex {
                let real_lhs: fn(f64, Parts) -> Parts = $real_lhs;
                real_lhs(self, rhs.parts()).into()
            }
        }
    };
}

binary_operator!(Add, add, add, add_real, |d, z| kernel::add_real(z, d));
binary_operator!(Sub, sub, subtract, subtract_real, kernel::real_subtract);
binary_operator!(Mul, mul, multiply, multiply_real, |d, z| kernel::multiply_real(z, d));
binary_operator!(Div, div, divide, divide_real, kernel::real_divide);

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        kernel::negate(self.parts()).into()
    }
}

impl num_traits::Zero for Complex {
    fn zero() -> Self {
        Self::ZERO
    }

    /// True for `+0 + 0i` and every signed-zero variant.
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl num_traits::One for Complex {
    fn one() -> Self {
        Self::ONE
    }
}

impl num_traits::Inv for Complex {
    type Output = Self;

    fn inv(self) -> Self {
        self.invert()
    }
}

impl num_traits::Pow<f64> for Complex {
    type Output = Self;

    fn pow(self, exponent: f64) -> Self {
        kernel::pow_real(self.parts(), exponent).into()
    }
}

impl num_traits::Pow<Complex> for Complex {
    type Output = Self;

    fn pow(self, exponent: Self) -> Self {
        kernel::pow(self.parts(), exponent.parts()).into()
    }
}

#[cfg(test)]
mod tests {
    use num_traits::{Inv, One, Pow, Zero};

    use super::*;

    #[test]
    fn operators_match_kernel() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -4.0);
        assert_eq!(a + b, Complex::new(4.0, -2.0));
        assert_eq!(a - b, Complex::new(-2.0, 6.0));
        assert_eq!(a * b, Complex::new(11.0, 2.0));
        let c = Complex::new(1.0, 1.0);
        assert_eq!((a * c) / c, a);
        assert_eq!(-a, Complex::new(-1.0, -2.0));
    }

    #[test]
    fn real_operands_on_either_side() {
        let z = Complex::new(2.0, -0.0);
        assert_eq!(z + 1.0, Complex::new(3.0, -0.0));
        assert_eq!(1.0 + z, Complex::new(3.0, -0.0));
        assert_eq!(5.0 - Complex::new(1.0, 2.0), Complex::new(4.0, -2.0));
        assert_eq!(Complex::new(1.0, 2.0) - 5.0, Complex::new(-4.0, 2.0));
        assert_eq!(2.0 * Complex::new(1.0, 2.0), Complex::new(2.0, 4.0));
        assert_eq!(Complex::new(2.0, 4.0) / 2.0, Complex::new(1.0, 2.0));
        assert_eq!(1.0 / Complex::I, Complex::new(0.0, -1.0));
    }

    #[test]
    fn equality_is_canonical() {
        assert_ne!(Complex::new(0.0, 0.0), Complex::new(-0.0, 0.0));
        assert_eq!(Complex::new(f64::NAN, 1.0), Complex::new(2.0, -f64::NAN));
        assert!(!Complex::new(f64::NAN, 0.0).equal_real_imag(&Complex::new(f64::NAN, 0.0)));
    }

    #[test]
    fn num_traits_surface() {
        assert!(Complex::zero().is_zero());
        assert!(Complex::new(-0.0, 0.0).is_zero());
        assert_eq!(Complex::one(), Complex::ONE);
        assert_eq!(Complex::new(0.0, 2.0).inv(), Complex::new(0.0, -0.5));
        let squared = Pow::pow(Complex::I, 2.0);
        assert!((squared.real() + 1.0).abs() < 1e-15);
        assert!(squared.imag().abs() < 1e-15);
        let i_to_i = Pow::pow(Complex::I, Complex::I);
        assert!((i_to_i.real() - (-std::f64::consts::FRAC_PI_2).exp()).abs() < 1e-15);
    }

    #[test]
    fn pow_accepts_every_operand_shape() {
        let z = Complex::new(1.5, 0.5);
        assert_eq!(z.pow(2.0), z.pow(Complex::from_real(2.0)));
        assert_eq!(z.pow(2), z.pow(2.0));
        assert_eq!(z.pow(&Complex::I), z.pow(Complex::I));
    }

    #[test]
    fn display_uses_canonical_text() {
        assert_eq!(Complex::new(1.0, -2.5).to_string(), "1.0 - 2.5i");
        assert_eq!(Complex::I.to_string(), "1.0i");
        assert_eq!(Complex::from_real(-0.0).to_string(), "-0.0");
    }
}

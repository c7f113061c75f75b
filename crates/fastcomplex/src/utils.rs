//! Free-function form of every operation.
//!
//! Each function accepts any operand shape (a real number, a
//! [`Complex`], a `(re, im)` pair, or a reference to any
//! [`ComplexNumber`](crate::ComplexNumber)) and returns a new [`Complex`]. An
//! array element is passed as `array.get(i)?`.
//!
//! ```
//! use fastcomplex::{Complex, utils};
//!
//! let z = utils::divide(1.0, Complex::new(0.0, 2.0));
//! assert_eq!(z, Complex::new(0.0, -0.5));
//! assert_eq!(utils::sqrt(-4.0), Complex::new(0.0, 2.0));
//! ```

use crate::{
    complex::Complex,
    config::Tolerance,
    kernel,
    operand::Operand,
    ops::{BinaryOp, UnaryOp},
};

/// Generates free unary functions over any operand.
macro_rules! unary_functions {
    ($($(#[$meta:meta])* $name:ident => $op:ident,)+) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $name(z: impl Into<Operand>) -> Complex {
                UnaryOp::$op.apply(z.into().parts()).into()
            }
        )+
    };
}

/// Generates free binary functions over any pair of operands.
macro_rules! binary_functions {
    ($($(#[$meta:meta])* $name:ident => $op:ident,)+) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $name(a: impl Into<Operand>, b: impl Into<Operand>) -> Complex {
                BinaryOp::$op.apply_operands(a.into(), b.into()).into()
            }
        )+
    };
}

unary_functions! {
    negate => Negate,
    conjugate => Conjugate,
    /// `1 / z`.
    invert => Invert,
    /// Principal square root.
    sqrt => Sqrt,
    exp => Exp,
    /// Principal natural logarithm.
    log => Log,
    /// `log(1 + z)`, accurate for small `z`.
    log1p => Log1p,
    /// `exp(z) - 1`, accurate for small `z`.
    expm1 => Expm1,
    log10 => Log10,
    sin => Sin,
    cos => Cos,
    tan => Tan,
    sinh => Sinh,
    cosh => Cosh,
    tanh => Tanh,
    asin => Asin,
    acos => Acos,
    atan => Atan,
    asinh => Asinh,
    acosh => Acosh,
    atanh => Atanh,
}

binary_functions! {
    add => Add,
    subtract => Subtract,
    multiply => Multiply,
    divide => Divide,
    /// `a ^ b`.
    pow => Pow,
}

/// Logarithm of `z` in base `base`.
#[must_use]
pub fn log_base(z: impl Into<Operand>, base: impl Into<Operand>) -> Complex {
    kernel::log_base(z.into().parts(), base.into().parts()).into()
}

/// `(abs, arg)` of `z`.
#[must_use]
pub fn polar(z: impl Into<Operand>) -> (f64, f64) {
    let z = z.into().parts();
    (kernel::abs(z), kernel::arg(z))
}

/// The complex number with modulus `r` and argument `phi`.
///
/// Unlike [`Complex::from_polar`], zero and non-finite radii keep the signs a
/// caller expects on the axes: `rect(0, phi)` is `+0 + 0i`, a NaN radius on an
/// axis yields a signed zero there, an infinite radius along an axis yields a
/// signed zero for the other component, and `rect(inf, NaN)` is `inf + NaNi`.
#[must_use]
pub fn rect(r: f64, phi: f64) -> Complex {
    if r.is_infinite() && phi.is_nan() {
        return Complex::new(f64::INFINITY, f64::NAN);
    }
    Complex::new(rect_component(r, phi.cos()), rect_component(r, phi.sin()))
}

fn rect_component(radius: f64, trig: f64) -> f64 {
    if radius == 0.0 {
        return 0.0;
    }
    if radius.is_nan() && trig == 0.0 {
        return 0.0f64.copysign(trig);
    }
    if radius.is_infinite() && trig == 0.0 {
        return 0.0f64.copysign(radius.signum() * trig.signum());
    }
    radius * trig
}

/// Whether `a` and `b` are within `tolerance` of each other.
///
/// Exactly equal values (IEEE) are always close; otherwise any non-finite
/// component makes the pair not close. The distance `|a - b|` is compared
/// against `max(rel_tol * max(|a|, |b|), abs_tol)`.
#[must_use]
pub fn is_close(a: impl Into<Operand>, b: impl Into<Operand>, tolerance: &Tolerance) -> bool {
    let a = a.into().parts();
    let b = b.into().parts();
    if kernel::equal_real_imag(a, b) {
        return true;
    }
    if !kernel::is_finite(a) || !kernel::is_finite(b) {
        return false;
    }
    let diff = kernel::abs(kernel::subtract(a, b));
    let limit = (tolerance.rel_tol() * kernel::abs(a).max(kernel::abs(b))).max(tolerance.abs_tol());
    diff <= limit
}

/// IEEE component-wise equality.
#[must_use]
pub fn equal_real_imag(a: impl Into<Operand>, b: impl Into<Operand>) -> bool {
    kernel::equal_real_imag(a.into().parts(), b.into().parts())
}

/// Bit-pattern equality.
#[must_use]
pub fn long_bits_equal(a: impl Into<Operand>, b: impl Into<Operand>) -> bool {
    kernel::long_bits_equal(a.into().parts(), b.into().parts())
}

/// Canonical equality, consistent with [`hash_code`].
#[must_use]
pub fn equal(a: impl Into<Operand>, b: impl Into<Operand>) -> bool {
    kernel::equal(a.into().parts(), b.into().parts())
}

#[must_use]
pub fn hash_code(z: impl Into<Operand>) -> i32 {
    kernel::hash_code(z.into().parts())
}

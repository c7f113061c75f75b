//! Numerically robust complex formulas over raw `(re, im)` pairs.
//!
//! Every representation in the crate ([`Complex`](crate::Complex),
//! [`ComplexBuffer`](crate::ComplexBuffer) and the slots of
//! [`ComplexArray`](crate::ComplexArray)) extracts its operands as plain `f64`
//! pairs and evaluates them here, so the three can never diverge numerically.
//!
//! The functions are pure: no allocation, no state, safe to call from any
//! number of threads. Nothing here signals errors; division by zero, overflow
//! and invalid operations produce infinities and NaNs exactly as the selected
//! formula dictates.
//!
//! ## Branch selection
//!
//! Several operations pick one of two algebraic rearrangements depending on
//! operand magnitudes so intermediates stay in range:
//!
//! - division uses Smith's algorithm, dividing through by whichever divisor
//!   component has the larger magnitude
//! - square root computes an auxiliary magnitude from the larger component and
//!   then selects the root with non-negative real part
//! - `log1p` and `expm1` switch to cancellation-free identities for small
//!   arguments
//!
//! The inverse trigonometric and hyperbolic functions are compositions of the
//! primitives in this module rather than independent formulas.

/// A complex value as `(re, im)`.
pub type Parts = (f64, f64);

/// `0 + 0i`.
pub const ZERO: Parts = (0.0, 0.0);
/// `1 + 0i`.
pub const ONE: Parts = (1.0, 0.0);
/// The imaginary unit `0 + 1i`.
pub const I: Parts = (0.0, 1.0);

/// Above this modulus `log1p` evaluates `log(1 + c)` directly.
const LOG1P_DIRECT_THRESHOLD: f64 = 0.375;

/// Above this modulus `expm1` evaluates `exp(c) - 1` directly.
const EXPM1_DIRECT_THRESHOLD: f64 = 0.5;

/// Bit pattern every NaN-containing value hashes as.
const CANONICAL_NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

// ============================================================================
// Classification
// ============================================================================

/// Returns true when either component is NaN.
#[inline]
#[must_use]
pub fn is_nan((re, im): Parts) -> bool {
    re.is_nan() || im.is_nan()
}

/// Returns true when either component is infinite and neither is NaN.
///
/// `is_nan` and `is_infinite` are never both true for the same value.
#[inline]
#[must_use]
pub fn is_infinite(z: Parts) -> bool {
    !is_nan(z) && (z.0.is_infinite() || z.1.is_infinite())
}

/// Returns true when both components are finite.
#[inline]
#[must_use]
pub fn is_finite((re, im): Parts) -> bool {
    re.is_finite() && im.is_finite()
}

/// Modulus of `z`.
///
/// NaN if either component is NaN, even when the other is infinite:
/// `hypot(inf, NaN)` is `inf`, which would hide the NaN.
#[inline]
#[must_use]
pub fn abs(z: Parts) -> f64 {
    if is_nan(z) {
        return f64::NAN;
    }
    z.0.hypot(z.1)
}

/// Argument of `z` in `[-pi, pi]`.
#[inline]
#[must_use]
pub fn arg((re, im): Parts) -> f64 {
    im.atan2(re)
}

/// Builds a value from modulus and argument.
#[inline]
#[must_use]
pub fn from_polar(abs: f64, arg: f64) -> Parts {
    (abs * arg.cos(), abs * arg.sin())
}

// ============================================================================
// Elementary arithmetic
// ============================================================================

#[inline]
#[must_use]
pub fn add((a_re, a_im): Parts, (b_re, b_im): Parts) -> Parts {
    (a_re + b_re, a_im + b_im)
}

/// Adds a real number; the imaginary part is passed through untouched.
#[inline]
#[must_use]
pub fn add_real((re, im): Parts, d: f64) -> Parts {
    (re + d, im)
}

#[inline]
#[must_use]
pub fn subtract((a_re, a_im): Parts, (b_re, b_im): Parts) -> Parts {
    (a_re - b_re, a_im - b_im)
}

/// Subtracts a real number; the imaginary part is passed through untouched.
#[inline]
#[must_use]
pub fn subtract_real((re, im): Parts, d: f64) -> Parts {
    (re - d, im)
}

/// Computes `d - z` for a real `d`.
#[inline]
#[must_use]
pub fn real_subtract(d: f64, (re, im): Parts) -> Parts {
    (d - re, -im)
}

#[inline]
#[must_use]
pub fn multiply((a_re, a_im): Parts, (b_re, b_im): Parts) -> Parts {
    (a_re * b_re - a_im * b_im, a_im * b_re + a_re * b_im)
}

/// Scales both components by `d`.
#[inline]
#[must_use]
pub fn multiply_real((re, im): Parts, d: f64) -> Parts {
    (re * d, im * d)
}

/// Divides `a` by `b` with Smith's algorithm.
///
/// Dividing through by the larger divisor component keeps `r` within
/// `[-1, 1]`, so the denominator neither overflows nor underflows when the
/// divisor components differ greatly in magnitude.
#[inline]
#[must_use]
pub fn divide((a_re, a_im): Parts, (b_re, b_im): Parts) -> Parts {
    if b_re.abs() > b_im.abs() {
        let r = b_im / b_re;
        let w = 1.0 / (b_re + b_im * r);
        ((a_re + a_im * r) * w, (a_im - a_re * r) * w)
    } else {
        let r = b_re / b_im;
        let w = 1.0 / (b_im + b_re * r);
        ((a_re * r + a_im) * w, (a_im * r - a_re) * w)
    }
}

/// Divides both components by `d`.
#[inline]
#[must_use]
pub fn divide_real((re, im): Parts, d: f64) -> Parts {
    (re / d, im / d)
}

/// Computes `d / z` for a real `d` using the same branch structure as
/// [`divide`] with the dividend fixed to `(d, 0)`.
#[inline]
#[must_use]
pub fn real_divide(d: f64, (re, im): Parts) -> Parts {
    if re.abs() > im.abs() {
        let r = im / re;
        let w = d / (re + im * r);
        (w, -r * w)
    } else {
        let r = re / im;
        let w = d / (im + re * r);
        (r * w, -w)
    }
}

#[inline]
#[must_use]
pub fn negate((re, im): Parts) -> Parts {
    (-re, -im)
}

#[inline]
#[must_use]
pub fn conjugate((re, im): Parts) -> Parts {
    (re, -im)
}

/// `1 / z`.
#[inline]
#[must_use]
pub fn invert(z: Parts) -> Parts {
    real_divide(1.0, z)
}

// ============================================================================
// Roots, exponentials and logarithms
// ============================================================================

/// Auxiliary magnitude `w` used by [`sqrt`], computed from whichever
/// component is larger so the intermediate ratio stays within `[-1, 1]`.
#[must_use]
pub(crate) fn sqrt_auxiliary((re, im): Parts) -> f64 {
    if re == 0.0 && im == 0.0 {
        0.0
    } else if re.abs() >= im.abs() {
        let im_div_re = im / re;
        re.abs().sqrt() * (0.5 + 0.5 * (1.0 + im_div_re * im_div_re).sqrt()).sqrt()
    } else {
        let re_div_im = re / im;
        im.abs().sqrt() * (0.5 * (re_div_im.abs() + (1.0 + re_div_im * re_div_im).sqrt())).sqrt()
    }
}

/// Principal square root: non-negative real part, imaginary part signed like
/// the input's imaginary part.
///
/// An all-zero input of either sign yields `+0 + 0i`. On the negative real
/// axis a `-0.0` imaginary part compares `>= 0` and selects the upper root.
#[must_use]
pub fn sqrt(z: Parts) -> Parts {
    let w = sqrt_auxiliary(z);
    let (re, im) = z;
    if w == 0.0 {
        ZERO
    } else if re >= 0.0 {
        (w, im / (2.0 * w))
    } else if im >= 0.0 {
        (im.abs() / (2.0 * w), w)
    } else {
        (im.abs() / (2.0 * w), -w)
    }
}

#[inline]
#[must_use]
pub fn exp((re, im): Parts) -> Parts {
    let m = re.exp();
    (m * im.cos(), m * im.sin())
}

/// Principal natural logarithm `(ln |z|, arg z)`.
#[inline]
#[must_use]
pub fn log(z: Parts) -> Parts {
    (abs(z).ln(), arg(z))
}

/// `log(1 + z)`, accurate for `z` near zero.
///
/// For small `|z|` the real part is `0.5 * ln_1p(2 re + |z|^2)`, which never
/// forms `1 + re` and so keeps the digits that `log(1 + z)` loses.
#[must_use]
pub fn log1p(z: Parts) -> Parts {
    let rho = abs(z);
    let shifted = add_real(z, 1.0);
    if rho > LOG1P_DIRECT_THRESHOLD {
        return log(shifted);
    }
    (0.5 * (2.0 * z.0 + rho * rho).ln_1p(), arg(shifted))
}

/// `exp(z) - 1`, accurate for `z` near zero.
///
/// For small `|z|`, with `s = 2 sin(im/2)^2 = 1 - cos(im)`:
///
/// ```text
/// expm1(z) = expm1(re) * (1 - s) - s + i * sin(im) * (1 + expm1(re))
/// ```
#[must_use]
pub fn expm1(z: Parts) -> Parts {
    if abs(z) > EXPM1_DIRECT_THRESHOLD {
        return subtract_real(exp(z), 1.0);
    }
    let (re, im) = z;
    let expm1_re = re.exp_m1();
    let half_sin = (im / 2.0).sin();
    let s = 2.0 * half_sin * half_sin;
    (expm1_re * (1.0 - s) - s, im.sin() * (1.0 + expm1_re))
}

/// `base^exponent` for a real exponent, as `exp(exponent * log(base))`.
#[inline]
#[must_use]
pub fn pow_real(base: Parts, exponent: f64) -> Parts {
    exp(multiply_real(log(base), exponent))
}

/// `base^exponent` for a complex exponent, as `exp(exponent * log(base))`.
#[inline]
#[must_use]
pub fn pow(base: Parts, exponent: Parts) -> Parts {
    exp(multiply(log(base), exponent))
}

/// Base-10 logarithm.
#[must_use]
pub fn log10(z: Parts) -> Parts {
    divide_real(log(z), std::f64::consts::LN_10)
}

/// Logarithm of `z` in an arbitrary complex `base`.
#[must_use]
pub fn log_base(z: Parts, base: Parts) -> Parts {
    divide(log(z), log(base))
}

// ============================================================================
// Trigonometric and hyperbolic
// ============================================================================

#[must_use]
pub fn sin((re, im): Parts) -> Parts {
    (re.sin() * im.cosh(), re.cos() * im.sinh())
}

#[must_use]
pub fn cos((re, im): Parts) -> Parts {
    (re.cos() * im.cosh(), -re.sin() * im.sinh())
}

/// Tangent via the double-angle form with one shared denominator.
#[must_use]
pub fn tan((re, im): Parts) -> Parts {
    let re2 = re * 2.0;
    let im2 = im * 2.0;
    let d = re2.cos() + im2.cosh();
    (re2.sin() / d, im2.sinh() / d)
}

#[must_use]
pub fn sinh((re, im): Parts) -> Parts {
    (re.sinh() * im.cos(), re.cosh() * im.sin())
}

#[must_use]
pub fn cosh((re, im): Parts) -> Parts {
    (re.cosh() * im.cos(), re.sinh() * im.sin())
}

/// Hyperbolic tangent via the double-angle form with one shared denominator.
#[must_use]
pub fn tanh((re, im): Parts) -> Parts {
    let re2 = re * 2.0;
    let im2 = im * 2.0;
    let d = re2.cosh() + im2.cos();
    (re2.sinh() / d, im2.sin() / d)
}

// ============================================================================
// Inverse trigonometric and hyperbolic
// ============================================================================

/// `asin(z) = -i * log(i z + sqrt(1 - z^2))`.
#[must_use]
pub fn asin(z: Parts) -> Parts {
    let root = sqrt(real_subtract(1.0, multiply(z, z)));
    let inner = add(root, multiply(z, I));
    negate(multiply(log(inner), I))
}

/// `acos(z) = -i * log(z + i sqrt(1 - z^2))`.
#[must_use]
pub fn acos(z: Parts) -> Parts {
    let root = sqrt(real_subtract(1.0, multiply(z, z)));
    let inner = add(multiply(root, I), z);
    negate(multiply(log(inner), I))
}

/// `atan(z) = (i / 2) * log((i + z) / (i - z))`.
#[must_use]
pub fn atan(z: Parts) -> Parts {
    let ratio = divide(add(z, I), subtract(I, z));
    multiply(multiply_real(log(ratio), 0.5), I)
}

/// `acosh(z) = i * acos(z)`.
#[must_use]
pub fn acosh(z: Parts) -> Parts {
    multiply(acos(z), I)
}

/// `asinh(z) = -i * asin(i z)`.
#[must_use]
pub fn asinh(z: Parts) -> Parts {
    negate(multiply(asin(multiply(z, I)), I))
}

/// `atanh(z) = -i * atan(i z)`.
#[must_use]
pub fn atanh(z: Parts) -> Parts {
    negate(multiply(atan(multiply(z, I)), I))
}

// ============================================================================
// Equality and hashing
// ============================================================================

/// Component-wise IEEE `==`: NaN never equals itself, `+0.0 == -0.0`.
#[expect(clippy::float_cmp, reason = "IEEE equality is the point of this relation")]
#[inline]
#[must_use]
pub fn equal_real_imag(a: Parts, b: Parts) -> bool {
    a.0 == b.0 && a.1 == b.1
}

/// Component-wise equality of IEEE-754 bit patterns: signed zeros and NaN
/// payloads are all distinguished.
#[inline]
#[must_use]
pub fn long_bits_equal(a: Parts, b: Parts) -> bool {
    a.0.to_bits() == b.0.to_bits() && a.1.to_bits() == b.1.to_bits()
}

/// Canonical equality: bit-pattern equality, except that every
/// NaN-containing value equals every other NaN-containing value.
///
/// This is the relation hash tables need, and it agrees with [`hash_code`]
/// and [`canonical_bits`].
#[inline]
#[must_use]
pub fn equal(a: Parts, b: Parts) -> bool {
    (is_nan(a) && is_nan(b)) || long_bits_equal(a, b)
}

/// Bit patterns that represent `z` under canonical equality.
///
/// All NaN-containing values collapse to one pattern in both lanes.
#[inline]
#[must_use]
pub fn canonical_bits(z: Parts) -> (u64, u64) {
    if is_nan(z) {
        (CANONICAL_NAN_BITS, CANONICAL_NAN_BITS)
    } else {
        (z.0.to_bits(), z.1.to_bits())
    }
}

/// Stable 32-bit hash consistent with [`equal`].
///
/// Mixes the low word, high word and top 16 bits of each canonical component
/// with multiplier 17 and seed 7, using wrapping arithmetic.
#[expect(clippy::cast_possible_truncation, reason = "each step mixes in the low 32 bits of a word")]
#[must_use]
pub fn hash_code(z: Parts) -> i32 {
    let (x1, x2) = canonical_bits(z);
    let mut hash: i32 = 7;
    for bits in [x1, x2] {
        for word in [bits, bits >> 32, bits >> 48] {
            hash = hash.wrapping_mul(17).wrapping_add((word as u32).cast_signed());
        }
    }
    hash
}

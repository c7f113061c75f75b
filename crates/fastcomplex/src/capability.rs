//! Read capabilities shared by every complex representation.
//!
//! Two small traits describe what a caller can read from a value:
//!
//! - [`ComplexNumber`] — one complex value (`Complex`, `ComplexBuffer`,
//!   `SlotMut`)
//! - [`ComplexNumberArray`] — one slot of a complex array, selected by index
//!   (`ComplexArray`, `ArrayChunkMut`)
//!
//! Implementors supply only raw component access. Every derived quantity
//! (modulus, argument, classification, canonical text, equality and hashing)
//! is a provided method evaluated by [`kernel`](crate::kernel), so all
//! representations answer identically for identical components.

use crate::{
    complex::Complex,
    error::{ArrayIndex, ComplexResult},
    kernel::{self, Parts},
    repr,
};

/// Scalar-readable complex value.
pub trait ComplexNumber {
    /// Real part.
    fn real(&self) -> f64;

    /// Imaginary part.
    fn imag(&self) -> f64;

    /// Both components as `(re, im)`.
    #[inline]
    fn parts(&self) -> Parts {
        (self.real(), self.imag())
    }

    /// Modulus; NaN whenever [`is_nan`](Self::is_nan) is true.
    fn abs(&self) -> f64 {
        kernel::abs(self.parts())
    }

    /// Argument in `[-pi, pi]`.
    fn arg(&self) -> f64 {
        kernel::arg(self.parts())
    }

    /// Whether either component is NaN.
    fn is_nan(&self) -> bool {
        kernel::is_nan(self.parts())
    }

    /// Whether either component is infinite while neither is NaN.
    fn is_infinite(&self) -> bool {
        kernel::is_infinite(self.parts())
    }

    /// Whether both components are finite.
    fn is_finite(&self) -> bool {
        kernel::is_finite(self.parts())
    }

    /// Canonical text, see [`repr`](crate::repr).
    fn canonical_string(&self) -> String {
        repr::complex_repr(self.parts())
    }

    /// Immutable snapshot of the current value.
    fn snapshot(&self) -> Complex {
        Complex::from(self.parts())
    }

    /// IEEE component-wise equality.
    fn equal_real_imag<C: ComplexNumber + ?Sized>(&self, other: &C) -> bool {
        kernel::equal_real_imag(self.parts(), other.parts())
    }

    /// Bit-pattern equality.
    fn long_bits_equal<C: ComplexNumber + ?Sized>(&self, other: &C) -> bool {
        kernel::long_bits_equal(self.parts(), other.parts())
    }

    /// Canonical equality (all NaNs equal), consistent with
    /// [`hash_code`](Self::hash_code).
    fn equal<C: ComplexNumber + ?Sized>(&self, other: &C) -> bool {
        kernel::equal(self.parts(), other.parts())
    }

    /// Stable hash consistent with [`equal`](Self::equal).
    fn hash_code(&self) -> i32 {
        kernel::hash_code(self.parts())
    }
}

/// Indexed-readable complex array stored as parallel component slices.
///
/// Every indexed accessor validates `0 <= index < len()` and reports a
/// violation as [`ComplexError::IndexOutOfRange`](crate::ComplexError).
pub trait ComplexNumberArray {
    /// Real components of every slot.
    fn real_parts(&self) -> &[f64];

    /// Imaginary components of every slot.
    fn imag_parts(&self) -> &[f64];

    /// Number of slots.
    #[inline]
    fn len(&self) -> usize {
        self.real_parts().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Both components of slot `index`.
    #[inline]
    fn parts(&self, index: impl ArrayIndex) -> ComplexResult<Parts> {
        let i = index.checked_index(self.len())?;
        Ok((self.real_parts()[i], self.imag_parts()[i]))
    }

    fn real(&self, index: impl ArrayIndex) -> ComplexResult<f64> {
        let i = index.checked_index(self.len())?;
        Ok(self.real_parts()[i])
    }

    fn imag(&self, index: impl ArrayIndex) -> ComplexResult<f64> {
        let i = index.checked_index(self.len())?;
        Ok(self.imag_parts()[i])
    }

    /// Immutable snapshot of slot `index`.
    ///
    /// This is how an array element is passed as an operand: the value is
    /// copied out, so later mutation of the slot cannot affect it.
    fn get(&self, index: impl ArrayIndex) -> ComplexResult<Complex> {
        self.parts(index).map(Complex::from)
    }

    fn abs(&self, index: impl ArrayIndex) -> ComplexResult<f64> {
        self.parts(index).map(kernel::abs)
    }

    fn arg(&self, index: impl ArrayIndex) -> ComplexResult<f64> {
        self.parts(index).map(kernel::arg)
    }

    fn is_nan(&self, index: impl ArrayIndex) -> ComplexResult<bool> {
        self.parts(index).map(kernel::is_nan)
    }

    fn is_infinite(&self, index: impl ArrayIndex) -> ComplexResult<bool> {
        self.parts(index).map(kernel::is_infinite)
    }

    fn is_finite(&self, index: impl ArrayIndex) -> ComplexResult<bool> {
        self.parts(index).map(kernel::is_finite)
    }

    fn canonical_string(&self, index: impl ArrayIndex) -> ComplexResult<String> {
        self.parts(index).map(repr::complex_repr)
    }

    fn hash_code(&self, index: impl ArrayIndex) -> ComplexResult<i32> {
        self.parts(index).map(kernel::hash_code)
    }
}

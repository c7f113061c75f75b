use std::fmt;

use crate::{
    capability::{ComplexNumber, ComplexNumberArray},
    complex::Complex,
    error::{ArrayIndex, ComplexResult},
    in_place::ComplexSlot,
    kernel::Parts,
    repr,
};

/// A single mutable complex slot used as an accumulator.
///
/// All operations come from [`ComplexSlot`] and mutate the buffer in place.
/// Equality between buffers is not implemented; compare explicitly with one
/// of the [`ComplexNumber`] relations.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ComplexBuffer {
    re: f64,
    im: f64,
}

impl ComplexBuffer {
    #[must_use]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// A buffer holding a real number (`im = +0.0`).
    #[must_use]
    pub fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// A buffer initialized from slot `index` of an array.
    pub fn from_array<A: ComplexNumberArray + ?Sized>(array: &A, index: impl ArrayIndex) -> ComplexResult<Self> {
        array.parts(index).map(Self::from)
    }

    /// Immutable copy of the current value.
    #[must_use]
    pub fn get(&self) -> Complex {
        self.snapshot()
    }
}

impl ComplexNumber for ComplexBuffer {
    #[inline]
    fn real(&self) -> f64 {
        self.re
    }

    #[inline]
    fn imag(&self) -> f64 {
        self.im
    }
}

impl ComplexSlot for ComplexBuffer {
    #[inline]
    fn set(&mut self, re: f64, im: f64) -> &mut Self {
        self.re = re;
        self.im = im;
        self
    }
}

impl From<Parts> for ComplexBuffer {
    fn from((re, im): Parts) -> Self {
        Self { re, im }
    }
}

impl<C: ComplexNumber + ?Sized> From<&C> for ComplexBuffer {
    fn from(c: &C) -> Self {
        c.parts().into()
    }
}

impl From<Complex> for ComplexBuffer {
    fn from(c: Complex) -> Self {
        c.parts().into()
    }
}

impl fmt::Display for ComplexBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&repr::complex_repr(self.parts()))
    }
}

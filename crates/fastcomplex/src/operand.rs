use crate::{capability::ComplexNumber, kernel::Parts};

/// Second operand of a binary operation.
///
/// Operations accept a plain real number, any [`ComplexNumber`], or an array
/// element (via [`ComplexNumberArray::get`](crate::ComplexNumberArray::get)).
/// All of them convert into an `Operand`, which holds a copy of the
/// components taken at the call boundary. Real operands stay distinct from
/// complex ones because their formulas differ: adding a real leaves the
/// imaginary part untouched bit-for-bit, and dividing by a real is a plain
/// per-component division rather than Smith's algorithm.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Operand {
    /// A real number.
    Real(f64),
    /// A complex number as `(re, im)`.
    Complex(Parts),
}

impl Operand {
    /// Components of the operand; a real `d` is `(d, +0.0)`.
    #[must_use]
    pub fn parts(self) -> Parts {
        match self {
            Self::Real(d) => (d, 0.0),
            Self::Complex(z) => z,
        }
    }

    /// Short label used by tracers.
    #[must_use]
    pub fn kind(self) -> &'static str {
        match self {
            Self::Real(_) => "real",
            Self::Complex(_) => "complex",
        }
    }
}

impl From<f64> for Operand {
    fn from(d: f64) -> Self {
        Self::Real(d)
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Self::Real(f64::from(x))
    }
}

impl From<Parts> for Operand {
    fn from(z: Parts) -> Self {
        Self::Complex(z)
    }
}

impl From<crate::Complex> for Operand {
    fn from(c: crate::Complex) -> Self {
        Self::Complex(c.parts())
    }
}

impl<C: ComplexNumber + ?Sized> From<&C> for Operand {
    fn from(c: &C) -> Self {
        Self::Complex(c.parts())
    }
}

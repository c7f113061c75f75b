//! The in-place operation surface shared by every mutable slot.
//!
//! [`ComplexSlot`] is implemented by the single-slot
//! [`ComplexBuffer`](crate::ComplexBuffer) and by
//! [`SlotMut`](crate::array::SlotMut), the cursor over one element of a
//! [`ComplexArray`](crate::ComplexArray). Every in-place composition is
//! written once here as a provided method.
//!
//! Operands are converted into an [`Operand`] before the slot is written, so a
//! value read from anywhere (including the slot's own array) is a snapshot by
//! the time the first component is stored. Multi-step compositions (`pow`)
//! therefore never observe their own partial results through the operand.

use crate::{
    capability::{ComplexNumber, ComplexNumberArray},
    error::{ArrayIndex, ComplexResult},
    kernel::Parts,
    operand::Operand,
    ops::{BinaryOp, UnaryOp},
};

/// Generates `*_in_place` provided methods for unary operations.
macro_rules! unary_in_place {
    ($($(#[$meta:meta])* $name:ident => $op:ident,)+) => {
        $(
            $(#[$meta])*
            fn $name(&mut self) -> &mut Self {
                self.unary_in_place(UnaryOp::$op)
            }
        )+
    };
}

/// Generates `*_in_place` provided methods for binary operations.
macro_rules! binary_in_place {
    ($($(#[$meta:meta])* $name:ident => $op:ident,)+) => {
        $(
            $(#[$meta])*
            fn $name(&mut self, rhs: impl Into<Operand>) -> &mut Self {
                self.binary_in_place(BinaryOp::$op, rhs)
            }
        )+
    };
}

/// A mutable complex slot.
///
/// Binary operations take three operand shapes: a real number, any
/// [`ComplexNumber`], or an element of an indexed array. The last is passed
/// either as `array.get(j)?` or through
/// [`binary_in_place_from_array`](Self::binary_in_place_from_array).
///
/// Every method stores its result into the slot and returns `&mut Self` for
/// chaining:
///
/// ```
/// use fastcomplex::{ComplexBuffer, ComplexNumber, ComplexSlot};
///
/// let mut acc = ComplexBuffer::new(1.0, 1.0);
/// acc.multiply_in_place(2.0).add_in_place((0.0, -2.0)).sqrt_in_place();
/// assert_eq!(acc.parts(), (2.0f64.sqrt(), 0.0));
/// ```
pub trait ComplexSlot: ComplexNumber {
    /// Overwrites both components.
    fn set(&mut self, re: f64, im: f64) -> &mut Self;

    #[inline]
    fn set_parts(&mut self, (re, im): Parts) -> &mut Self {
        self.set(re, im)
    }

    /// Overwrites the slot with a real number (`im = +0.0`).
    #[inline]
    fn set_real(&mut self, re: f64) -> &mut Self {
        self.set(re, 0.0)
    }

    /// Overwrites the slot with a copy of any operand.
    fn assign(&mut self, value: impl Into<Operand>) -> &mut Self {
        self.set_parts(value.into().parts())
    }

    /// Replaces the slot with `f(current)`.
    fn map_in_place(&mut self, f: impl FnOnce(Parts) -> Parts) -> &mut Self {
        let next = f(self.parts());
        self.set_parts(next)
    }

    fn unary_in_place(&mut self, op: UnaryOp) -> &mut Self {
        self.map_in_place(|z| op.apply(z))
    }

    /// `self = self op rhs`.
    fn binary_in_place(&mut self, op: BinaryOp, rhs: impl Into<Operand>) -> &mut Self {
        let rhs = rhs.into();
        self.map_in_place(|z| op.apply(z, rhs))
    }

    /// `self = self op array[source]`, reading the element before the slot is
    /// written.
    fn binary_in_place_from_array<A: ComplexNumberArray + ?Sized>(
        &mut self,
        op: BinaryOp,
        array: &A,
        source: impl ArrayIndex,
    ) -> ComplexResult<&mut Self> {
        let rhs = array.parts(source)?;
        Ok(self.binary_in_place(op, rhs))
    }

    binary_in_place! {
        add_in_place => Add,
        subtract_in_place => Subtract,
        /// `self = rhs - self`.
        subtract_reversed_in_place => SubtractReversed,
        multiply_in_place => Multiply,
        divide_in_place => Divide,
        /// `self = rhs / self`.
        divide_reversed_in_place => DivideReversed,
        /// `self = self ^ rhs`.
        pow_in_place => Pow,
    }

    unary_in_place! {
        negate_in_place => Negate,
        conjugate_in_place => Conjugate,
        /// `self = 1 / self`.
        invert_in_place => Invert,
        sqrt_in_place => Sqrt,
        exp_in_place => Exp,
        log_in_place => Log,
        log1p_in_place => Log1p,
        expm1_in_place => Expm1,
        log10_in_place => Log10,
        sin_in_place => Sin,
        cos_in_place => Cos,
        tan_in_place => Tan,
        sinh_in_place => Sinh,
        cosh_in_place => Cosh,
        tanh_in_place => Tanh,
        asin_in_place => Asin,
        acos_in_place => Acos,
        atan_in_place => Atan,
        asinh_in_place => Asinh,
        acosh_in_place => Acosh,
        atanh_in_place => Atanh,
    }

    /// `self = log(self) / log(base)`.
    fn log_base_in_place(&mut self, base: impl Into<Operand>) -> &mut Self {
        let base = base.into().parts();
        self.map_in_place(|z| crate::kernel::log_base(z, base))
    }
}

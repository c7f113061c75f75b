//! Operation enums and batch drivers over arrays.
//!
//! [`UnaryOp`] and [`BinaryOp`] name every kernel operation so callers can
//! select one at runtime, trace it, or run it across a whole array. The
//! drivers here mutate array slots in place through the same kernel entry
//! points the single-value types use.

use std::ops::{Bound, RangeBounds};

use crate::{
    array::{ArrayChunkMut, ComplexArray},
    capability::ComplexNumberArray,
    config::ParallelConfig,
    error::{ArrayIndex, ComplexError, ComplexResult},
    kernel::{self, Parts},
    operand::Operand,
    tracer::OpTracer,
};

/// Single-operand operations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum UnaryOp {
    Negate,
    Conjugate,
    Invert,
    Sqrt,
    Exp,
    Log,
    Log1p,
    Expm1,
    Log10,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Asin,
    Acos,
    Atan,
    Asinh,
    Acosh,
    Atanh,
}

impl UnaryOp {
    /// Evaluates the operation on `z`.
    #[must_use]
    pub fn apply(self, z: Parts) -> Parts {
        match self {
            Self::Negate => kernel::negate(z),
            Self::Conjugate => kernel::conjugate(z),
            Self::Invert => kernel::invert(z),
            Self::Sqrt => kernel::sqrt(z),
            Self::Exp => kernel::exp(z),
            Self::Log => kernel::log(z),
            Self::Log1p => kernel::log1p(z),
            Self::Expm1 => kernel::expm1(z),
            Self::Log10 => kernel::log10(z),
            Self::Sin => kernel::sin(z),
            Self::Cos => kernel::cos(z),
            Self::Tan => kernel::tan(z),
            Self::Sinh => kernel::sinh(z),
            Self::Cosh => kernel::cosh(z),
            Self::Tanh => kernel::tanh(z),
            Self::Asin => kernel::asin(z),
            Self::Acos => kernel::acos(z),
            Self::Atan => kernel::atan(z),
            Self::Asinh => kernel::asinh(z),
            Self::Acosh => kernel::acosh(z),
            Self::Atanh => kernel::atanh(z),
        }
    }
}

/// Two-operand operations where the receiver is the left-hand side.
///
/// The `Reversed` forms swap the mathematical roles while still storing into
/// the receiver: `x.subtract_reversed(y)` computes `y - x`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    SubtractReversed,
    Multiply,
    Divide,
    DivideReversed,
    Pow,
}

impl BinaryOp {
    /// Evaluates `lhs op rhs`, selecting the real-operand formula when `rhs`
    /// is real.
    #[must_use]
    pub fn apply(self, lhs: Parts, rhs: Operand) -> Parts {
        match (self, rhs) {
            (Self::Add, Operand::Real(d)) => kernel::add_real(lhs, d),
            (Self::Add, Operand::Complex(c)) => kernel::add(lhs, c),
            (Self::Subtract, Operand::Real(d)) => kernel::subtract_real(lhs, d),
            (Self::Subtract, Operand::Complex(c)) => kernel::subtract(lhs, c),
            (Self::SubtractReversed, Operand::Real(d)) => kernel::real_subtract(d, lhs),
            (Self::SubtractReversed, Operand::Complex(c)) => kernel::subtract(c, lhs),
            (Self::Multiply, Operand::Real(d)) => kernel::multiply_real(lhs, d),
            (Self::Multiply, Operand::Complex(c)) => kernel::multiply(lhs, c),
            (Self::Divide, Operand::Real(d)) => kernel::divide_real(lhs, d),
            (Self::Divide, Operand::Complex(c)) => kernel::divide(lhs, c),
            (Self::DivideReversed, Operand::Real(d)) => kernel::real_divide(d, lhs),
            (Self::DivideReversed, Operand::Complex(c)) => kernel::divide(c, lhs),
            (Self::Pow, Operand::Real(d)) => kernel::pow_real(lhs, d),
            (Self::Pow, Operand::Complex(c)) => kernel::pow(lhs, c),
        }
    }

    /// Evaluates `lhs op rhs` where either side may be real.
    ///
    /// A real left-hand side against a complex right-hand side uses the
    /// mirrored real formula (`d - z`, `d / z`, ...) rather than promoting
    /// `d` to `(d, 0)`, so signed zeros in `rhs` survive the same way they do
    /// for a real right-hand side.
    #[must_use]
    pub fn apply_operands(self, lhs: Operand, rhs: Operand) -> Parts {
        match (lhs, rhs) {
            (Operand::Real(d), Operand::Complex(c)) => match self {
                Self::Add => kernel::add_real(c, d),
                Self::Subtract => kernel::real_subtract(d, c),
                Self::SubtractReversed => kernel::subtract_real(c, d),
                Self::Multiply => kernel::multiply_real(c, d),
                Self::Divide => kernel::real_divide(d, c),
                Self::DivideReversed => kernel::divide_real(c, d),
                Self::Pow => kernel::pow((d, 0.0), c),
            },
            (lhs, rhs) => self.apply(lhs.parts(), rhs),
        }
    }
}

// ============================================================================
// Batch drivers
// ============================================================================

/// Resolves `range` against `len`, rejecting bounds past the end.
fn resolve_range(range: impl RangeBounds<usize>, len: usize) -> ComplexResult<std::ops::Range<usize>> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    if end > len {
        return Err(ComplexError::IndexOutOfRange {
            index: i128::try_from(end).map_or(i128::MAX, |end| end - 1),
            len,
        });
    }
    if start > end {
        return Err(ComplexError::invalid_argument(format!(
            "range start {start} is past range end {end}"
        )));
    }
    Ok(start..end)
}

/// Applies `op` in place to every slot of `array` within `range`.
pub fn apply_unary(
    array: &mut ComplexArray,
    op: UnaryOp,
    range: impl RangeBounds<usize>,
    tracer: &mut impl OpTracer,
) -> ComplexResult<()> {
    let range = resolve_range(range, array.len())?;
    for index in range {
        tracer.on_unary(op, index);
        array.unary_in_place(index, op)?;
    }
    Ok(())
}

/// Applies `array[i] = array[i] op rhs` to every slot.
pub fn apply_binary_scalar(
    array: &mut ComplexArray,
    op: BinaryOp,
    rhs: impl Into<Operand>,
    tracer: &mut impl OpTracer,
) -> ComplexResult<()> {
    let rhs = rhs.into();
    for index in 0..array.len() {
        tracer.on_binary(op, index, rhs);
        array.binary_in_place(index, op, rhs)?;
    }
    Ok(())
}

/// Applies `array[i] = array[i] op rhs[i]` element-wise.
///
/// `rhs` must have the same length as `array`.
pub fn apply_binary(
    array: &mut ComplexArray,
    op: BinaryOp,
    rhs: &impl ComplexNumberArray,
    tracer: &mut impl OpTracer,
) -> ComplexResult<()> {
    if rhs.len() != array.len() {
        return Err(ComplexError::invalid_argument(format!(
            "operand length {} does not match array length {}",
            rhs.len(),
            array.len()
        )));
    }
    for index in 0..array.len() {
        let operand = Operand::Complex(rhs.parts(index)?);
        tracer.on_binary(op, index, operand);
        array.binary_in_place(index, op, operand)?;
    }
    Ok(())
}

/// Applies `array[dst] = array[dst] op array[src]` for each `(dst, src)` pair.
///
/// Pairs may alias (`dst == src`); the source is snapshotted before the
/// destination is touched, which the tracer observes as a snapshot event.
/// Every index is validated before the first write, so a rejected call leaves
/// the array unchanged.
pub fn apply_binary_within(
    array: &mut ComplexArray,
    op: BinaryOp,
    pairs: impl IntoIterator<Item = (usize, usize)>,
    tracer: &mut impl OpTracer,
) -> ComplexResult<()> {
    let len = array.len();
    let pairs: Vec<(usize, usize)> = pairs.into_iter().collect();
    for &(dst, src) in &pairs {
        dst.checked_index(len)?;
        src.checked_index(len)?;
    }
    for (dst, src) in pairs {
        let operand = Operand::Complex(array.parts(src)?);
        if dst == src {
            tracer.on_snapshot(src, dst);
        }
        tracer.on_binary(op, dst, operand);
        array.binary_in_place(dst, op, operand)?;
    }
    Ok(())
}

/// Applies `op` to every slot of `array`, splitting the index range into
/// disjoint chunks processed on scoped threads.
///
/// Each thread owns a disjoint [`ArrayChunkMut`], so no slot is touched by two
/// threads. The tracer sees one chunk event per chunk, issued from the calling
/// thread before the workers start.
pub fn apply_unary_parallel(
    array: &mut ComplexArray,
    op: UnaryOp,
    config: &ParallelConfig,
    tracer: &mut impl OpTracer,
) -> ComplexResult<()> {
    let len = array.len();
    if len == 0 {
        return Ok(());
    }
    let chunk_len = config.effective_chunk_len(len)?;
    let chunks: Vec<ArrayChunkMut<'_>> = array.chunks_mut(chunk_len)?.collect();
    for chunk in &chunks {
        tracer.on_chunk(op, chunk.offset(), chunk.len());
    }
    std::thread::scope(|scope| {
        for mut chunk in chunks {
            scope.spawn(move || chunk.apply_unary(op));
        }
    });
    Ok(())
}

//! Structure-of-arrays storage for many complex values.
//!
//! [`ComplexArray`] keeps real and imaginary components in two parallel
//! vectors. Single slots are mutated through [`SlotMut`], which implements
//! [`ComplexSlot`] and therefore shares every in-place composition with
//! [`ComplexBuffer`](crate::ComplexBuffer). The indexed wrappers on
//! `ComplexArray` validate the index, then delegate to the slot.
//!
//! When the second operand is another slot of the same array, use the
//! `*_from(index, source)` forms. They copy the source slot out before the
//! destination is written, so `pow_in_place_from(i, i)` computes `z^z` and not
//! a mix of old and partially-updated components.

use std::fmt;

use crate::{
    capability::{ComplexNumber, ComplexNumberArray},
    complex::Complex,
    error::{ArrayIndex, ComplexError, ComplexResult},
    in_place::ComplexSlot,
    kernel::Parts,
    operand::Operand,
    ops::{BinaryOp, UnaryOp},
    repr,
};

/// Owned array of complex values stored as parallel `re` / `im` vectors.
///
/// Invariant: `re.len() == im.len()`. Deserialization rejects input that
/// violates it.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ArrayParts")]
pub struct ComplexArray {
    re: Vec<f64>,
    im: Vec<f64>,
}

/// Unvalidated wire form of [`ComplexArray`].
#[derive(serde::Deserialize)]
struct ArrayParts {
    re: Vec<f64>,
    im: Vec<f64>,
}

impl TryFrom<ArrayParts> for ComplexArray {
    type Error = ComplexError;

    fn try_from(parts: ArrayParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts.re, parts.im)
    }
}

/// Generates indexed unary wrappers that delegate to [`SlotMut`].
macro_rules! indexed_unary {
    ($($name:ident,)+) => {
        impl ComplexArray {
            $(
                pub fn $name(&mut self, index: impl ArrayIndex) -> ComplexResult<&mut Self> {
                    self.slot(index)?.$name();
                    Ok(self)
                }
            )+
        }
    };
}

/// Generates indexed binary wrappers: `$name(index, rhs)` takes any operand,
/// `$from(index, source)` takes another slot of this array.
macro_rules! indexed_binary {
    ($($name:ident, $from:ident => $op:ident;)+) => {
        impl ComplexArray {
            $(
                pub fn $name(&mut self, index: impl ArrayIndex, rhs: impl Into<Operand>) -> ComplexResult<&mut Self> {
                    self.binary_in_place(index, BinaryOp::$op, rhs)
                }

                pub fn $from(&mut self, index: impl ArrayIndex, source: impl ArrayIndex) -> ComplexResult<&mut Self> {
                    self.binary_in_place_from(index, BinaryOp::$op, source)
                }
            )+
        }
    };
}

impl ComplexArray {
    /// An array of `len` slots, all `0 + 0i`.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            re: vec![0.0; len],
            im: vec![0.0; len],
        }
    }

    /// Like [`new`](Self::new), but accepts a signed size and rejects
    /// negative ones.
    pub fn try_new(len: isize) -> ComplexResult<Self> {
        let len = usize::try_from(len)
            .map_err(|_| ComplexError::invalid_argument(format!("array size must be non-negative, got {len}")))?;
        Ok(Self::new(len))
    }

    /// Builds an array from component vectors of equal length.
    pub fn from_parts(re: Vec<f64>, im: Vec<f64>) -> ComplexResult<Self> {
        if re.len() != im.len() {
            return Err(ComplexError::invalid_argument(format!(
                "component lengths differ: {} real, {} imaginary",
                re.len(),
                im.len()
            )));
        }
        Ok(Self { re, im })
    }

    /// Consumes the array and returns `(re, im)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.re, self.im)
    }

    /// Mutable cursor over slot `index`.
    pub fn slot(&mut self, index: impl ArrayIndex) -> ComplexResult<SlotMut<'_>> {
        let i = index.checked_index(self.re.len())?;
        Ok(SlotMut {
            re: &mut self.re[i],
            im: &mut self.im[i],
        })
    }

    pub fn set(&mut self, index: impl ArrayIndex, re: f64, im: f64) -> ComplexResult<&mut Self> {
        self.slot(index)?.set(re, im);
        Ok(self)
    }

    /// Stores a real number (`im = +0.0`) in slot `index`.
    pub fn set_real(&mut self, index: impl ArrayIndex, re: f64) -> ComplexResult<&mut Self> {
        self.slot(index)?.set_real(re);
        Ok(self)
    }

    /// Stores a copy of `value` in slot `index`.
    pub fn assign(&mut self, index: impl ArrayIndex, value: impl Into<Operand>) -> ComplexResult<&mut Self> {
        self.slot(index)?.assign(value);
        Ok(self)
    }

    /// Stores `value` in every slot.
    pub fn fill(&mut self, value: impl Into<Operand>) -> &mut Self {
        let (re, im) = value.into().parts();
        self.re.fill(re);
        self.im.fill(im);
        self
    }

    pub fn swap(&mut self, a: impl ArrayIndex, b: impl ArrayIndex) -> ComplexResult<&mut Self> {
        let a = a.checked_index(self.re.len())?;
        let b = b.checked_index(self.re.len())?;
        self.re.swap(a, b);
        self.im.swap(a, b);
        Ok(self)
    }

    /// Copies slot `src` into slot `dst`.
    pub fn copy_slot(&mut self, src: impl ArrayIndex, dst: impl ArrayIndex) -> ComplexResult<&mut Self> {
        let value = self.parts(src)?;
        self.slot(dst)?.set_parts(value);
        Ok(self)
    }

    /// Snapshots of every slot in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Complex> {
        self.re.iter().zip(&self.im).map(|(&re, &im)| Complex::new(re, im))
    }

    pub fn unary_in_place(&mut self, index: impl ArrayIndex, op: UnaryOp) -> ComplexResult<&mut Self> {
        self.slot(index)?.unary_in_place(op);
        Ok(self)
    }

    /// `self[index] = self[index] op rhs`.
    pub fn binary_in_place(
        &mut self,
        index: impl ArrayIndex,
        op: BinaryOp,
        rhs: impl Into<Operand>,
    ) -> ComplexResult<&mut Self> {
        self.slot(index)?.binary_in_place(op, rhs);
        Ok(self)
    }

    /// `self[index] = self[index] op self[source]`, with `self[source]`
    /// copied out before `self[index]` is written.
    pub fn binary_in_place_from(
        &mut self,
        index: impl ArrayIndex,
        op: BinaryOp,
        source: impl ArrayIndex,
    ) -> ComplexResult<&mut Self> {
        let operand = self.get(source)?;
        self.binary_in_place(index, op, operand)
    }

    /// `self[index] = self[index] op other[source]` for an element of another
    /// array (or chunk).
    pub fn binary_in_place_from_array<A: ComplexNumberArray + ?Sized>(
        &mut self,
        index: impl ArrayIndex,
        op: BinaryOp,
        other: &A,
        source: impl ArrayIndex,
    ) -> ComplexResult<&mut Self> {
        let operand = other.parts(source)?;
        self.binary_in_place(index, op, operand)
    }

    /// `self[index] = log(self[index]) / log(base)`.
    pub fn log_base_in_place(&mut self, index: impl ArrayIndex, base: impl Into<Operand>) -> ComplexResult<&mut Self> {
        self.slot(index)?.log_base_in_place(base);
        Ok(self)
    }

    /// Splits the array into disjoint mutable chunks of at most `chunk_len`
    /// slots, in index order.
    pub fn chunks_mut(&mut self, chunk_len: usize) -> ComplexResult<impl Iterator<Item = ArrayChunkMut<'_>>> {
        if chunk_len == 0 {
            return Err(ComplexError::invalid_argument("chunk length must be non-zero"));
        }
        Ok(self
            .re
            .chunks_mut(chunk_len)
            .zip(self.im.chunks_mut(chunk_len))
            .enumerate()
            .map(move |(n, (re, im))| ArrayChunkMut {
                offset: n * chunk_len,
                re,
                im,
            }))
    }

    /// Serializes the array to a compact binary form.
    pub fn dump(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }

    /// Restores an array from [`dump`](Self::dump) output.
    pub fn load(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}

indexed_unary! {
    negate_in_place,
    conjugate_in_place,
    invert_in_place,
    sqrt_in_place,
    exp_in_place,
    log_in_place,
    log1p_in_place,
    expm1_in_place,
    log10_in_place,
    sin_in_place,
    cos_in_place,
    tan_in_place,
    sinh_in_place,
    cosh_in_place,
    tanh_in_place,
    asin_in_place,
    acos_in_place,
    atan_in_place,
    asinh_in_place,
    acosh_in_place,
    atanh_in_place,
}

indexed_binary! {
    add_in_place, add_in_place_from => Add;
    subtract_in_place, subtract_in_place_from => Subtract;
    subtract_reversed_in_place, subtract_reversed_in_place_from => SubtractReversed;
    multiply_in_place, multiply_in_place_from => Multiply;
    divide_in_place, divide_in_place_from => Divide;
    divide_reversed_in_place, divide_reversed_in_place_from => DivideReversed;
    pow_in_place, pow_in_place_from => Pow;
}

impl ComplexNumberArray for ComplexArray {
    #[inline]
    fn real_parts(&self) -> &[f64] {
        &self.re
    }

    #[inline]
    fn imag_parts(&self) -> &[f64] {
        &self.im
    }
}

/// Slot-wise canonical equality, see [`Complex`]'s `PartialEq`.
impl PartialEq for ComplexArray {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl FromIterator<Complex> for ComplexArray {
    fn from_iter<T: IntoIterator<Item = Complex>>(iter: T) -> Self {
        let (re, im) = iter.into_iter().map(Parts::from).unzip();
        Self { re, im }
    }
}

impl fmt::Display for ComplexArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (n, z) in self.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&repr::complex_repr(z.parts()))?;
        }
        f.write_str("]")
    }
}

// ============================================================================
// Slot and chunk views
// ============================================================================

/// Mutable view of one array slot.
#[derive(Debug)]
pub struct SlotMut<'a> {
    re: &'a mut f64,
    im: &'a mut f64,
}

impl ComplexNumber for SlotMut<'_> {
    #[inline]
    fn real(&self) -> f64 {
        *self.re
    }

    #[inline]
    fn imag(&self) -> f64 {
        *self.im
    }
}

impl ComplexSlot for SlotMut<'_> {
    #[inline]
    fn set(&mut self, re: f64, im: f64) -> &mut Self {
        *self.re = re;
        *self.im = im;
        self
    }
}

/// Disjoint mutable window over `len` consecutive slots starting at
/// `offset` in the parent array.
///
/// Indices passed to its methods are relative to the window.
#[derive(Debug)]
pub struct ArrayChunkMut<'a> {
    offset: usize,
    re: &'a mut [f64],
    im: &'a mut [f64],
}

impl ArrayChunkMut<'_> {
    /// Index of the first slot in the parent array.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn slot(&mut self, index: impl ArrayIndex) -> ComplexResult<SlotMut<'_>> {
        let i = index.checked_index(self.re.len())?;
        Ok(SlotMut {
            re: &mut self.re[i],
            im: &mut self.im[i],
        })
    }

    /// Applies `op` to every slot in the window.
    pub fn apply_unary(&mut self, op: UnaryOp) {
        for (re, im) in self.re.iter_mut().zip(self.im.iter_mut()) {
            (*re, *im) = op.apply((*re, *im));
        }
    }
}

impl ComplexNumberArray for ArrayChunkMut<'_> {
    #[inline]
    fn real_parts(&self) -> &[f64] {
        &*self.re
    }

    #[inline]
    fn imag_parts(&self) -> &[f64] {
        &*self.im
    }
}

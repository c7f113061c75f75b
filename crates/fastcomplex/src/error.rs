use std::fmt;

/// Precondition failure raised by indexed and sized operations.
///
/// Arithmetic itself never fails: division by zero, overflow and invalid
/// operations flow through IEEE-754 semantics as infinities or NaNs. Only
/// violated preconditions on array indices and sizes surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplexError {
    /// An index outside `0 <= index < len` was used on an array.
    ///
    /// The index is widened to `i128` so negative signed indices are reported
    /// as given rather than wrapped.
    IndexOutOfRange { index: i128, len: usize },
    /// A size, length or configuration value was rejected.
    InvalidArgument(String),
}

impl ComplexError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: {index} not in 0..{len}")
            }
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for ComplexError {}

/// Result alias for fallible (indexed or sized) operations.
pub type ComplexResult<T> = Result<T, ComplexError>;

/// Index types accepted by indexed accessors.
///
/// Signed integers are accepted so that a negative index is reported as
/// [`ComplexError::IndexOutOfRange`] instead of being unrepresentable or
/// wrapping around to a huge unsigned value.
pub trait ArrayIndex: Copy {
    /// Validates `self` against `len` and returns the slot position.
    fn checked_index(self, len: usize) -> ComplexResult<usize>;
}

impl ArrayIndex for usize {
    #[inline]
    fn checked_index(self, len: usize) -> ComplexResult<usize> {
        if self < len {
            Ok(self)
        } else {
            Err(ComplexError::IndexOutOfRange {
                index: i128::try_from(self).unwrap_or(i128::MAX),
                len,
            })
        }
    }
}

macro_rules! signed_array_index {
    ($($ty:ty),*) => {
        $(
            impl ArrayIndex for $ty {
                #[inline]
                fn checked_index(self, len: usize) -> ComplexResult<usize> {
                    match usize::try_from(self) {
                        Ok(index) if index < len => Ok(index),
                        _ => Err(ComplexError::IndexOutOfRange {
                            index: i128::try_from(self).unwrap_or(i128::MAX),
                            len,
                        }),
                    }
                }
            }
        )*
    };
}

signed_array_index!(i32, i64, isize, u32);

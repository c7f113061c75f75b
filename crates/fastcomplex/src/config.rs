//! Tunable settings: closeness tolerances and parallel chunking.

use std::num::NonZeroUsize;

use crate::error::{ComplexError, ComplexResult};

/// Tolerances for [`is_close`](crate::utils::is_close).
///
/// Two values are close when the distance between them is at most
/// `max(rel_tol * max(|a|, |b|), abs_tol)`. Both tolerances are non-negative
/// and not NaN; deserialization rejects input that violates this.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ToleranceParts")]
pub struct Tolerance {
    rel_tol: f64,
    abs_tol: f64,
}

/// Unvalidated wire form of [`Tolerance`].
#[derive(serde::Deserialize)]
struct ToleranceParts {
    rel_tol: f64,
    abs_tol: f64,
}

impl TryFrom<ToleranceParts> for Tolerance {
    type Error = ComplexError;

    fn try_from(parts: ToleranceParts) -> Result<Self, Self::Error> {
        Self::new(parts.rel_tol, parts.abs_tol)
    }
}

impl Tolerance {
    /// Validated constructor; both tolerances must be non-negative and not NaN.
    pub fn new(rel_tol: f64, abs_tol: f64) -> ComplexResult<Self> {
        if rel_tol.is_nan() || abs_tol.is_nan() || rel_tol < 0.0 || abs_tol < 0.0 {
            return Err(ComplexError::invalid_argument("tolerances must be non-negative"));
        }
        Ok(Self { rel_tol, abs_tol })
    }

    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rel_tol: 1e-9,
            abs_tol: 0.0,
        }
    }
}

/// Chunking for [`apply_unary_parallel`](crate::ops::apply_unary_parallel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParallelConfig {
    /// Slots per chunk before the thread cap is applied. Must be non-zero.
    pub chunk_len: usize,
    /// Upper bound on the number of chunks (and therefore threads).
    pub max_threads: usize,
}

impl ParallelConfig {
    pub const DEFAULT_CHUNK_LEN: usize = 4096;

    #[must_use]
    pub fn new(chunk_len: usize, max_threads: usize) -> Self {
        Self { chunk_len, max_threads }
    }

    /// Chunk length for an array of `len` slots.
    ///
    /// Starts from `chunk_len` and grows it until no more than `max_threads`
    /// chunks are needed.
    pub fn effective_chunk_len(&self, len: usize) -> ComplexResult<usize> {
        if self.chunk_len == 0 {
            return Err(ComplexError::invalid_argument("chunk length must be non-zero"));
        }
        let threads = self.max_threads.max(1);
        Ok(self.chunk_len.max(len.div_ceil(threads)))
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        let max_threads = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
        Self {
            chunk_len: Self::DEFAULT_CHUNK_LEN,
            max_threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_rejects_negative_and_nan() {
        assert!(Tolerance::new(1e-6, 0.0).is_ok());
        assert!(matches!(Tolerance::new(-1.0, 0.0), Err(ComplexError::InvalidArgument(_))));
        assert!(matches!(Tolerance::new(0.0, f64::NAN), Err(ComplexError::InvalidArgument(_))));
        let tol = Tolerance::default();
        assert_eq!((tol.rel_tol(), tol.abs_tol()), (1e-9, 0.0));
    }

    #[test]
    fn chunk_len_respects_thread_cap() {
        let config = ParallelConfig::new(10, 4);
        assert_eq!(config.effective_chunk_len(25).ok(), Some(10));
        assert_eq!(config.effective_chunk_len(100).ok(), Some(25));
        assert_eq!(config.effective_chunk_len(101).ok(), Some(26));
        assert!(ParallelConfig::new(0, 4).effective_chunk_len(10).is_err());
    }
}

//! Operation tracing for the batch drivers in [`ops`](crate::ops).
//!
//! The drivers are generic over `Tr: OpTracer`, so with [`NoopTracer`] every
//! hook is monomorphized away and the loop is identical to an untraced one.
//!
//! | Tracer | Purpose |
//! |--------|---------|
//! | [`NoopTracer`] | Zero-cost no-op (default) |
//! | [`StderrTracer`] | Human-readable operation log to stderr |
//! | [`ProfilingTracer`] | Per-operation counts, snapshots and chunk sizes |
//! | [`CoverageTracer`] | Which array slots were written |
//! | [`RecordingTracer`] | Full event recording for post-mortem comparison |
//!
//! ```
//! use fastcomplex::{ComplexArray, UnaryOp, ops, tracer::ProfilingTracer};
//!
//! let mut array = ComplexArray::new(8);
//! let mut tracer = ProfilingTracer::new();
//! ops::apply_unary(&mut array, UnaryOp::Exp, .., &mut tracer).unwrap();
//! assert_eq!(tracer.report().total_unary, 8);
//! ```

use std::collections::HashMap;

use crate::{
    operand::Operand,
    ops::{BinaryOp, UnaryOp},
};

/// Trace event emitted by a batch driver.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TraceEvent {
    /// A unary operation was applied to a slot.
    Unary { op: UnaryOp, index: usize },
    /// A binary operation was applied to a slot.
    Binary {
        op: BinaryOp,
        index: usize,
        /// Operand value as captured before the slot was written.
        operand: Operand,
    },
    /// A source slot was copied out before an aliasing write.
    Snapshot { src: usize, dst: usize },
    /// A contiguous chunk was handed to a worker thread.
    Chunk { op: UnaryOp, offset: usize, len: usize },
}

/// Hooks called by the batch drivers.
///
/// Every method defaults to a no-op; implementations override only what they
/// need.
pub trait OpTracer: std::fmt::Debug {
    /// Called before a unary operation writes slot `index`.
    #[inline(always)]
    fn on_unary(&mut self, _op: UnaryOp, _index: usize) {}

    /// Called before a binary operation writes slot `index`.
    #[inline(always)]
    fn on_binary(&mut self, _op: BinaryOp, _index: usize, _operand: Operand) {}

    /// Called when slot `src` is snapshotted because the same slot is about to
    /// be written as `dst`.
    #[inline(always)]
    fn on_snapshot(&mut self, _src: usize, _dst: usize) {}

    /// Called once per chunk before a parallel unary pass starts.
    #[inline(always)]
    fn on_chunk(&mut self, _op: UnaryOp, _offset: usize, _len: usize) {}
}

// ============================================================================
// NoopTracer — zero-cost default
// ============================================================================

/// A tracer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl OpTracer for NoopTracer {}

// ============================================================================
// StderrTracer — human-readable log
// ============================================================================

/// Tracer that prints one line per event to stderr.
///
/// ```text
/// [    0] exp
/// [    1] multiply       complex (1.0 + 2.0i)
///   ... SNAPSHOT src=3 dst=3
///   >>> CHUNK sqrt offset=4096 len=4096
/// ```
#[derive(Debug)]
pub struct StderrTracer {
    /// Maximum number of events to print. None = unlimited.
    limit: Option<usize>,
    count: usize,
    stopped: bool,
}

impl StderrTracer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            limit: None,
            count: 0,
            stopped: false,
        }
    }

    /// Creates a stderr tracer that stops after `limit` events.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            count: 0,
            stopped: false,
        }
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if self.stopped {
            return;
        }
        eprintln!("{line}");
        self.count += 1;
        if let Some(limit) = self.limit
            && self.count >= limit
        {
            eprintln!("--- trace limit reached ({limit} events) ---");
            self.stopped = true;
        }
    }
}

impl Default for StderrTracer {
    fn default() -> Self {
        Self::new()
    }
}

impl OpTracer for StderrTracer {
    fn on_unary(&mut self, op: UnaryOp, index: usize) {
        self.emit(format_args!("[{index:>5}] {op}"));
    }

    fn on_binary(&mut self, op: BinaryOp, index: usize, operand: Operand) {
        let kind = operand.kind();
        let value = crate::repr::complex_repr(operand.parts());
        self.emit(format_args!("[{index:>5}] {:<14} {kind} ({value})", op.to_string()));
    }

    fn on_snapshot(&mut self, src: usize, dst: usize) {
        self.emit(format_args!("  ... SNAPSHOT src={src} dst={dst}"));
    }

    fn on_chunk(&mut self, op: UnaryOp, offset: usize, len: usize) {
        self.emit(format_args!("  >>> CHUNK {op} offset={offset} len={len}"));
    }
}

// ============================================================================
// ProfilingTracer — operation counts
// ============================================================================

/// Tracer that counts operations by kind.
///
/// Retrieve results via [`ProfilingTracer::report`].
#[derive(Debug, Default)]
pub struct ProfilingTracer {
    unary_counts: HashMap<UnaryOp, u64>,
    binary_counts: HashMap<BinaryOp, u64>,
    /// Binary operations whose operand was real.
    real_operands: u64,
    snapshots: u64,
    chunks: u64,
    max_chunk_len: usize,
}

/// Summary report from a profiling trace.
#[derive(Debug)]
pub struct ProfilingReport {
    /// Unary counts, most frequent first.
    pub unary_counts: Vec<(UnaryOp, u64)>,
    /// Binary counts, most frequent first.
    pub binary_counts: Vec<(BinaryOp, u64)>,
    pub total_unary: u64,
    pub total_binary: u64,
    pub real_operands: u64,
    pub snapshots: u64,
    pub chunks: u64,
    pub max_chunk_len: usize,
}

impl ProfilingTracer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a report from the collected counters.
    #[must_use]
    pub fn report(&self) -> ProfilingReport {
        let mut unary_counts: Vec<_> = self.unary_counts.iter().map(|(&k, &v)| (k, v)).collect();
        unary_counts.sort_by(|a, b| b.1.cmp(&a.1));
        let mut binary_counts: Vec<_> = self.binary_counts.iter().map(|(&k, &v)| (k, v)).collect();
        binary_counts.sort_by(|a, b| b.1.cmp(&a.1));
        ProfilingReport {
            total_unary: unary_counts.iter().map(|(_, c)| c).sum(),
            total_binary: binary_counts.iter().map(|(_, c)| c).sum(),
            unary_counts,
            binary_counts,
            real_operands: self.real_operands,
            snapshots: self.snapshots,
            chunks: self.chunks,
            max_chunk_len: self.max_chunk_len,
        }
    }
}

impl OpTracer for ProfilingTracer {
    #[inline]
    fn on_unary(&mut self, op: UnaryOp, _index: usize) {
        *self.unary_counts.entry(op).or_insert(0) += 1;
    }

    #[inline]
    fn on_binary(&mut self, op: BinaryOp, _index: usize, operand: Operand) {
        *self.binary_counts.entry(op).or_insert(0) += 1;
        if matches!(operand, Operand::Real(_)) {
            self.real_operands += 1;
        }
    }

    fn on_snapshot(&mut self, _src: usize, _dst: usize) {
        self.snapshots += 1;
    }

    fn on_chunk(&mut self, _op: UnaryOp, _offset: usize, len: usize) {
        self.chunks += 1;
        self.max_chunk_len = self.max_chunk_len.max(len);
    }
}

impl std::fmt::Display for ProfilingReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Operation Profiling Report ===")?;
        writeln!(f, "Unary ops:      {}", self.total_unary)?;
        writeln!(f, "Binary ops:     {}", self.total_binary)?;
        writeln!(f, "Real operands:  {}", self.real_operands)?;
        writeln!(f, "Snapshots:      {}", self.snapshots)?;
        writeln!(f, "Chunks:         {} (max len {})", self.chunks, self.max_chunk_len)?;
        let total = self.total_unary + self.total_binary;
        if total == 0 {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "--- Operation Frequency ---")?;
        let rows = self
            .unary_counts
            .iter()
            .map(|(op, c)| (op.to_string(), *c))
            .chain(self.binary_counts.iter().map(|(op, c)| (op.to_string(), *c)));
        for (name, count) in rows {
            let pct = (count as f64 / total as f64) * 100.0;
            writeln!(f, "  {name:<20} {count:>10}  ({pct:>5.1}%)")?;
        }
        Ok(())
    }
}

// ============================================================================
// CoverageTracer — written slots
// ============================================================================

/// Tracer that records which array slots were written.
#[derive(Debug, Default)]
pub struct CoverageTracer {
    indices: ahash::AHashSet<usize>,
}

impl CoverageTracer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn written_indices(&self) -> &ahash::AHashSet<usize> {
        &self.indices
    }

    /// Number of distinct slots written.
    #[must_use]
    pub fn coverage_count(&self) -> usize {
        self.indices.len()
    }
}

impl OpTracer for CoverageTracer {
    #[inline]
    fn on_unary(&mut self, _op: UnaryOp, index: usize) {
        self.indices.insert(index);
    }

    #[inline]
    fn on_binary(&mut self, _op: BinaryOp, index: usize, _operand: Operand) {
        self.indices.insert(index);
    }

    fn on_chunk(&mut self, _op: UnaryOp, offset: usize, len: usize) {
        self.indices.extend(offset..offset + len);
    }
}

// ============================================================================
// RecordingTracer — full event recording
// ============================================================================

/// Tracer that records every event in order.
///
/// Allocates per event; meant for tests and short post-mortem captures.
#[derive(Debug, Default)]
pub struct RecordingTracer {
    events: Vec<TraceEvent>,
    limit: Option<usize>,
}

impl RecordingTracer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recording tracer that stops recording after `limit` events.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            events: Vec::with_capacity(limit.min(1024)),
            limit: Some(limit),
        }
    }

    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    fn push(&mut self, event: TraceEvent) {
        if self.limit.is_some_and(|l| self.events.len() >= l) {
            return;
        }
        self.events.push(event);
    }
}

impl OpTracer for RecordingTracer {
    fn on_unary(&mut self, op: UnaryOp, index: usize) {
        self.push(TraceEvent::Unary { op, index });
    }

    fn on_binary(&mut self, op: BinaryOp, index: usize, operand: Operand) {
        self.push(TraceEvent::Binary { op, index, operand });
    }

    fn on_snapshot(&mut self, src: usize, dst: usize) {
        self.push(TraceEvent::Snapshot { src, dst });
    }

    fn on_chunk(&mut self, op: UnaryOp, offset: usize, len: usize) {
        self.push(TraceEvent::Chunk { op, offset, len });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_respects_limit() {
        let mut tracer = RecordingTracer::with_limit(2);
        tracer.on_unary(UnaryOp::Exp, 0);
        tracer.on_snapshot(1, 1);
        tracer.on_unary(UnaryOp::Exp, 2);
        assert_eq!(
            tracer.events(),
            &[
                TraceEvent::Unary {
                    op: UnaryOp::Exp,
                    index: 0
                },
                TraceEvent::Snapshot { src: 1, dst: 1 },
            ]
        );
    }

    #[test]
    fn profiling_counts_and_sorts() {
        let mut tracer = ProfilingTracer::new();
        tracer.on_unary(UnaryOp::Sin, 0);
        tracer.on_unary(UnaryOp::Cos, 0);
        tracer.on_unary(UnaryOp::Cos, 1);
        tracer.on_binary(BinaryOp::Add, 0, Operand::Real(1.0));
        tracer.on_chunk(UnaryOp::Cos, 0, 10);
        tracer.on_chunk(UnaryOp::Cos, 10, 3);
        let report = tracer.report();
        assert_eq!(report.unary_counts[0], (UnaryOp::Cos, 2));
        assert_eq!(report.total_unary, 3);
        assert_eq!(report.total_binary, 1);
        assert_eq!(report.real_operands, 1);
        assert_eq!(report.chunks, 2);
        assert_eq!(report.max_chunk_len, 10);
        assert!(report.to_string().contains("cos"));
    }

    #[test]
    fn coverage_expands_chunks() {
        let mut tracer = CoverageTracer::new();
        tracer.on_chunk(UnaryOp::Exp, 4, 3);
        tracer.on_unary(UnaryOp::Exp, 5);
        assert_eq!(tracer.coverage_count(), 3);
        assert!(tracer.written_indices().contains(&6));
    }
}

//! Tests for the batch drivers in `fastcomplex::ops` and the tracers they
//! report to.

use fastcomplex::{
    BinaryOp, Complex, ComplexArray, ComplexError, ComplexNumberArray, CoverageTracer, NoopTracer, ParallelConfig,
    ProfilingTracer, RecordingTracer, StderrTracer, TraceEvent, UnaryOp, ops,
};

fn ramp(len: usize) -> ComplexArray {
    (0..len)
        .map(|n| Complex::new(n as f64 * 0.125, 1.0 - n as f64 * 0.0625))
        .collect()
}

// === Sequential drivers ===

#[test]
fn apply_unary_over_range() {
    let mut array = ramp(6);
    let mut tracer = RecordingTracer::new();
    ops::apply_unary(&mut array, UnaryOp::Sqrt, 2..4, &mut tracer).unwrap();

    let original = ramp(6);
    for (n, (got, before)) in array.iter().zip(original.iter()).enumerate() {
        let expected = if (2..4).contains(&n) { before.sqrt() } else { before };
        assert_eq!(got, expected, "slot {n}");
    }
    assert_eq!(
        tracer.events(),
        &[
            TraceEvent::Unary {
                op: UnaryOp::Sqrt,
                index: 2
            },
            TraceEvent::Unary {
                op: UnaryOp::Sqrt,
                index: 3
            },
        ]
    );
}

#[test]
fn apply_unary_rejects_range_past_end() {
    let mut array = ramp(3);
    let err = ops::apply_unary(&mut array, UnaryOp::Exp, 1..=3, &mut NoopTracer).unwrap_err();
    assert_eq!(err, ComplexError::IndexOutOfRange { index: 3, len: 3 });
    assert_eq!(array, ramp(3), "nothing written on a rejected range");
}

#[test]
fn apply_binary_within_rejects_bad_pair_before_writing() {
    let mut array: ComplexArray = [Complex::new(2.0, 1.0), Complex::new(3.0, 0.0)].into_iter().collect();
    let before = array.clone();
    let mut tracer = RecordingTracer::new();
    let err = ops::apply_binary_within(&mut array, BinaryOp::Add, [(0, 1), (5, 1)], &mut tracer).unwrap_err();
    assert_eq!(err, ComplexError::IndexOutOfRange { index: 5, len: 2 });
    assert_eq!(array, before, "earlier pairs must not be applied");
    assert_eq!(tracer.event_count(), 0);

    let err = ops::apply_binary_within(&mut array, BinaryOp::Multiply, [(1, 0), (0, 2)], &mut NoopTracer).unwrap_err();
    assert_eq!(err, ComplexError::IndexOutOfRange { index: 2, len: 2 });
    assert_eq!(array, before);
}

#[test]
fn apply_binary_scalar_and_elementwise() {
    let mut array = ramp(4);
    let mut profile = ProfilingTracer::new();
    ops::apply_binary_scalar(&mut array, BinaryOp::Multiply, 2.0, &mut profile).unwrap();
    let doubled: ComplexArray = ramp(4).iter().map(|z| z * 2.0).collect();
    assert_eq!(array, doubled);

    let rhs = ramp(4);
    ops::apply_binary(&mut array, BinaryOp::Subtract, &rhs, &mut profile).unwrap();
    assert_eq!(array, ramp(4));

    let report = profile.report();
    assert_eq!(report.total_binary, 8);
    assert_eq!(report.real_operands, 4);
    assert_eq!(report.binary_counts.len(), 2);
}

#[test]
fn apply_binary_rejects_length_mismatch() {
    let mut array = ramp(4);
    let err = ops::apply_binary(&mut array, BinaryOp::Add, &ramp(3), &mut NoopTracer).unwrap_err();
    assert!(matches!(err, ComplexError::InvalidArgument(_)));
}

#[test]
fn apply_binary_within_snapshots_aliased_slots() {
    let mut array = ramp(3);
    let before = ramp(3);
    let mut tracer = RecordingTracer::new();
    ops::apply_binary_within(&mut array, BinaryOp::Pow, [(1, 1), (2, 0)], &mut tracer).unwrap();

    let z1 = before.get(1).unwrap();
    assert_eq!(array.get(1).unwrap(), z1.pow(z1));
    let z2 = before.get(2).unwrap();
    assert_eq!(array.get(2).unwrap(), z2.pow(before.get(0).unwrap()));
    assert_eq!(
        tracer
            .events()
            .iter()
            .filter(|e| matches!(e, TraceEvent::Snapshot { .. }))
            .count(),
        1
    );
    assert_eq!(tracer.events()[0], TraceEvent::Snapshot { src: 1, dst: 1 });
}

#[test]
fn stderr_tracer_accepts_every_event() {
    let mut array = ramp(3);
    let mut tracer = StderrTracer::with_limit(2);
    ops::apply_unary(&mut array, UnaryOp::Conjugate, .., &mut tracer).unwrap();
    ops::apply_binary_within(&mut array, BinaryOp::Add, [(0, 0)], &mut tracer).unwrap();
    assert_eq!(array.get(0).unwrap(), Complex::new(0.0, -2.0));
}

// === Parallel driver ===

#[test]
fn parallel_matches_sequential() {
    let config = ParallelConfig::new(3, 4);
    for op in [UnaryOp::Exp, UnaryOp::Atan, UnaryOp::Log1p] {
        let mut parallel = ramp(10);
        let mut sequential = ramp(10);
        let mut profile = ProfilingTracer::new();
        ops::apply_unary_parallel(&mut parallel, op, &config, &mut profile).unwrap();
        ops::apply_unary(&mut sequential, op, .., &mut NoopTracer).unwrap();
        assert_eq!(parallel, sequential, "{op}");

        let report = profile.report();
        assert_eq!(report.chunks, 4);
        assert_eq!(report.max_chunk_len, 3);
    }
}

#[test]
fn parallel_chunks_cover_every_slot() {
    let config = ParallelConfig::new(16, 2);
    let mut array = ramp(100);
    let mut coverage = CoverageTracer::new();
    ops::apply_unary_parallel(&mut array, UnaryOp::Negate, &config, &mut coverage).unwrap();
    assert_eq!(coverage.coverage_count(), 100);
    let negated: ComplexArray = ramp(100).iter().map(|z| -z).collect();
    assert_eq!(array, negated);
}

#[test]
fn parallel_on_empty_array_is_a_no_op() {
    let mut array = ComplexArray::new(0);
    let mut tracer = RecordingTracer::new();
    ops::apply_unary_parallel(&mut array, UnaryOp::Sin, &ParallelConfig::default(), &mut tracer).unwrap();
    assert_eq!(tracer.event_count(), 0);
}

#[test]
fn parallel_rejects_zero_chunk_len() {
    let mut array = ramp(4);
    let err = ops::apply_unary_parallel(&mut array, UnaryOp::Sin, &ParallelConfig::new(0, 2), &mut NoopTracer)
        .unwrap_err();
    assert!(matches!(err, ComplexError::InvalidArgument(_)));
}

#![doc = include_str!("../../../README.md")]

pub mod array;
mod buffer;
pub mod capability;
mod complex;
pub mod config;
mod error;
mod in_place;
pub mod kernel;
mod operand;
pub mod ops;
mod repr;
pub mod tracer;
pub mod utils;

pub use crate::{
    array::{ArrayChunkMut, ComplexArray, SlotMut},
    buffer::ComplexBuffer,
    capability::{ComplexNumber, ComplexNumberArray},
    complex::Complex,
    config::{ParallelConfig, Tolerance},
    error::{ArrayIndex, ComplexError, ComplexResult},
    in_place::ComplexSlot,
    operand::Operand,
    ops::{BinaryOp, UnaryOp},
    repr::complex_repr,
    tracer::{
        CoverageTracer, NoopTracer, OpTracer, ProfilingReport, ProfilingTracer, RecordingTracer, StderrTracer,
        TraceEvent,
    },
};

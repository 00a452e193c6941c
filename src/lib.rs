//! Reader for RTXI multisine experiments.
//!
//! An experiment is loaded once into an immutable [`TraceStore`] and queried
//! through [`Experiment`], which hands out per-trace [`Measurement`]s and
//! averages of several traces.
pub mod experiment;
pub mod measurement;
pub use experiment::{
    Experiment, ExperimentError, ExperimentMetadata, LoadOptions, Segment, SegmentKind, Trace,
    TraceAlternance, TraceStore,
};
pub use measurement::Measurement;

// src/experiment/mod.rs
pub mod alternance;
pub mod config;
pub mod error;
pub mod record;
pub mod store;
pub mod trace;
pub mod view;
pub use alternance::TraceAlternance;
pub use config::LoadOptions;
pub use error::{ExperimentError, Result};
pub use record::{ExperimentRecord, SegmentRecord, TraceRecord};
pub use store::{ExperimentMetadata, TraceStore};
pub use trace::{Segment, SegmentKind, Trace};
pub use view::Experiment;

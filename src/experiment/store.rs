use log::debug;
use ndarray::Array1;
use crate::experiment::alternance::TraceAlternance;
use crate::experiment::config::LoadOptions;
use crate::experiment::error::Result;
use crate::experiment::record::ExperimentRecord;
use crate::experiment::trace::Trace;
/// Experiment-wide protocol settings, fixed for the lifetime of the store.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentMetadata {
    pub version: String,
    pub dt: f64,
    pub duration: f64,
    pub frequencies: Array1<f64>,
    pub amplitudes: Array1<f64>,
    pub phases: Array1<f64>,
    pub rest_level: f64,
    pub step_level: f64,
    pub step_delay: f64,
    pub drop_delay: f64,
    pub trace_count: usize,
    pub trace_pause: f64,
    pub trace_alternance: TraceAlternance,
}
/// Typed copy of an experiment record. No numerical transformation is applied.
#[derive(Clone, Debug)]
pub struct TraceStore {
    metadata: ExperimentMetadata,
    traces: Vec<Trace>,
}
impl TraceStore {
    pub fn from_record(record: ExperimentRecord, options: LoadOptions) -> Result<Self> {
        if options.validate_segments {
            record.validate()?;
        }
        let metadata = ExperimentMetadata {
            version: record.version,
            dt: record.dt,
            duration: record.duration,
            frequencies: Array1::from_vec(record.frequencies),
            amplitudes: Array1::from_vec(record.amplitudes),
            phases: Array1::from_vec(record.phases),
            rest_level: record.rest_level,
            step_level: record.step_level,
            step_delay: record.step_delay,
            drop_delay: record.drop_delay,
            trace_count: record.trace_count,
            trace_pause: record.trace_pause,
            trace_alternance: TraceAlternance::from_raw(record.trace_alternance),
        };
        let traces: Vec<Trace> = record.traces.into_iter().map(Trace::from).collect();
        debug!(
            "loaded experiment v{} with {} traces ({:?})",
            metadata.version,
            traces.len(),
            metadata.trace_alternance
        );
        Ok(Self { metadata, traces })
    }
    pub fn metadata(&self) -> &ExperimentMetadata {
        &self.metadata
    }
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }
    pub fn get(&self, index: usize) -> Option<&Trace> {
        self.traces.get(index)
    }
    pub fn len(&self) -> usize {
        self.traces.len()
    }
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::record::{SegmentRecord, TraceRecord};
    fn segment(values: Vec<f64>) -> SegmentRecord {
        SegmentRecord {
            time: values.clone(),
            stimulation: values.clone(),
            response: values,
        }
    }
    fn record(trace_count: usize, alternance: i64) -> ExperimentRecord {
        ExperimentRecord {
            version: "2.1".into(),
            dt: 1e-4,
            duration: 2.0,
            frequencies: vec![1.0, 3.0, 7.0],
            amplitudes: vec![5.0, 5.0, 5.0],
            phases: vec![0.0, 1.0, 2.0],
            rest_level: -65.0,
            step_level: -55.0,
            step_delay: 0.5,
            drop_delay: 0.25,
            trace_count,
            trace_pause: 3.0,
            trace_alternance: alternance,
            traces: (0..trace_count)
                .map(|i| TraceRecord {
                    step: segment(vec![i as f64]),
                    multisine: segment(vec![i as f64, i as f64 + 0.5]),
                    drop: segment(vec![-(i as f64)]),
                })
                .collect(),
        }
    }
    #[test]
    fn copies_metadata_and_traces() {
        let store = TraceStore::from_record(record(3, 0), LoadOptions::default()).unwrap();
        let meta = store.metadata();
        assert_eq!(meta.version, "2.1");
        assert_eq!(meta.trace_count, 3);
        assert_eq!(meta.frequencies.to_vec(), vec![1.0, 3.0, 7.0]);
        assert_eq!(meta.phases[2], 2.0);
        assert_eq!(meta.trace_alternance, TraceAlternance::None);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(2).unwrap().multisine.time.to_vec(), vec![2.0, 2.5]);
        assert_eq!(store.traces()[1].drop.response.to_vec(), vec![-1.0]);
        assert!(store.get(3).is_none());
    }
    #[test]
    fn resolves_alternance_at_load() {
        let store = TraceStore::from_record(record(1, -1), LoadOptions::default()).unwrap();
        assert_eq!(
            store.metadata().trace_alternance,
            TraceAlternance::Unsupported(-1)
        );
    }
    #[test]
    fn trusting_load_skips_shape_checks() {
        let mut rec = record(2, 0);
        rec.trace_count = 5;
        assert!(TraceStore::from_record(rec.clone(), LoadOptions::default()).is_err());
        let store = TraceStore::from_record(rec, LoadOptions::trusting()).unwrap();
        assert_eq!(store.metadata().trace_count, 5);
        assert_eq!(store.len(), 2);
    }
}

use std::path::Path;
use log::trace;
use ndarray::{Array1, Zip};
use crate::experiment::alternance::TraceAlternance;
use crate::experiment::config::LoadOptions;
use crate::experiment::error::{ExperimentError, Result};
use crate::experiment::record::ExperimentRecord;
use crate::experiment::store::{ExperimentMetadata, TraceStore};
use crate::experiment::trace::Trace;
use crate::measurement::Measurement;
/// A recorded RTXI experiment seen as an array of measurements.
///
/// Each measurement is the multisine part of one trace. The experiment is
/// read-only after loading, so it can be shared between threads freely.
#[derive(Clone, Debug)]
pub struct Experiment {
    store: TraceStore,
}
impl Experiment {
    pub fn from_store(store: TraceStore) -> Self {
        Self { store }
    }
    pub fn from_record(record: ExperimentRecord, options: LoadOptions) -> Result<Self> {
        TraceStore::from_record(record, options).map(Self::from_store)
    }
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_record(ExperimentRecord::from_json_str(text)?, LoadOptions::default())
    }
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with(path, LoadOptions::default())
    }
    pub fn from_path_with(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self> {
        Self::from_record(ExperimentRecord::from_path(path)?, options)
    }
    pub fn version(&self) -> &str {
        &self.store.metadata().version
    }
    pub fn metadata(&self) -> &ExperimentMetadata {
        self.store.metadata()
    }
    /// Number of recorded traces.
    pub fn count(&self) -> usize {
        self.store.len()
    }
    pub fn trace(&self, index: usize) -> Result<&Trace> {
        self.store.get(index).ok_or(ExperimentError::IndexOutOfRange {
            index,
            count: self.count(),
        })
    }
    /// Measurement built from the multisine segment of trace `index`.
    pub fn get_measurement(&self, index: usize) -> Result<Measurement> {
        let multisine = &self.trace(index)?.multisine;
        Ok(self.measurement_from(
            multisine.time.clone(),
            multisine.stimulation.clone(),
            multisine.response.clone(),
        ))
    }
    pub fn measurements(&self) -> impl Iterator<Item = Measurement> + '_ {
        self.store.traces().iter().map(|trace| {
            self.measurement_from(
                trace.multisine.time.clone(),
                trace.multisine.stimulation.clone(),
                trace.multisine.response.clone(),
            )
        })
    }
    /// Elementwise mean of the selected measurements' `t`, `x` and `y`.
    ///
    /// Terms are accumulated in the order given as `acc += term / n`. Indices
    /// are checked as they are reached, so the first invalid one is reported.
    pub fn average(&self, indices: &[usize]) -> Result<Measurement> {
        if let TraceAlternance::Unsupported(raw) = self.metadata().trace_alternance {
            return Err(ExperimentError::UnsupportedAlternance(raw));
        }
        if indices.is_empty() {
            return Err(ExperimentError::EmptySelection);
        }
        trace!("averaging {} traces", indices.len());
        let n = indices.len() as f64;
        let mut acc: Option<[Array1<f64>; 3]> = None;
        for &index in indices {
            let multisine = &self.trace(index)?.multisine;
            let [t, x, y] =
                acc.get_or_insert_with(|| [0, 1, 2].map(|_| Array1::zeros(multisine.len())));
            for (sum, term) in [
                (&mut *t, &multisine.time),
                (&mut *x, &multisine.stimulation),
                (&mut *y, &multisine.response),
            ] {
                if term.len() != sum.len() {
                    return Err(ExperimentError::LengthMismatch {
                        index,
                        expected: sum.len(),
                        actual: term.len(),
                    });
                }
                accumulate_scaled(sum, term, n);
            }
        }
        let [t, x, y] = acc.ok_or(ExperimentError::EmptySelection)?;
        Ok(self.measurement_from(t, x, y))
    }
    pub fn average_all(&self) -> Result<Measurement> {
        let indices: Vec<usize> = (0..self.count()).collect();
        self.average(&indices)
    }
    fn measurement_from(&self, t: Array1<f64>, x: Array1<f64>, y: Array1<f64>) -> Measurement {
        let meta = self.metadata();
        Measurement::new(meta.dt, meta.duration, meta.frequencies.clone(), t, x, y)
    }
}
fn accumulate_scaled(sum: &mut Array1<f64>, term: &Array1<f64>, n: f64) {
    Zip::from(sum).and(term).for_each(|acc, &v| *acc += v / n);
}

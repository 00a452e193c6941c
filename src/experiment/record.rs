use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use serde::Deserialize;
use crate::experiment::error::{ExperimentError, Result};
/// Raw experiment record as written by the RTXI multisine module.
#[derive(Clone, Debug, Deserialize)]
pub struct ExperimentRecord {
    pub version: String,
    pub dt: f64,
    pub duration: f64,
    pub frequencies: Vec<f64>,
    pub amplitudes: Vec<f64>,
    pub phases: Vec<f64>,
    pub rest_level: f64,
    pub step_level: f64,
    pub step_delay: f64,
    pub drop_delay: f64,
    pub trace_count: usize,
    pub trace_pause: f64,
    pub trace_alternance: i64,
    pub traces: Vec<TraceRecord>,
}
#[derive(Clone, Debug, Deserialize)]
pub struct TraceRecord {
    pub step: SegmentRecord,
    pub multisine: SegmentRecord,
    pub drop: SegmentRecord,
}
#[derive(Clone, Debug, Deserialize)]
pub struct SegmentRecord {
    pub time: Vec<f64>,
    pub stimulation: Vec<f64>,
    pub response: Vec<f64>,
}
impl SegmentRecord {
    pub fn validate(&self, trace: usize, name: &str) -> Result<()> {
        let expected = self.time.len();
        for (field, len) in [
            ("stimulation", self.stimulation.len()),
            ("response", self.response.len()),
        ] {
            if len != expected {
                return Err(ExperimentError::MalformedRecord(format!(
                    "trace {trace} {name}.{field} has {len} samples, time has {expected}"
                )));
            }
        }
        Ok(())
    }
}
impl ExperimentRecord {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
    /// Shape checks the deserializer cannot express on its own.
    pub fn validate(&self) -> Result<()> {
        if self.traces.len() != self.trace_count {
            return Err(ExperimentError::MalformedRecord(format!(
                "trace_count is {} but {} traces were recorded",
                self.trace_count,
                self.traces.len()
            )));
        }
        for (idx, trace) in self.traces.iter().enumerate() {
            trace.step.validate(idx, "step")?;
            trace.multisine.validate(idx, "multisine")?;
            trace.drop.validate(idx, "drop")?;
        }
        Ok(())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    fn segment(len: usize) -> serde_json::Value {
        let values: Vec<f64> = (0..len).map(|i| i as f64).collect();
        json!({ "time": values, "stimulation": values, "response": values })
    }
    fn record_json(trace_count: usize, traces: usize) -> serde_json::Value {
        let traces: Vec<_> = (0..traces)
            .map(|_| json!({ "step": segment(2), "multisine": segment(4), "drop": segment(2) }))
            .collect();
        json!({
            "version": "1.0",
            "dt": 0.001,
            "duration": 0.004,
            "frequencies": [10.0, 20.0],
            "amplitudes": [1.0, 1.0],
            "phases": [0.0, 0.5],
            "rest_level": -70.0,
            "step_level": -60.0,
            "step_delay": 0.1,
            "drop_delay": 0.1,
            "trace_count": trace_count,
            "trace_pause": 1.0,
            "trace_alternance": 0,
            "traces": traces,
        })
    }
    #[test]
    fn parses_well_formed_record() {
        let record = ExperimentRecord::from_json_str(&record_json(2, 2).to_string()).unwrap();
        assert_eq!(record.version, "1.0");
        assert_eq!(record.traces.len(), 2);
        assert_eq!(record.traces[1].multisine.response, vec![0.0, 1.0, 2.0, 3.0]);
        record.validate().unwrap();
    }
    #[test]
    fn missing_key_is_malformed() {
        let mut value = record_json(1, 1);
        value.as_object_mut().unwrap().remove("dt");
        let err = ExperimentRecord::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, ExperimentError::MalformedRecord(msg) if msg.contains("dt")));
    }
    #[test]
    fn wrong_shape_is_malformed() {
        let mut value = record_json(1, 1);
        value["traces"][0]["drop"]["time"] = json!("not an array");
        let err = ExperimentRecord::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, ExperimentError::MalformedRecord(_)));
    }
    #[test]
    fn validate_rejects_trace_count_disagreement() {
        let record = ExperimentRecord::from_json_str(&record_json(3, 2).to_string()).unwrap();
        assert!(matches!(
            record.validate(),
            Err(ExperimentError::MalformedRecord(_))
        ));
    }
    #[test]
    fn validate_rejects_ragged_segment() {
        let mut value = record_json(1, 1);
        value["traces"][0]["multisine"]["response"] = json!([1.0, 2.0]);
        let record = ExperimentRecord::from_json_str(&value.to_string()).unwrap();
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("multisine.response"));
    }
    #[test]
    fn missing_file_is_io_error() {
        let err = ExperimentRecord::from_path("/nonexistent/experiment.json").unwrap_err();
        assert!(matches!(err, ExperimentError::Io(_)));
    }
}

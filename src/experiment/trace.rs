use ndarray::Array1;
use crate::experiment::record::{SegmentRecord, TraceRecord};
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Step,
    Multisine,
    Drop,
}
/// Aligned time / stimulation / response samples of one part of a sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub time: Array1<f64>,
    pub stimulation: Array1<f64>,
    pub response: Array1<f64>,
}
impl Segment {
    pub fn len(&self) -> usize {
        self.time.len()
    }
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}
impl From<SegmentRecord> for Segment {
    fn from(record: SegmentRecord) -> Self {
        Self {
            time: Array1::from_vec(record.time),
            stimulation: Array1::from_vec(record.stimulation),
            response: Array1::from_vec(record.response),
        }
    }
}
/// One recorded sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub step: Segment,
    pub multisine: Segment,
    pub drop: Segment,
}
impl Trace {
    pub fn segment(&self, kind: SegmentKind) -> &Segment {
        match kind {
            SegmentKind::Step => &self.step,
            SegmentKind::Multisine => &self.multisine,
            SegmentKind::Drop => &self.drop,
        }
    }
}
impl From<TraceRecord> for Trace {
    fn from(record: TraceRecord) -> Self {
        Self {
            step: record.step.into(),
            multisine: record.multisine.into(),
            drop: record.drop.into(),
        }
    }
}

/// Polarity alternation mode of an experiment, resolved from the raw
/// `trace_alternance` field when the store is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceAlternance {
    /// Every trace recorded with the same stimulus polarity.
    None,
    /// Positive alternance setting; traces are averaged as recorded.
    Simple(u64),
    /// Negative setting. Averaging needs sign-aware combination and is refused.
    Unsupported(i64),
}
impl TraceAlternance {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => TraceAlternance::None,
            n if n < 0 => TraceAlternance::Unsupported(n),
            n => TraceAlternance::Simple(n.unsigned_abs()),
        }
    }
    pub fn raw(&self) -> i64 {
        match *self {
            TraceAlternance::None => 0,
            TraceAlternance::Simple(n) => n as i64,
            TraceAlternance::Unsupported(n) => n,
        }
    }
    pub fn supports_averaging(&self) -> bool {
        !matches!(self, TraceAlternance::Unsupported(_))
    }
}

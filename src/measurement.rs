use ndarray::Array1;
/// One multisine time series plus the frequency-domain metadata needed to analyse it.
///
/// Built either from a single trace or from an average of several. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    dt: f64,
    duration: f64,
    frequencies: Array1<f64>,
    t: Array1<f64>,
    x: Array1<f64>,
    y: Array1<f64>,
}
impl Measurement {
    pub fn new(
        dt: f64,
        duration: f64,
        frequencies: Array1<f64>,
        t: Array1<f64>,
        x: Array1<f64>,
        y: Array1<f64>,
    ) -> Self {
        Self {
            dt,
            duration,
            frequencies,
            t,
            x,
            y,
        }
    }
    pub fn dt(&self) -> f64 {
        self.dt
    }
    pub fn duration(&self) -> f64 {
        self.duration
    }
    pub fn frequencies(&self) -> &Array1<f64> {
        &self.frequencies
    }
    /// Sample times (s).
    pub fn t(&self) -> &Array1<f64> {
        &self.t
    }
    /// Stimulation.
    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }
    /// Response.
    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }
    pub fn len(&self) -> usize {
        self.t.len()
    }
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
    /// Two measurements can be combined sample-by-sample only when their
    /// time bases have the same length and spacing.
    pub fn is_aligned_with(&self, other: &Measurement) -> bool {
        self.t.len() == other.t.len() && self.dt == other.dt
    }
}

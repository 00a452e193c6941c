#[derive(Clone, Copy, Debug)]
pub struct LoadOptions {
    /// Check that every segment carries equal-length time, stimulation and
    /// response arrays, and that `traces` holds exactly `trace_count` entries.
    /// When disabled the record is copied through as-is.
    pub validate_segments: bool,
}
impl LoadOptions {
    pub fn trusting() -> Self {
        Self {
            validate_segments: false,
        }
    }
}
impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            validate_segments: true,
        }
    }
}

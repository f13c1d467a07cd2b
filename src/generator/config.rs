/// Configuration for the synthetic curve generator.
#[derive(Debug, Clone)]
pub struct CurveConfig {
    /// Spacing between consecutive data points
    pub cadence_secs: u32,

    /// Bounds applied to every score after jitter and rounding
    pub min_score: u8,
    pub max_score: u8,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            cadence_secs: 2,
            min_score: 0,
            max_score: 100,
        }
    }
}

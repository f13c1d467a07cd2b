use serde::{Deserialize, Serialize};

/// Proximity windows used when projecting the dashboard at a playback time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectorConfig {
    /// A data point is live while `|timestamp - t|` is below this
    pub sentiment_window_secs: f64,

    /// Suggestions and moments are shown while `|timestamp - t|` is below this
    pub suggestion_window_secs: f64,

    /// Score reported when no data point is live
    pub neutral_score: u8,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            sentiment_window_secs: 2.0,
            suggestion_window_secs: 5.0,
            neutral_score: 50,
        }
    }
}

//! Aggregate analysis models.
//!
//! A `PitchAnalysis` is created wholesale, either from the demo catalogue or by
//! the mock analyzer, and lives only as long as the dashboard showing it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MicroMoment, SentimentDataPoint, SmartSuggestion};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SpeakingPace {
    TooFast,
    Optimal,
    TooSlow,
}

impl SpeakingPace {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeakingPace::TooFast => "too-fast",
            SpeakingPace::Optimal => "optimal",
            SpeakingPace::TooSlow => "too-slow",
        }
    }

    /// Human readable form, e.g. "too fast".
    pub fn display(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PitchMetrics {
    pub average_engagement: u8,
    pub peak_moments: u32,
    pub critical_moments: u32,
    pub speaking_pace: SpeakingPace,
    pub total_duration: u32,
    pub clarity: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchAnalysis {
    pub id: String,
    pub title: String,
    /// Seconds.
    pub duration: u32,
    pub video_url: String,
    pub thumbnail_url: String,
    pub sentiment_data: Vec<SentimentDataPoint>,
    pub micro_moments: Vec<MicroMoment>,
    pub suggestions: Vec<SmartSuggestion>,
    pub metrics: PitchMetrics,
    pub analyzed_at: DateTime<Utc>,
    pub is_demo: bool,
}

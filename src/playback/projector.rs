//! Derives what the dashboard shows at a given playback time.

use serde::Serialize;

use crate::models::{
    MicroMoment, PitchAnalysis, SentimentDataPoint, SentimentLabel, SmartSuggestion,
};
use crate::playback::config::ProjectorConfig;
use crate::playback::state::ViewState;

/// Everything that depends on the playhead.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub current_time: f64,
    pub score: u8,
    pub label: SentimentLabel,
    pub color: String,
    pub suggestions: Vec<SmartSuggestion>,
    pub moments: Vec<MicroMoment>,
}

/// First point in input order within the sentiment window of `time`.
pub fn active_point<'a>(
    data: &'a [SentimentDataPoint],
    time: f64,
    config: &ProjectorConfig,
) -> Option<&'a SentimentDataPoint> {
    data.iter()
        .find(|point| (point.timestamp as f64 - time).abs() < config.sentiment_window_secs)
}

/// Live engagement score, or the neutral score when no point is near `time`.
pub fn active_sentiment(data: &[SentimentDataPoint], time: f64, config: &ProjectorConfig) -> u8 {
    active_point(data, time, config)
        .map(|point| point.score)
        .unwrap_or(config.neutral_score)
}

/// Non-dismissed suggestions inside the suggestion window, in input order.
pub fn active_suggestions<'a>(
    suggestions: &'a [SmartSuggestion],
    view: &ViewState,
    time: f64,
    config: &ProjectorConfig,
) -> Vec<&'a SmartSuggestion> {
    suggestions
        .iter()
        .filter(|s| !s.dismissed && !view.is_dismissed(&s.id))
        .filter(|s| (s.timestamp as f64 - time).abs() < config.suggestion_window_secs)
        .collect()
}

pub fn active_moments<'a>(
    moments: &'a [MicroMoment],
    time: f64,
    config: &ProjectorConfig,
) -> Vec<&'a MicroMoment> {
    moments
        .iter()
        .filter(|m| (m.timestamp as f64 - time).abs() < config.suggestion_window_secs)
        .collect()
}

/// Coach panel list: every suggestion not dismissed, regardless of time.
pub fn visible_suggestions<'a>(
    suggestions: &'a [SmartSuggestion],
    view: &ViewState,
) -> Vec<&'a SmartSuggestion> {
    suggestions
        .iter()
        .filter(|s| !s.dismissed && !view.is_dismissed(&s.id))
        .collect()
}

/// Project `pitch` at the view's current time.
pub fn project(pitch: &PitchAnalysis, view: &ViewState, config: &ProjectorConfig) -> Projection {
    let time = view.current_time;
    let score = active_sentiment(&pitch.sentiment_data, time, config);
    let label = SentimentLabel::from_score(score);

    Projection {
        current_time: time,
        score,
        label,
        color: label.hex(),
        suggestions: active_suggestions(&pitch.suggestions, view, time, config)
            .into_iter()
            .cloned()
            .collect(),
        moments: active_moments(&pitch.micro_moments, time, config)
            .into_iter()
            .cloned()
            .collect(),
    }
}

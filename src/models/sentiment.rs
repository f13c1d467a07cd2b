//! Sentiment curve data models.

use serde::{Deserialize, Serialize};

/// Scores strictly above this are engaging.
pub const ENGAGING_THRESHOLD: u8 = 70;
/// Scores strictly above this (and not engaging) are losing the audience.
pub const LOSING_THRESHOLD: u8 = 40;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Critical,
    Losing,
    Engaging,
}

impl SentimentLabel {
    pub fn from_score(score: u8) -> Self {
        if score > ENGAGING_THRESHOLD {
            SentimentLabel::Engaging
        } else if score > LOSING_THRESHOLD {
            SentimentLabel::Losing
        } else {
            SentimentLabel::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Critical => "critical",
            SentimentLabel::Losing => "losing",
            SentimentLabel::Engaging => "engaging",
        }
    }

    /// Banner text shown over the player.
    pub fn banner(&self) -> &'static str {
        match self {
            SentimentLabel::Critical => "CRITICAL",
            SentimentLabel::Losing => "LOSING THEM",
            SentimentLabel::Engaging => "ENGAGING",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            SentimentLabel::Critical => (239, 68, 68),
            SentimentLabel::Losing => (234, 179, 8),
            SentimentLabel::Engaging => (34, 197, 94),
        }
    }

    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SentimentDataPoint {
    /// Seconds from the start of the pitch.
    pub timestamp: u32,
    pub score: u8,
    pub label: SentimentLabel,
}

impl SentimentDataPoint {
    pub fn new(timestamp: u32, score: u8) -> Self {
        Self {
            timestamp,
            score,
            label: SentimentLabel::from_score(score),
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EngagementRating {
    Excellent,
    Good,
    NeedsWork,
}

impl EngagementRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementRating::Excellent => "Excellent",
            EngagementRating::Good => "Good",
            EngagementRating::NeedsWork => "Needs Work",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

/// Three-step colour band shared by the clarity bar and the demo card badge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub engagement_rating: EngagementRating,
    pub grade: Grade,
    pub clarity_tier: Tier,
    pub badge_tier: Tier,
    pub pace: String,
    pub duration_label: String,
}

//! Derived labels for the metrics panel and the demo cards.
//!
//! All of these are read-only views over `PitchMetrics`; nothing is
//! recomputed from the sentiment series.

mod types;

pub use types::{EngagementRating, Grade, MetricsSummary, Tier};

use crate::models::PitchMetrics;
use crate::playback::timeline::format_time;

pub fn engagement_rating(average_engagement: u8) -> EngagementRating {
    match average_engagement {
        e if e > 70 => EngagementRating::Excellent,
        e if e > 50 => EngagementRating::Good,
        _ => EngagementRating::NeedsWork,
    }
}

pub fn grade(average_engagement: u8) -> Grade {
    match average_engagement {
        e if e > 80 => Grade::A,
        e if e > 70 => Grade::B,
        e if e > 60 => Grade::C,
        _ => Grade::D,
    }
}

fn tier(value: u8, high_above: u8, medium_above: u8) -> Tier {
    if value > high_above {
        Tier::High
    } else if value > medium_above {
        Tier::Medium
    } else {
        Tier::Low
    }
}

pub fn clarity_tier(clarity: u8) -> Tier {
    tier(clarity, 80, 60)
}

/// Engagement badge on the demo pitch cards.
pub fn badge_tier(average_engagement: u8) -> Tier {
    tier(average_engagement, 80, 60)
}

pub fn summarize(metrics: &PitchMetrics) -> MetricsSummary {
    MetricsSummary {
        engagement_rating: engagement_rating(metrics.average_engagement),
        grade: grade(metrics.average_engagement),
        clarity_tier: clarity_tier(metrics.clarity),
        badge_tier: badge_tier(metrics.average_engagement),
        pace: metrics.speaking_pace.display(),
        duration_label: format_time(metrics.total_duration as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpeakingPace;

    #[test]
    fn grade_boundaries() {
        assert_eq!(grade(81), Grade::A);
        assert_eq!(grade(80), Grade::B);
        assert_eq!(grade(71), Grade::B);
        assert_eq!(grade(70), Grade::C);
        assert_eq!(grade(60), Grade::D);
    }

    #[test]
    fn rating_boundaries() {
        assert_eq!(engagement_rating(71), EngagementRating::Excellent);
        assert_eq!(engagement_rating(70), EngagementRating::Good);
        assert_eq!(engagement_rating(50), EngagementRating::NeedsWork);
        assert_eq!(EngagementRating::NeedsWork.as_str(), "Needs Work");
    }

    #[test]
    fn summarizes_bad_demo_metrics() {
        let summary = summarize(&PitchMetrics {
            average_engagement: 42,
            peak_moments: 0,
            critical_moments: 5,
            speaking_pace: SpeakingPace::TooFast,
            total_duration: 150,
            clarity: 38,
        });

        assert_eq!(summary.grade, Grade::D);
        assert_eq!(summary.engagement_rating, EngagementRating::NeedsWork);
        assert_eq!(summary.clarity_tier, Tier::Low);
        assert_eq!(summary.badge_tier, Tier::Low);
        assert_eq!(summary.pace, "too fast");
        assert_eq!(summary.duration_label, "2:30");
    }
}

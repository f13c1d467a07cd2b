use chrono::Utc;
use rand::Rng;

use crate::demo::catalog;
use crate::generator::{generate_sentiment_data, PitchPattern};
use crate::models::{PitchAnalysis, PitchMetrics, SpeakingPace};

fn demo_pitch<R: Rng + ?Sized>(
    slug: &str,
    title: &str,
    pattern: PitchPattern,
    duration: u32,
    metrics: PitchMetrics,
    rng: &mut R,
) -> PitchAnalysis {
    let (micro_moments, suggestions) = match pattern {
        PitchPattern::Poor => (catalog::poor_moments(), catalog::poor_suggestions()),
        PitchPattern::Solid => (catalog::solid_moments(), catalog::solid_suggestions()),
        PitchPattern::Expert => (catalog::expert_moments(), catalog::expert_suggestions()),
    };

    PitchAnalysis {
        id: format!("demo-{slug}-pitch"),
        title: title.into(),
        duration,
        video_url: format!("/demo-videos/{slug}-pitch.mp4"),
        thumbnail_url: format!("/demo-videos/{slug}-pitch-thumb.jpg"),
        sentiment_data: generate_sentiment_data(pattern, duration, rng),
        micro_moments,
        suggestions,
        metrics,
        analyzed_at: Utc::now(),
        is_demo: true,
    }
}

pub fn bad_pitch<R: Rng + ?Sized>(rng: &mut R) -> PitchAnalysis {
    demo_pitch(
        "bad",
        "Sales Pitch - Needs Improvement",
        PitchPattern::Poor,
        150,
        PitchMetrics {
            average_engagement: 42,
            peak_moments: 0,
            critical_moments: 5,
            speaking_pace: SpeakingPace::TooFast,
            total_duration: 150,
            clarity: 38,
        },
        rng,
    )
}

pub fn good_pitch<R: Rng + ?Sized>(rng: &mut R) -> PitchAnalysis {
    demo_pitch(
        "good",
        "Product Demo - Solid Performance",
        PitchPattern::Solid,
        170,
        PitchMetrics {
            average_engagement: 73,
            peak_moments: 5,
            critical_moments: 1,
            speaking_pace: SpeakingPace::Optimal,
            total_duration: 170,
            clarity: 78,
        },
        rng,
    )
}

pub fn expert_pitch<R: Rng + ?Sized>(rng: &mut R) -> PitchAnalysis {
    demo_pitch(
        "expert",
        "Enterprise Sales - Top Performer",
        PitchPattern::Expert,
        180,
        PitchMetrics {
            average_engagement: 91,
            peak_moments: 6,
            critical_moments: 0,
            speaking_pace: SpeakingPace::Optimal,
            total_duration: 180,
            clarity: 94,
        },
        rng,
    )
}

/// The three demo pitches in display order.
pub fn demo_pitches<R: Rng + ?Sized>(rng: &mut R) -> Vec<PitchAnalysis> {
    vec![bad_pitch(rng), good_pitch(rng), expert_pitch(rng)]
}

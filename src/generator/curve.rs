use rand::Rng;

use crate::generator::config::CurveConfig;
use crate::generator::phases::PitchPattern;
use crate::models::SentimentDataPoint;

/// Generate a sentiment curve for `pattern` covering `[0, duration_secs]`
/// at the default 2 second cadence.
pub fn generate_sentiment_data<R: Rng + ?Sized>(
    pattern: PitchPattern,
    duration_secs: u32,
    rng: &mut R,
) -> Vec<SentimentDataPoint> {
    generate_with_config(pattern, duration_secs, &CurveConfig::default(), rng)
}

/// Score = phase base + uniform jitter in `[0, jitter)`, rounded and clamped.
/// Phase boundaries are not smoothed.
pub fn generate_with_config<R: Rng + ?Sized>(
    pattern: PitchPattern,
    duration_secs: u32,
    config: &CurveConfig,
    rng: &mut R,
) -> Vec<SentimentDataPoint> {
    let cadence = config.cadence_secs.max(1);
    // Bounds may arrive swapped from user settings; scores never exceed 100.
    let lo = config.min_score.min(config.max_score).min(100) as f64;
    let hi = config.min_score.max(config.max_score).min(100) as f64;
    let intervals = duration_secs / cadence;
    let mut data = Vec::with_capacity(intervals as usize + 1);

    for i in 0..=intervals {
        let timestamp = i * cadence;
        let phase = pattern.phase_at(timestamp);
        let raw = phase.base + rng.gen::<f64>() * phase.jitter;
        let score = raw.round().clamp(lo, hi) as u8;

        data.push(SentimentDataPoint::new(timestamp, score));
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentLabel;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn covers_duration_inclusive_at_two_second_steps() {
        let mut rng = StdRng::seed_from_u64(7);
        for duration in [0u32, 1, 2, 3, 119, 120, 151] {
            let data = generate_sentiment_data(PitchPattern::Solid, duration, &mut rng);
            let expected: Vec<u32> = (0..=duration / 2).map(|i| i * 2).collect();
            let actual: Vec<u32> = data.iter().map(|p| p.timestamp).collect();
            assert_eq!(actual, expected, "duration {duration}");
        }
    }

    #[test]
    fn zero_jitter_source_yields_phase_bases() {
        let mut rng = StepRng::new(0, 0);
        let data = generate_sentiment_data(PitchPattern::Poor, 120, &mut rng);

        assert_eq!(data[0].score, 65);
        assert_eq!(data[10].score, 35); // t=20
        assert_eq!(data[30].score, 25); // t=60
        assert_eq!(data[50].score, 40); // t=100
        assert_eq!(data[50].label, SentimentLabel::Critical);
    }

    #[test]
    fn max_jitter_source_stays_inside_band() {
        let mut rng = StepRng::new(u64::MAX, 0);
        let data = generate_sentiment_data(PitchPattern::Expert, 180, &mut rng);

        // 92 + just under 6 rounds to 98
        assert_eq!(data.last().unwrap().score, 98);
        assert!(data.iter().all(|p| p.score <= 100));
        assert!(data.iter().all(|p| p.label == SentimentLabel::Engaging));
    }

    #[test]
    fn labels_follow_rounded_scores() {
        let mut rng = StdRng::seed_from_u64(42);
        for pattern in [PitchPattern::Poor, PitchPattern::Solid, PitchPattern::Expert] {
            for point in generate_sentiment_data(pattern, 200, &mut rng) {
                assert_eq!(point.label, SentimentLabel::from_score(point.score));
            }
        }
    }

    #[test]
    fn custom_cadence_is_respected() {
        let config = CurveConfig {
            cadence_secs: 5,
            ..CurveConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let data = generate_with_config(PitchPattern::Solid, 22, &config, &mut rng);
        let stamps: Vec<u32> = data.iter().map(|p| p.timestamp).collect();
        assert_eq!(stamps, vec![0, 5, 10, 15, 20]);
    }

    #[test]
    fn swapped_score_bounds_are_normalised() {
        let config = CurveConfig {
            min_score: 90,
            max_score: 10,
            ..CurveConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        for pattern in [PitchPattern::Poor, PitchPattern::Expert] {
            let data = generate_with_config(pattern, 120, &config, &mut rng);
            assert!(data.iter().all(|p| (10..=90).contains(&p.score)));
        }

        let mut rng = StepRng::new(u64::MAX, 0);
        let data = generate_with_config(PitchPattern::Expert, 10, &config, &mut rng);
        assert!(data.iter().all(|p| p.score == 90));
    }
}

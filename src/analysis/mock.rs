//! Simulated backend analysis for user uploads.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;

use crate::analysis::file::{object_url, UploadedVideo};
use crate::demo::catalog;
use crate::error::UploadError;
use crate::generator::{generate_sentiment_data, PitchPattern};
use crate::models::{PitchAnalysis, PitchMetrics, SpeakingPace};
use crate::settings::MockAnalysisSettings;

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

pub const USER_THUMBNAIL_URL: &str = "/demo-videos/user-thumb.jpg";

/// Pretend to analyze `file`: make sure it is readable, wait the configured
/// delay, then return a solid-pattern analysis with randomized metrics.
pub async fn mock_analyze_pitch<R: Rng + ?Sized>(
    file: &UploadedVideo,
    settings: &MockAnalysisSettings,
    rng: &mut R,
) -> Result<PitchAnalysis, UploadError> {
    let metadata = tokio::fs::metadata(file.path())
        .await
        .map_err(|source| UploadError::Io {
            path: file.path().to_path_buf(),
            source,
        })?;
    log_debug!(
        "mock analysis of {} ({} bytes) started",
        file.name,
        metadata.len()
    );

    tokio::time::sleep(Duration::from_millis(settings.delay_ms)).await;

    let analyzed_at = Utc::now();
    let duration = settings.duration_secs;
    let metrics = PitchMetrics {
        average_engagement: 68 + rng.gen_range(0..15u8),
        peak_moments: 2 + rng.gen_range(0..3u32),
        critical_moments: rng.gen_range(0..2u32),
        speaking_pace: SpeakingPace::Optimal,
        total_duration: duration,
        clarity: 70 + rng.gen_range(0..15u8),
    };

    let micro_moments = catalog::solid_moments()
        .into_iter()
        .take(settings.moment_count)
        .collect();
    let suggestions = catalog::solid_suggestions()
        .into_iter()
        .take(settings.suggestion_count)
        .collect();

    let analysis = PitchAnalysis {
        id: format!("user-pitch-{}", analyzed_at.timestamp_millis()),
        title: file.title(),
        duration,
        video_url: object_url(),
        thumbnail_url: USER_THUMBNAIL_URL.to_string(),
        sentiment_data: generate_sentiment_data(PitchPattern::Solid, duration, rng),
        micro_moments,
        suggestions,
        metrics,
        analyzed_at,
        is_demo: false,
    };

    log_info!(
        "mock analysis of {} finished: {}% engagement, {}% clarity",
        file.name,
        analysis.metrics.average_engagement,
        analysis.metrics.clarity
    );

    Ok(analysis)
}

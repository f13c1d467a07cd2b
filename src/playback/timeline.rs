//! Timeline strip under the player: coloured segments, moment markers,
//! click-to-seek and time labels.

use serde::Serialize;

use crate::models::{MicroMoment, MomentType, SentimentDataPoint, SentimentLabel};
use crate::playback::config::ProjectorConfig;
use crate::playback::projector::active_point;

/// Colour used when no data point is live at a segment start.
pub const NEUTRAL_COLOR: &str = "#94a3b8";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSegment {
    pub start_secs: u32,
    /// Share of the full duration, 0..=100.
    pub width_pct: f64,
    pub tone: Option<SentimentLabel>,
}

impl TimelineSegment {
    pub fn color(&self) -> String {
        self.tone
            .map(|label| label.hex())
            .unwrap_or_else(|| NEUTRAL_COLOR.to_string())
    }
}

/// One segment per data point, each running until the next point (the last
/// one until `duration_secs`).
pub fn segments(
    data: &[SentimentDataPoint],
    duration_secs: u32,
    config: &ProjectorConfig,
) -> Vec<TimelineSegment> {
    if duration_secs == 0 {
        return Vec::new();
    }
    let duration = duration_secs as f64;

    data.iter()
        .enumerate()
        .map(|(i, point)| {
            let end = data
                .get(i + 1)
                .map(|next| next.timestamp)
                .unwrap_or(duration_secs);
            let width = end.saturating_sub(point.timestamp) as f64;

            TimelineSegment {
                start_secs: point.timestamp,
                width_pct: width / duration * 100.0,
                tone: active_point(data, point.timestamp as f64, config).map(|p| p.label),
            }
        })
        .collect()
}

/// A micro-moment pinned to the strip. Clicking its label seeks to
/// `timestamp`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MomentMarker {
    pub id: String,
    pub timestamp: u32,
    /// Offset from the strip's left edge, 0..=100.
    pub left_pct: f64,
    pub kind: MomentType,
    /// `m:ss` of `timestamp`
    pub label: String,
    pub reason: String,
}

impl MomentMarker {
    pub fn color(&self) -> String {
        let tone = match self.kind {
            MomentType::Peak => SentimentLabel::Engaging,
            MomentType::Drop => SentimentLabel::Critical,
            MomentType::Neutral => SentimentLabel::Losing,
        };
        tone.hex()
    }
}

pub fn moment_markers(moments: &[MicroMoment], duration_secs: u32) -> Vec<MomentMarker> {
    if duration_secs == 0 {
        return Vec::new();
    }

    moments
        .iter()
        .map(|moment| MomentMarker {
            id: moment.id.clone(),
            timestamp: moment.timestamp,
            left_pct: playhead_pct(moment.timestamp as f64, duration_secs),
            kind: moment.kind,
            label: format_time(moment.timestamp as f64),
            reason: moment.reason.clone(),
        })
        .collect()
}

/// Map a click at `fraction` (0..=1) of the strip width to a time.
pub fn seek_fraction(fraction: f64, duration_secs: u32) -> f64 {
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0) * duration_secs as f64
}

pub fn playhead_pct(current_time: f64, duration_secs: u32) -> f64 {
    if duration_secs == 0 {
        return 0.0;
    }
    (current_time / duration_secs as f64 * 100.0).clamp(0.0, 100.0)
}

/// `m:ss`
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(150.0), "2:30");
        assert_eq!(format_time(3_605.0), "60:05");
        assert_eq!(format_time(-4.0), "0:00");
    }

    #[test]
    fn segment_widths_cover_duration() {
        let data = vec![
            SentimentDataPoint::new(0, 80),
            SentimentDataPoint::new(2, 50),
            SentimentDataPoint::new(4, 20),
        ];
        let segs = segments(&data, 5, &ProjectorConfig::default());

        let widths: Vec<f64> = segs.iter().map(|s| s.width_pct).collect();
        assert_eq!(widths, vec![40.0, 40.0, 20.0]);
        assert_eq!(segs[1].color(), "#eab308");
        assert_eq!(segs[2].tone, Some(SentimentLabel::Critical));
    }

    #[test]
    fn segment_without_live_point_is_neutral() {
        let data = vec![SentimentDataPoint::new(0, 80)];
        let config = ProjectorConfig {
            sentiment_window_secs: 0.0,
            ..ProjectorConfig::default()
        };
        let segs = segments(&data, 10, &config);
        assert_eq!(segs[0].color(), NEUTRAL_COLOR);
    }

    #[test]
    fn markers_sit_at_their_timestamps() {
        let moments = vec![
            MicroMoment::new("a", 30, MomentType::Peak, 80, "Hook", Severity::Low),
            MicroMoment::new("b", 90, MomentType::Drop, 30, "Rambling", Severity::High),
            MicroMoment::new("c", 150, MomentType::Neutral, 50, "Past the end", Severity::Medium),
        ];
        let markers = moment_markers(&moments, 120);

        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].left_pct, 25.0);
        assert_eq!(markers[0].label, "0:30");
        assert_eq!(markers[0].color(), "#22c55e");
        assert_eq!(markers[1].left_pct, 75.0);
        assert_eq!(markers[1].label, "1:30");
        assert_eq!(markers[1].color(), "#ef4444");
        assert_eq!(markers[1].reason, "Rambling");
        assert_eq!(markers[2].left_pct, 100.0);
        assert_eq!(markers[2].color(), "#eab308");

        assert!(moment_markers(&moments, 0).is_empty());
    }

    #[test]
    fn seek_and_playhead_are_clamped() {
        assert_eq!(seek_fraction(0.5, 120), 60.0);
        assert_eq!(seek_fraction(1.4, 120), 120.0);
        assert_eq!(playhead_pct(30.0, 120), 25.0);
        assert_eq!(playhead_pct(30.0, 0), 0.0);
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PlaybackStatus {
    Paused,
    Playing,
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        PlaybackStatus::Paused
    }
}

/// Viewer-side state for one dashboard: playhead, transport and dismissals.
///
/// Nothing here is persisted; the state is dropped with the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub status: PlaybackStatus,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f32,
    /// Dismissed suggestion ids in the order they were dismissed.
    dismissed_ids: Vec<String>,
}

impl ViewState {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            status: PlaybackStatus::Paused,
            current_time: 0.0,
            duration: duration_secs as f64,
            volume: 1.0,
            dismissed_ids: Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Returns the new status.
    pub fn toggle_play_pause(&mut self) -> PlaybackStatus {
        self.status = match self.status {
            PlaybackStatus::Playing => PlaybackStatus::Paused,
            PlaybackStatus::Paused => PlaybackStatus::Playing,
        };
        self.status
    }

    /// Player reported a new position.
    pub fn time_update(&mut self, time: f64) {
        self.current_time = self.clamp_time(time);
    }

    pub fn seek(&mut self, time: f64) {
        self.current_time = self.clamp_time(time);
    }

    pub fn restart(&mut self) {
        self.seek(0.0);
        self.status = PlaybackStatus::Paused;
    }

    pub fn ended(&mut self) {
        self.status = PlaybackStatus::Paused;
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Returns false if the id was already dismissed.
    pub fn dismiss(&mut self, suggestion_id: &str) -> bool {
        if self.is_dismissed(suggestion_id) {
            return false;
        }
        self.dismissed_ids.push(suggestion_id.to_string());
        true
    }

    pub fn is_dismissed(&self, suggestion_id: &str) -> bool {
        self.dismissed_ids.iter().any(|id| id == suggestion_id)
    }

    pub fn dismissed_count(&self) -> usize {
        self.dismissed_ids.len()
    }

    /// "Show dismissed": brings every dismissed suggestion back.
    pub fn reset_dismissed(&mut self) {
        self.dismissed_ids.clear();
    }

    fn clamp_time(&self, time: f64) -> f64 {
        if time.is_nan() {
            return 0.0;
        }
        time.clamp(0.0, self.duration.max(0.0))
    }
}

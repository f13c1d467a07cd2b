use crate::models::{PitchAnalysis, SmartSuggestion};
use crate::playback::config::ProjectorConfig;
use crate::playback::projector::{project, visible_suggestions, Projection};
use crate::playback::state::ViewState;
use crate::playback::timeline::{self, MomentMarker, TimelineSegment};

/// One open analysis plus the viewer's state for it. Dropping the dashboard
/// discards both.
pub struct Dashboard {
    pitch: PitchAnalysis,
    view: ViewState,
    config: ProjectorConfig,
}

impl Dashboard {
    pub fn new(pitch: PitchAnalysis, config: ProjectorConfig) -> Self {
        let view = ViewState::new(pitch.duration);
        Self {
            pitch,
            view,
            config,
        }
    }

    pub fn pitch(&self) -> &PitchAnalysis {
        &self.pitch
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn projection(&self) -> Projection {
        project(&self.pitch, &self.view, &self.config)
    }

    pub fn coach_panel(&self) -> Vec<&SmartSuggestion> {
        visible_suggestions(&self.pitch.suggestions, &self.view)
    }

    /// Dismiss a suggestion for the rest of this viewing session.
    /// Unknown ids are ignored.
    pub fn dismiss(&mut self, suggestion_id: &str) -> bool {
        if !self.pitch.suggestions.iter().any(|s| s.id == suggestion_id) {
            return false;
        }
        self.view.dismiss(suggestion_id)
    }

    pub fn reset_dismissed(&mut self) {
        self.view.reset_dismissed();
    }

    pub fn timeline(&self) -> Vec<TimelineSegment> {
        timeline::segments(&self.pitch.sentiment_data, self.pitch.duration, &self.config)
    }

    /// Click on the timeline at `fraction` of its width.
    pub fn seek_to_fraction(&mut self, fraction: f64) {
        let time = timeline::seek_fraction(fraction, self.pitch.duration);
        self.view.seek(time);
    }

    pub fn moment_markers(&self) -> Vec<MomentMarker> {
        timeline::moment_markers(&self.pitch.micro_moments, self.pitch.duration)
    }

    /// Jump to a key moment, from its timeline marker or the moments list.
    /// Unknown ids leave the playhead where it is.
    pub fn seek_to_moment(&mut self, moment_id: &str) -> bool {
        let Some(moment) = self.pitch.micro_moments.iter().find(|m| m.id == moment_id) else {
            return false;
        };
        let time = moment.timestamp as f64;
        self.view.seek(time);
        true
    }

    /// Returns the pitch, ending the viewing session.
    pub fn close(self) -> PitchAnalysis {
        self.pitch
    }
}

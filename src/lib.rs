mod utils;

pub mod analysis;
pub mod demo;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod playback;
pub mod settings;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use log::info;

use analysis::{UploadController, UploadedVideo};
use error::UploadError;
use models::PitchAnalysis;
use playback::{timeline::format_time, Dashboard};
use settings::SettingsStore;

pub const SETTINGS_FILE: &str = "pitchpulse.settings.json";

/// Page-level state: the demo catalogue, the upload flow and at most one open
/// dashboard.
pub struct AppState {
    pub settings: SettingsStore,
    pub uploads: UploadController,
    demos: Vec<PitchAnalysis>,
    dashboard: Option<Dashboard>,
}

impl AppState {
    pub fn new(settings: SettingsStore) -> Self {
        let uploads = UploadController::new(settings.upload(), settings.mock_analysis());
        let demos = demo::demo_pitches(&mut rand::thread_rng());

        Self {
            settings,
            uploads,
            demos,
            dashboard: None,
        }
    }

    pub fn demos(&self) -> &[PitchAnalysis] {
        &self.demos
    }

    pub fn select_demo(&mut self, pitch_id: &str) -> Result<&mut Dashboard> {
        let pitch = self
            .demos
            .iter()
            .find(|p| p.id == pitch_id)
            .cloned()
            .ok_or_else(|| anyhow!("unknown demo pitch {pitch_id}"))?;

        Ok(self.open(pitch))
    }

    /// Runs the mock analysis and opens its result. On failure nothing is
    /// opened and the upload indicator is already back at idle.
    pub async fn upload(&mut self, file: UploadedVideo) -> Result<&mut Dashboard, UploadError> {
        let analysis = self.uploads.start_upload(file).await?;
        Ok(self.open(analysis))
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        self.dashboard.as_mut()
    }

    /// Leave the dashboard; its analysis and view state are discarded.
    pub fn back(&mut self) {
        if let Some(dashboard) = self.dashboard.take() {
            info!("Closed {}", dashboard.pitch().id);
        }
    }

    fn open(&mut self, pitch: PitchAnalysis) -> &mut Dashboard {
        info!("Opened {} ({})", pitch.id, pitch.title);
        self.dashboard
            .insert(Dashboard::new(pitch, self.settings.projector()))
    }
}

/// Demo runner: lists the demo pitches and plays the first one through,
/// logging what the dashboard would show.
pub fn run() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Pitch Pulse starting up...");

    let settings = SettingsStore::new(PathBuf::from(SETTINGS_FILE))?;

    let mut state = AppState::new(settings);

    for pitch in state.demos() {
        let summary = metrics::summarize(&pitch.metrics);
        info!(
            "{} [{}] {}% engagement ({:?}), grade {:?}, peaks {}, critical {}, pace {}",
            pitch.title,
            summary.duration_label,
            pitch.metrics.average_engagement,
            summary.badge_tier,
            summary.grade,
            pitch.metrics.peak_moments,
            pitch.metrics.critical_moments,
            summary.pace.to_uppercase()
        );
    }

    let first_id = state
        .demos()
        .first()
        .map(|p| p.id.clone())
        .ok_or_else(|| anyhow!("demo catalogue is empty"))?;
    let dashboard = state.select_demo(&first_id)?;
    dashboard.view_mut().toggle_play_pause();

    let duration = dashboard.pitch().duration;
    for second in (0..=duration).step_by(15) {
        dashboard.view_mut().time_update(second as f64);
        let projection = dashboard.projection();
        info!(
            "{} / {}  {}% {}",
            format_time(projection.current_time),
            format_time(duration as f64),
            projection.score,
            projection.label.banner()
        );
        for suggestion in &projection.suggestions {
            info!("    coach: {}", suggestion.message);
        }
        if let Some(first) = projection.suggestions.first() {
            dashboard.dismiss(&first.id);
        }
    }
    dashboard.view_mut().ended();
    info!("{} suggestions dismissed", dashboard.view().dismissed_count());

    state.back();
    Ok(())
}

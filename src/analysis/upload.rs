//! Upload flow around the mock analysis: a progress ticker that creeps up to
//! a ceiling while the analysis runs, then a short 100% hold before the
//! result is handed over.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::analysis::file::UploadedVideo;
use crate::analysis::mock::mock_analyze_pitch;
use crate::error::UploadError;
use crate::models::PitchAnalysis;
use crate::settings::{MockAnalysisSettings, UploadSettings};

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_error, log_info, log_warn};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum UploadStatus {
    Idle,
    Uploading,
    Completed,
}

impl Default for UploadStatus {
    fn default() -> Self {
        UploadStatus::Idle
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadSnapshot {
    pub status: UploadStatus,
    /// 0..=100
    pub progress: u8,
}

impl UploadSnapshot {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

struct Ticker {
    handle: JoinHandle<()>,
    cancel_token: CancellationToken,
}

#[derive(Clone)]
pub struct UploadController {
    state: Arc<Mutex<UploadSnapshot>>,
    updates: Arc<watch::Sender<UploadSnapshot>>,
    ticker: Arc<Mutex<Option<Ticker>>>,
    upload: UploadSettings,
    analysis: MockAnalysisSettings,
}

impl UploadController {
    pub fn new(upload: UploadSettings, analysis: MockAnalysisSettings) -> Self {
        let (updates, _) = watch::channel(UploadSnapshot::default());
        Self {
            state: Arc::new(Mutex::new(UploadSnapshot::default())),
            updates: Arc::new(updates),
            ticker: Arc::new(Mutex::new(None)),
            upload,
            analysis,
        }
    }

    pub async fn snapshot(&self) -> UploadSnapshot {
        *self.state.lock().await
    }

    /// Receives every state change; the initial value is the current state.
    pub fn subscribe(&self) -> watch::Receiver<UploadSnapshot> {
        self.updates.subscribe()
    }

    pub async fn start_upload(&self, file: UploadedVideo) -> Result<PitchAnalysis, UploadError> {
        let mut rng = StdRng::from_entropy();
        self.start_upload_with_rng(file, &mut rng).await
    }

    /// Same as [`start_upload`](Self::start_upload) with a caller supplied
    /// random source for the generated analysis.
    pub async fn start_upload_with_rng<R: Rng + ?Sized>(
        &self,
        file: UploadedVideo,
        rng: &mut R,
    ) -> Result<PitchAnalysis, UploadError> {
        if !file.is_video() {
            log_error!("Upload failed: {} has type {}", file.name, file.content_type);
            return Err(UploadError::UnsupportedMedia(file.name));
        }

        {
            let mut state = self.state.lock().await;
            if state.status != UploadStatus::Idle {
                log_warn!(
                    "Upload of {} rejected: another upload is in progress",
                    file.name
                );
                return Err(UploadError::AlreadyUploading);
            }
            state.status = UploadStatus::Uploading;
            state.progress = 0;
            self.publish(*state);
        }

        let mut guard = UploadGuard::new(self);

        log_info!("Upload of {} started", file.name);
        self.spawn_ticker().await;

        let result = mock_analyze_pitch(&file, &self.analysis, rng).await;

        self.stop_ticker().await;

        match result {
            Ok(analysis) => {
                {
                    let mut state = self.state.lock().await;
                    state.status = UploadStatus::Completed;
                    state.progress = 100;
                    self.publish(*state);
                }

                time::sleep(Duration::from_millis(self.upload.finalize_delay_ms)).await;
                self.reset().await;
                guard.disarm();

                log_info!("Upload of {} analyzed as {}", file.name, analysis.id);
                Ok(analysis)
            }
            Err(err) => {
                log_error!("Upload failed: {}", err);
                self.reset().await;
                guard.disarm();
                Err(err)
            }
        }
    }

    async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.reset();
        self.publish(*state);
    }

    fn publish(&self, snapshot: UploadSnapshot) {
        self.updates.send_replace(snapshot);
    }

    async fn spawn_ticker(&self) {
        let mut ticker_guard = self.ticker.lock().await;
        if let Some(previous) = ticker_guard.take() {
            previous.cancel_token.cancel();
            previous.handle.abort();
        }

        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(progress_loop(
            self.state.clone(),
            self.updates.clone(),
            self.upload.clone(),
            cancel_token.clone(),
        ));

        *ticker_guard = Some(Ticker {
            handle,
            cancel_token,
        });
    }

    /// Cancels the ticker and waits for it, so no tick lands after this returns.
    async fn stop_ticker(&self) {
        if let Some(ticker) = self.ticker.lock().await.take() {
            ticker.cancel_token.cancel();
            if let Err(err) = ticker.handle.await {
                log_debug!("progress ticker ended abnormally: {}", err);
            }
        }
    }
}

/// Puts the controller back to idle if an upload future is dropped before it
/// finishes, so an abandoned upload cannot block the next one.
struct UploadGuard {
    state: Arc<Mutex<UploadSnapshot>>,
    updates: Arc<watch::Sender<UploadSnapshot>>,
    ticker: Arc<Mutex<Option<Ticker>>>,
    armed: bool,
}

impl UploadGuard {
    fn new(controller: &UploadController) -> Self {
        Self {
            state: controller.state.clone(),
            updates: controller.updates.clone(),
            ticker: controller.ticker.clone(),
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for UploadGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        log_warn!("Upload abandoned before completion, resetting state");

        let ticker = match self.ticker.try_lock() {
            Ok(mut slot) => {
                if let Some(ticker) = slot.take() {
                    ticker.cancel_token.cancel();
                    ticker.handle.abort();
                }
                None
            }
            Err(_) => Some(self.ticker.clone()),
        };

        let state = match self.state.try_lock() {
            Ok(mut snapshot) => {
                snapshot.reset();
                self.updates.send_replace(*snapshot);
                None
            }
            Err(_) => Some(self.state.clone()),
        };

        if ticker.is_none() && state.is_none() {
            return;
        }

        // Something else holds a lock right now; finish the cleanup on the runtime.
        let updates = self.updates.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn(async move {
                    if let Some(ticker) = ticker {
                        if let Some(ticker) = ticker.lock().await.take() {
                            ticker.cancel_token.cancel();
                            ticker.handle.abort();
                        }
                    }
                    if let Some(state) = state {
                        let mut snapshot = state.lock().await;
                        snapshot.reset();
                        updates.send_replace(*snapshot);
                    }
                });
            }
            Err(err) => {
                log_error!("Could not reset abandoned upload: {}", err);
            }
        }
    }
}

async fn progress_loop(
    state: Arc<Mutex<UploadSnapshot>>,
    updates: Arc<watch::Sender<UploadSnapshot>>,
    settings: UploadSettings,
    cancel_token: CancellationToken,
) {
    let period = Duration::from_millis(settings.tick_interval_ms.max(1));
    let mut interval = time::interval_at(Instant::now() + period, period);

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => break,
            _ = interval.tick() => {
                let mut guard = state.lock().await;
                if guard.status != UploadStatus::Uploading {
                    break;
                }

                guard.progress = guard
                    .progress
                    .saturating_add(settings.progress_step)
                    .min(settings.progress_ceiling);
                updates.send_replace(*guard);

                if guard.progress >= settings.progress_ceiling {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn controller() -> UploadController {
        UploadController::new(UploadSettings::default(), MockAnalysisSettings::default())
    }

    fn video(dir: &TempDir) -> UploadedVideo {
        let path = dir.path().join("seed-round.mp4");
        std::fs::write(&path, b"not really a video").unwrap();
        UploadedVideo::new(path, "video/mp4")
    }

    #[tokio::test(start_paused = true)]
    async fn successful_upload_returns_to_idle() {
        let dir = TempDir::new().unwrap();
        let controller = controller();
        let started = Instant::now();

        let analysis = controller.start_upload(video(&dir)).await.unwrap();

        assert_eq!(analysis.title, "seed-round");
        assert!(started.elapsed() >= Duration::from_millis(3_500));
        assert_eq!(controller.snapshot().await, UploadSnapshot::default());
        assert_eq!(*controller.subscribe().borrow(), UploadSnapshot::default());
    }

    #[tokio::test(start_paused = true)]
    async fn progress_creeps_to_ceiling_then_completes() {
        let dir = TempDir::new().unwrap();
        let controller = controller();
        let file = video(&dir);

        let task = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.start_upload(file).await })
        };

        time::sleep(Duration::from_millis(1_000)).await;
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.status, UploadStatus::Uploading);
        assert!(snapshot.progress > 0 && snapshot.progress < 90);
        assert_eq!(snapshot.progress % 10, 0);

        time::sleep(Duration::from_millis(1_900)).await;
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.status, UploadStatus::Uploading);
        assert_eq!(snapshot.progress, 90);

        time::sleep(Duration::from_millis(300)).await;
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.status, UploadStatus::Completed);
        assert_eq!(snapshot.progress, 100);

        task.await.unwrap().unwrap();
        assert_eq!(controller.snapshot().await.status, UploadStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_upload_resets_state() {
        let dir = TempDir::new().unwrap();
        let controller = controller();
        let missing = UploadedVideo::new(dir.path().join("gone.mp4"), "video/mp4");

        let err = controller.start_upload(missing).await.unwrap_err();

        assert!(matches!(err, UploadError::Io { .. }));
        assert_eq!(controller.snapshot().await, UploadSnapshot::default());
    }

    #[tokio::test]
    async fn rejects_non_video_without_touching_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slides.pdf");
        std::fs::write(&path, b"%PDF").unwrap();
        let controller = controller();

        let err = controller
            .start_upload(UploadedVideo::new(path, "application/pdf"))
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::UnsupportedMedia(name) if name == "slides.pdf"));
        assert_eq!(controller.snapshot().await.status, UploadStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn second_upload_is_rejected_while_busy() {
        let dir = TempDir::new().unwrap();
        let controller = controller();
        let first = video(&dir);

        let task = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.start_upload(first).await })
        };
        time::sleep(Duration::from_millis(500)).await;

        let err = controller.start_upload(video(&dir)).await.unwrap_err();
        assert!(matches!(err, UploadError::AlreadyUploading));

        task.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_upload_returns_to_idle() {
        let dir = TempDir::new().unwrap();
        let controller = controller();

        let timed_out = time::timeout(
            Duration::from_millis(1_000),
            controller.start_upload(video(&dir)),
        )
        .await;
        assert!(timed_out.is_err());
        assert_eq!(controller.snapshot().await, UploadSnapshot::default());
        assert_eq!(*controller.subscribe().borrow(), UploadSnapshot::default());

        // The ticker is gone too; nothing moves the progress afterwards.
        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(controller.snapshot().await, UploadSnapshot::default());

        let analysis = controller.start_upload(video(&dir)).await.unwrap();
        assert_eq!(analysis.title, "seed-round");
        assert_eq!(controller.snapshot().await.status, UploadStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn finished_upload_does_not_reset_a_newer_one() {
        let dir = TempDir::new().unwrap();
        let controller = controller();

        controller.start_upload(video(&dir)).await.unwrap();

        let task = {
            let controller = controller.clone();
            let file = video(&dir);
            tokio::spawn(async move { controller.start_upload(file).await })
        };
        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(controller.snapshot().await.status, UploadStatus::Uploading);

        task.await.unwrap().unwrap();
    }
}

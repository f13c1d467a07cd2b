use std::time::Duration;

use pitchpulse_lib::analysis::{UploadStatus, UploadedVideo};
use pitchpulse_lib::error::UploadError;
use pitchpulse_lib::settings::SettingsStore;
use pitchpulse_lib::AppState;
use tempfile::TempDir;
use tokio::time::Instant;

fn app(dir: &TempDir) -> AppState {
    let settings = SettingsStore::new(dir.path().join("settings.json")).unwrap();
    AppState::new(settings)
}

#[tokio::test(start_paused = true)]
async fn upload_opens_fresh_analysis() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Series A.mov");
    std::fs::write(&path, b"moov").unwrap();
    let mut app = app(&dir);

    let started = Instant::now();
    let dashboard = app
        .upload(UploadedVideo::new(path, "video/quicktime"))
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(3_000));

    let pitch = dashboard.pitch();
    assert_eq!(pitch.title, "Series A");
    assert_eq!(pitch.duration, 120);
    assert!(!pitch.is_demo);
    assert!(pitch.video_url.starts_with("blob:"));
    assert!((68..=82).contains(&pitch.metrics.average_engagement));
    assert!((70..=84).contains(&pitch.metrics.clarity));

    assert_eq!(app.uploads.snapshot().await.status, UploadStatus::Idle);
    assert!(app.dashboard().is_some());
}

#[tokio::test(start_paused = true)]
async fn failed_upload_returns_to_prompt() {
    let dir = TempDir::new().unwrap();
    let mut app = app(&dir);

    let err = app
        .upload(UploadedVideo::new(dir.path().join("nope.mp4"), "video/mp4"))
        .await
        .err()
        .unwrap();

    assert!(matches!(err, UploadError::Io { .. }));
    assert!(err.to_string().starts_with("upload failed"));
    assert!(app.dashboard().is_none());
    let snapshot = app.uploads.snapshot().await;
    assert_eq!(snapshot.status, UploadStatus::Idle);
    assert_eq!(snapshot.progress, 0);
}

#[tokio::test(start_paused = true)]
async fn settings_file_shortens_mock_delay() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"mockAnalysis":{"delayMs":100},"upload":{"finalizeDelayMs":0}}"#,
    )
    .unwrap();
    let path = dir.path().join("quick.mp4");
    std::fs::write(&path, b"x").unwrap();
    let mut app = app(&dir);

    let started = Instant::now();
    app.upload(UploadedVideo::new(path, "video/mp4")).await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(100));
    assert!(elapsed < Duration::from_millis(3_000));
}

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// A file picked by the viewer. Only `video/*` content types are accepted.
#[derive(Debug, Clone)]
pub struct UploadedVideo {
    pub name: String,
    pub content_type: String,
    pub path: PathBuf,
}

impl UploadedVideo {
    pub fn new(path: impl Into<PathBuf>, content_type: &str) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            name,
            content_type: content_type.to_string(),
            path,
        }
    }

    pub fn is_video(&self) -> bool {
        match self.content_type.split_once('/') {
            Some((kind, _)) => kind.eq_ignore_ascii_case("video"),
            None => false,
        }
    }

    /// File name without its last extension.
    pub fn title(&self) -> String {
        strip_extension(&self.name).to_string()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Drops a trailing `.ext` where `ext` is non-empty and has no `.` or `/`.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() && !name[idx + 1..].contains('/') => &name[..idx],
        _ => name,
    }
}

/// Locally minted preview URL; never leaves the process.
pub fn object_url() -> String {
    format!("blob:pitchpulse/{}", Uuid::new_v4())
}

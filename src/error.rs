use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between picking a file and getting an
/// analysis back. The dashboard treats all variants the same way: log,
/// reset the upload indicator, return to the upload prompt.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload failed: could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("upload failed: {0} is not a video")]
    UnsupportedMedia(String),

    #[error("upload failed: another upload is already in progress")]
    AlreadyUploading,
}

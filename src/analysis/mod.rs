pub mod file;
pub mod mock;
pub mod upload;

pub use file::UploadedVideo;
pub use mock::mock_analyze_pitch;
pub use upload::{UploadController, UploadSnapshot, UploadStatus};

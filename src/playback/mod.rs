pub mod config;
pub mod dashboard;
pub mod projector;
pub mod state;
pub mod timeline;

pub use config::ProjectorConfig;
pub use dashboard::Dashboard;
pub use projector::{project, Projection};
pub use state::{PlaybackStatus, ViewState};

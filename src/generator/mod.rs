pub mod config;
pub mod curve;
pub mod phases;

pub use config::CurveConfig;
pub use curve::{generate_sentiment_data, generate_with_config};
pub use phases::{Phase, PitchPattern};

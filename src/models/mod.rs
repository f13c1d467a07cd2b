pub mod analysis;
pub mod moment;
pub mod sentiment;
pub mod suggestion;

pub use analysis::{PitchAnalysis, PitchMetrics, SpeakingPace};
pub use moment::{MicroMoment, MomentType, Severity};
pub use sentiment::{SentimentDataPoint, SentimentLabel};
pub use suggestion::{SmartSuggestion, SuggestionType};

pub mod catalog;
pub mod pitches;

pub use pitches::{bad_pitch, demo_pitches, expert_pitch, good_pitch};

use serde::{Deserialize, Serialize};

/// Narrative shape of a demo pitch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PitchPattern {
    /// Starts ok, drops hard, partial recovery at the end.
    Poor,
    /// Consistent with a mid-pitch dip.
    Solid,
    /// High throughout with a rising floor.
    Expert,
}

/// One band of the curve: applies while `timestamp < until_secs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub until_secs: Option<u32>,
    pub base: f64,
    pub jitter: f64,
}

const fn phase(until_secs: u32, base: f64, jitter: f64) -> Phase {
    Phase {
        until_secs: Some(until_secs),
        base,
        jitter,
    }
}

const fn tail(base: f64, jitter: f64) -> Phase {
    Phase {
        until_secs: None,
        base,
        jitter,
    }
}

static POOR: [Phase; 4] = [
    phase(20, 65.0, 10.0),
    phase(60, 35.0, 15.0),
    phase(100, 25.0, 10.0),
    tail(40.0, 10.0),
];

static SOLID: [Phase; 4] = [
    phase(30, 70.0, 10.0),
    phase(60, 60.0, 15.0),
    phase(120, 75.0, 10.0),
    tail(80.0, 8.0),
];

static EXPERT: [Phase; 4] = [
    phase(20, 85.0, 10.0),
    phase(60, 88.0, 8.0),
    phase(120, 90.0, 8.0),
    tail(92.0, 6.0),
];

impl PitchPattern {
    pub fn phases(&self) -> &'static [Phase] {
        match self {
            PitchPattern::Poor => &POOR,
            PitchPattern::Solid => &SOLID,
            PitchPattern::Expert => &EXPERT,
        }
    }

    /// Band in effect at `timestamp`. The last band of every pattern is open
    /// ended, so there is always a match.
    pub fn phase_at(&self, timestamp: u32) -> &'static Phase {
        let phases = self.phases();
        phases
            .iter()
            .find(|p| p.until_secs.map_or(true, |until| timestamp < until))
            .unwrap_or(&phases[phases.len() - 1])
    }
}

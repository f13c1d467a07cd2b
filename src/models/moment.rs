use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MomentType {
    Peak,
    Drop,
    Neutral,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// A flagged instant of notable engagement change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MicroMoment {
    pub id: String,
    pub timestamp: u32,
    #[serde(rename = "type")]
    pub kind: MomentType,
    pub score: u8,
    pub reason: String,
    pub severity: Severity,
}

impl MicroMoment {
    pub fn new(
        id: &str,
        timestamp: u32,
        kind: MomentType,
        score: u8,
        reason: &str,
        severity: Severity,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            kind,
            score,
            reason: reason.into(),
            severity,
        }
    }
}

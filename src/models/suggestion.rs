use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Warning,
    Tip,
    Success,
}

/// A coaching tip tied to a timestamp.
///
/// `dismissed` is only ever set by the viewer; the dashboard additionally
/// tracks dismissals in its view state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SmartSuggestion {
    pub id: String,
    pub timestamp: u32,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub icon: String,
    pub dismissed: bool,
}

impl SmartSuggestion {
    pub fn new(id: &str, timestamp: u32, message: &str, kind: SuggestionType, icon: &str) -> Self {
        Self {
            id: id.into(),
            timestamp,
            message: message.into(),
            kind,
            icon: icon.into(),
            dismissed: false,
        }
    }
}

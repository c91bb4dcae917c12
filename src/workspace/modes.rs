//! Fixed summary instruction modes.

use serde::{Deserialize, Serialize};

/// Instruction used when the free-text field is left blank.
pub const DEFAULT_INSTRUCTION: &str =
    "Summarize the key points and action items from this meeting.";

/// Named preset that fills the instruction field with a fixed description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryMode {
    Executive,
    ActionItems,
    Sentiment,
    Timeline,
}

impl SummaryMode {
    pub const ALL: [SummaryMode; 4] = [
        SummaryMode::Executive,
        SummaryMode::ActionItems,
        SummaryMode::Sentiment,
        SummaryMode::Timeline,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Executive => "executive",
            Self::ActionItems => "actionItems",
            Self::Sentiment => "sentiment",
            Self::Timeline => "timeline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Executive => "Executive Summary",
            Self::ActionItems => "Action Items Only",
            Self::Sentiment => "Sentiment Analysis",
            Self::Timeline => "Timeline of Events",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Executive => {
                "Create an executive summary with key decisions, outcomes, and strategic implications."
            }
            Self::ActionItems => {
                "Extract all action items, deadlines, and assigned responsibilities in a clear list format."
            }
            Self::Sentiment => {
                "Analyze the sentiment and tone of the meeting, including participant engagement and concerns."
            }
            Self::Timeline => {
                "Create a chronological timeline of events, decisions, and discussion points from the meeting."
            }
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_resolves_every_mode() {
        for mode in SummaryMode::ALL {
            assert_eq!(SummaryMode::from_key(mode.key()), Some(mode));
        }
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(SummaryMode::from_key("haiku"), None);
        assert_eq!(SummaryMode::from_key(""), None);
        // keys are case sensitive
        assert_eq!(SummaryMode::from_key("Executive"), None);
    }

    #[test]
    fn test_mode_serialization_uses_camel_case_keys() {
        let json = serde_json::to_string(&SummaryMode::ActionItems).unwrap();
        assert_eq!(json, "\"actionItems\"");

        let parsed: SummaryMode = serde_json::from_str("\"timeline\"").unwrap();
        assert_eq!(parsed, SummaryMode::Timeline);
    }

    #[test]
    fn test_instructions_are_distinct_and_non_empty() {
        for mode in SummaryMode::ALL {
            assert!(!mode.instruction().is_empty());
            assert_ne!(mode.instruction(), DEFAULT_INSTRUCTION);
        }
        let unique: std::collections::HashSet<_> =
            SummaryMode::ALL.iter().map(|m| m.instruction()).collect();
        assert_eq!(unique.len(), SummaryMode::ALL.len());
    }
}

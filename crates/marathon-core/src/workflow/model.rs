//! Workflow domain model.
//!
//! A workflow is the CMS-authored, ordered list of interview rounds a
//! candidate runs through for one company. It is read-only input to the
//! session state machine: rounds are immutable once a session has started
//! against them.

use serde::{Deserialize, Serialize};

/// The kind of interview round.
///
/// Each variant maps to one independently implemented round executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundType {
    /// Resume/ATS check.
    Resume,
    /// Aptitude test (topic-based multiple choice).
    Aptitude,
    /// Coding challenge.
    Coding,
    /// HR interview chat.
    Hr,
    /// Group discussion.
    Gd,
}

impl std::fmt::Display for RoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundType::Resume => "resume",
            RoundType::Aptitude => "aptitude",
            RoundType::Coding => "coding",
            RoundType::Hr => "hr",
            RoundType::Gd => "gd",
        };
        write!(f, "{}", name)
    }
}

/// Type-specific round configuration.
///
/// Aptitude rounds use `topics` and `question_count`; coding rounds use
/// `question_count` only. Other round types leave this empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Question topics to draw from (aptitude rounds).
    #[serde(default)]
    pub topics: Vec<String>,
    /// Number of questions to present.
    #[serde(default, alias = "questionCount")]
    pub question_count: Option<u32>,
}

/// One stage of a company's interview workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRound {
    /// Unique round identifier within the CMS.
    pub id: String,
    /// Which executor runs this round.
    #[serde(rename = "type")]
    pub round_type: RoundType,
    /// Round duration in minutes.
    pub duration: u32,
    /// Pass percentage. Informational only: the state machine never
    /// enforces it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<u32>,
    /// Type-specific configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<RoundConfig>,
}

impl InterviewRound {
    /// Round duration converted to seconds, as consumed by executors.
    pub fn duration_seconds(&self) -> u64 {
        u64::from(self.duration) * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_type_serializes_lowercase() {
        let json = serde_json::to_string(&RoundType::Aptitude).unwrap();
        assert_eq!(json, "\"aptitude\"");

        let parsed: RoundType = serde_json::from_str("\"gd\"").unwrap();
        assert_eq!(parsed, RoundType::Gd);
    }

    #[test]
    fn test_round_duration_seconds() {
        let round = InterviewRound {
            id: "r1".to_string(),
            round_type: RoundType::Coding,
            duration: 60,
            cutoff: Some(60),
            config: Some(RoundConfig {
                topics: vec![],
                question_count: Some(2),
            }),
        };
        assert_eq!(round.duration_seconds(), 3600);
    }

    #[test]
    fn test_round_without_cutoff_or_config() {
        let json = r#"{ "id": "r4", "type": "hr", "duration": 20 }"#;
        let round: InterviewRound = serde_json::from_str(json).unwrap();
        assert_eq!(round.round_type, RoundType::Hr);
        assert!(round.cutoff.is_none());
        assert!(round.config.is_none());
    }
}

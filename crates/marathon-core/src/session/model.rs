//! Session domain model.
//!
//! This module contains the core Session entity that represents one
//! candidate's single attempt at one company's interview workflow.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of integrity warnings that terminates a session.
pub const WARNING_LIMIT: u32 = 3;

/// One candidate's in-progress attempt at a company's interview workflow.
///
/// A session tracks:
/// - Which company's workflow applies (`company_id`, resolved externally)
/// - The zero-based position into the workflow's round sequence
/// - Whether the active round has been submitted and its feedback viewed
/// - Integrity warnings accumulated across the whole session
/// - Per-round scores and the most recent feedback text
///
/// This is the "pure" domain value that the transition functions in
/// [`crate::session::transitions`] operate on. Serialization uses the
/// camelCase key layout of the persisted snapshot, so a stored session
/// round-trips byte-for-byte through JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Identifies which company's workflow applies (foreign lookup).
    pub company_id: String,
    /// Zero-based position into the workflow's round sequence.
    pub current_round_index: usize,
    /// True once the active round's executor has reported a score.
    pub is_round_submitted: bool,
    /// True once the candidate has acknowledged the current round's feedback.
    pub is_feedback_viewed: bool,
    /// Integrity violations accumulated across the session. Never decreases.
    pub warnings: u32,
    /// Set once `warnings` reaches [`WARNING_LIMIT`]. One-way until reset.
    pub is_terminated: bool,
    /// Score per round index, written when the round is submitted.
    /// Serializes as a JSON object keyed by the stringified index.
    pub scores: BTreeMap<usize, f64>,
    /// Feedback text for the most recently submitted round. Display-only,
    /// overwritten each round.
    pub round_feedback: Option<String>,
}

/// Where a session stands relative to its workflow.
///
/// Derived, never stored: the workflow length comparison deliberately lives
/// outside the state machine, so callers pass it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Three warnings were reached; all round progress halts.
    Terminated,
    /// The round index has run off the end of the workflow.
    Completed,
    /// The active round is running and awaiting submission.
    RoundActive,
    /// The active round was submitted; feedback is on screen.
    FeedbackPending {
        /// Whether the candidate has acknowledged the feedback yet.
        viewed: bool,
    },
}

impl Session {
    /// Derives the session phase against the owning workflow's length.
    ///
    /// Termination wins over everything except having already walked past
    /// the final round.
    pub fn phase(&self, workflow_len: usize) -> SessionPhase {
        if self.is_complete(workflow_len) {
            SessionPhase::Completed
        } else if self.is_terminated {
            SessionPhase::Terminated
        } else if self.is_round_submitted {
            SessionPhase::FeedbackPending {
                viewed: self.is_feedback_viewed,
            }
        } else {
            SessionPhase::RoundActive
        }
    }

    /// True when the round index has advanced past the last round.
    pub fn is_complete(&self, workflow_len: usize) -> bool {
        self.current_round_index >= workflow_len
    }

    /// Mean of all recorded round scores, `None` before any submission.
    pub fn average_score(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let sum: f64 = self.scores.values().sum();
        Some(sum / self.scores.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            company_id: "1".to_string(),
            current_round_index: 1,
            is_round_submitted: true,
            is_feedback_viewed: false,
            warnings: 1,
            is_terminated: false,
            scores: BTreeMap::from([(0, 72.0), (1, 88.0)]),
            round_feedback: Some("Good structure.".to_string()),
        }
    }

    #[test]
    fn test_snapshot_wire_shape_uses_camel_case_keys() {
        let json = serde_json::to_value(sample_session()).unwrap();
        // camelCase keys, scores keyed by stringified round index
        assert_eq!(json["companyId"], "1");
        assert_eq!(json["currentRoundIndex"], 1);
        assert_eq!(json["isRoundSubmitted"], true);
        assert_eq!(json["isFeedbackViewed"], false);
        assert_eq!(json["warnings"], 1);
        assert_eq!(json["isTerminated"], false);
        assert_eq!(json["scores"]["0"], 72.0);
        assert_eq!(json["scores"]["1"], 88.0);
        assert_eq!(json["roundFeedback"], "Good structure.");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let session = sample_session();
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_null_feedback_round_trip() {
        let json = r#"{
            "companyId": "2",
            "currentRoundIndex": 0,
            "isRoundSubmitted": false,
            "isFeedbackViewed": false,
            "warnings": 0,
            "isTerminated": false,
            "scores": {},
            "roundFeedback": null
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(session.round_feedback.is_none());
        assert!(session.scores.is_empty());
    }

    #[test]
    fn test_phase_termination_wins_over_active_round() {
        let mut session = sample_session();
        session.is_terminated = true;
        assert_eq!(session.phase(4), SessionPhase::Terminated);
    }

    #[test]
    fn test_phase_completed_past_end() {
        let mut session = sample_session();
        session.current_round_index = 2;
        session.is_round_submitted = false;
        assert_eq!(session.phase(2), SessionPhase::Completed);
        assert!(session.is_complete(2));
    }

    #[test]
    fn test_phase_feedback_pending() {
        let session = sample_session();
        assert_eq!(
            session.phase(4),
            SessionPhase::FeedbackPending { viewed: false }
        );
    }

    #[test]
    fn test_average_score() {
        let session = sample_session();
        assert_eq!(session.average_score(), Some(80.0));

        let mut empty = session.clone();
        empty.scores.clear();
        assert_eq!(empty.average_score(), None);
    }
}

//! Pure session state transitions.
//!
//! The session state machine is a set of total, synchronous functions over
//! `Option<Session>`: the absent state is a legal input everywhere, and every
//! call on it is a no-op rather than an error. Callers (the application
//! layer) decide when to persist the returned value and when the workflow has
//! been completed; the functions here only track position and bookkeeping.
//!
//! None of these functions perform I/O, panic, or return errors.

use super::model::{Session, WARNING_LIMIT};
use std::collections::BTreeMap;

/// Creates a fresh session at round 0 for the given company.
///
/// Calling this while another session is live simply replaces it - a
/// deliberate "restart" semantic. Resolving `company_id` to a non-empty
/// workflow is the caller's responsibility.
pub fn start_session(company_id: impl Into<String>) -> Session {
    Session {
        company_id: company_id.into(),
        current_round_index: 0,
        is_round_submitted: false,
        is_feedback_viewed: false,
        warnings: 0,
        is_terminated: false,
        scores: BTreeMap::new(),
        round_feedback: None,
    }
}

/// Records one integrity violation (e.g. a proctoring blur event).
///
/// Always increments; debouncing repeated signals is the caller's concern.
/// Reaching [`WARNING_LIMIT`] sets the one-way `is_terminated` flag.
pub fn add_warning(session: Option<Session>) -> Option<Session> {
    session.map(|mut s| {
        s.warnings += 1;
        if s.warnings >= WARNING_LIMIT {
            s.is_terminated = true;
        }
        s
    })
}

/// Records the active round's score and feedback as reported by its
/// executor.
///
/// The score is stored as-is: out-of-range values are accepted without
/// clamping. Submitting the same round twice
/// overwrites the previous score and feedback - last write wins.
pub fn submit_round(session: Option<Session>, score: f64, feedback: &str) -> Option<Session> {
    session.map(|mut s| {
        s.is_round_submitted = true;
        s.is_feedback_viewed = false;
        s.round_feedback = Some(feedback.to_string());
        s.scores.insert(s.current_round_index, score);
        s
    })
}

/// Marks the current round's feedback as acknowledged.
///
/// Advisory for UI gating only; idempotent, and calling it before
/// submission has no observable ill effect.
pub fn view_feedback(session: Option<Session>) -> Option<Session> {
    session.map(|mut s| {
        s.is_feedback_viewed = true;
        s
    })
}

/// Advances to the next round and resets the per-round flags and feedback.
///
/// Does not check against the workflow length: advancing one past the last
/// round is legal here, and the caller detects completion by comparing
/// `current_round_index` with the workflow length.
pub fn next_round(session: Option<Session>) -> Option<Session> {
    session.map(|mut s| {
        s.current_round_index += 1;
        s.is_round_submitted = false;
        s.is_feedback_viewed = false;
        s.round_feedback = None;
        s
    })
}

/// Discards the session entirely.
///
/// Used both for normal completion exit and user-initiated abandonment.
pub fn reset_session() -> Option<Session> {
    None
}

//! Round executor seam.
//!
//! The five interview-round flows (resume, aptitude, coding, HR, group
//! discussion) each drive their own UI and third-party AI calls. From the
//! core's point of view they are a single opaque interface: given the active
//! round's parameters, eventually produce a score and feedback - or never,
//! if the candidate abandons the round. Proctoring warnings do not flow
//! through this trait; they reach the session through the application
//! layer's warning entry point.

use crate::error::Result;
use crate::workflow::{InterviewRound, RoundConfig};
use async_trait::async_trait;

/// Parameters an executor consumes from the active round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundContext {
    /// Round duration in seconds.
    pub duration_seconds: u64,
    /// Informational pass percentage, if configured.
    pub cutoff: Option<u32>,
    /// Type-specific configuration (topics, question counts).
    pub config: Option<RoundConfig>,
}

impl RoundContext {
    /// Builds the context an executor receives for `round`.
    pub fn for_round(round: &InterviewRound) -> Self {
        Self {
            duration_seconds: round.duration_seconds(),
            cutoff: round.cutoff,
            config: round.config.clone(),
        }
    }
}

/// What an executor reports back when a round attempt finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    /// Numeric score, expected in [0, 100] but never validated here.
    pub score: f64,
    /// Free-form feedback text shown to the candidate.
    pub feedback: String,
}

/// An external round flow that eventually produces a score and feedback.
///
/// Implementations own all of their I/O and error recovery: a failed AI or
/// compiler call is either retried into a best-effort outcome or surfaces as
/// an error, in which case the round simply stays un-submitted. There is no
/// distinct "failed round" session state.
#[async_trait]
pub trait RoundExecutor: Send + Sync {
    /// Runs one round attempt to completion.
    async fn run(&self, ctx: RoundContext) -> Result<RoundOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{RoundConfig, RoundType};

    #[test]
    fn test_round_context_from_round() {
        let round = InterviewRound {
            id: "r2".to_string(),
            round_type: RoundType::Aptitude,
            duration: 30,
            cutoff: Some(70),
            config: Some(RoundConfig {
                topics: vec!["Logical Reasoning".to_string()],
                question_count: Some(10),
            }),
        };
        let ctx = RoundContext::for_round(&round);
        assert_eq!(ctx.duration_seconds, 1800);
        assert_eq!(ctx.cutoff, Some(70));
        assert_eq!(ctx.config.unwrap().question_count, Some(10));
    }
}

//! Company domain model.

use crate::workflow::InterviewRound;
use serde::{Deserialize, Serialize};

/// A target company with its CMS-configured interview workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique company identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Logo URL.
    pub logo: String,
    /// Short company description.
    pub description: String,
    /// Role the candidate is interviewing for.
    pub target_role: String,
    /// Ordered round sequence the candidate runs through.
    #[serde(default)]
    pub workflow: Vec<InterviewRound>,
}

impl Company {
    /// Number of rounds in this company's workflow.
    pub fn workflow_len(&self) -> usize {
        self.workflow.len()
    }

    /// The round at `index`, `None` once a session has walked past the end.
    pub fn round_at(&self, index: usize) -> Option<&InterviewRound> {
        self.workflow.get(index)
    }
}

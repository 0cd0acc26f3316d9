//! Question bank domain models.
//!
//! Administrators load these through the CMS: a global aptitude bank shared
//! by every company, and per-company coding questions.

use serde::{Deserialize, Serialize};

/// A multiple-choice aptitude question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AptitudeQuestion {
    /// Unique question identifier.
    pub id: String,
    /// Question number label from the imported sheet.
    pub qn: String,
    /// Question text.
    pub question: String,
    /// Answer options.
    pub options: Vec<String>,
    /// The correct option.
    pub answer: String,
    /// Topic used for workflow-configured filtering.
    pub topic: String,
}

/// A coding challenge owned by one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingQuestion {
    /// Unique question identifier.
    pub id: String,
    /// Owning company; deleted together with it.
    pub company_id: String,
    /// Challenge title.
    pub title: String,
    /// Full problem statement shown to the candidate.
    pub problem_statement: String,
    /// Starter code placed in the editor.
    pub boilerplate: String,
}

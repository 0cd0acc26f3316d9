//! Question bank repository trait.

use super::model::{AptitudeQuestion, CodingQuestion};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for the CMS-managed question banks.
#[async_trait]
pub trait QuestionBankRepository: Send + Sync {
    /// Returns the global aptitude bank.
    async fn aptitude_bank(&self) -> Result<Vec<AptitudeQuestion>>;

    /// Replaces the global aptitude bank wholesale (sheet-import semantics).
    async fn replace_aptitude_bank(&self, questions: Vec<AptitudeQuestion>) -> Result<()>;

    /// Returns the coding questions configured for one company.
    async fn coding_questions_for(&self, company_id: &str) -> Result<Vec<CodingQuestion>>;

    /// Adds a coding question to a company's bank.
    async fn add_coding_question(&self, question: &CodingQuestion) -> Result<()>;

    /// Deletes a single coding question.
    async fn delete_coding_question(&self, question_id: &str) -> Result<()>;

    /// Deletes every coding question owned by a company.
    ///
    /// Called when the company itself is removed from the registry.
    async fn delete_coding_questions_for(&self, company_id: &str) -> Result<()>;
}

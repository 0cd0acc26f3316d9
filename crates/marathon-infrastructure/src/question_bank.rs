//! TOML-backed question bank.
//!
//! One document holds both banks: `[[aptitude]]` tables for the global
//! aptitude bank and `[[coding]]` tables for per-company coding questions.

use crate::paths::MarathonPaths;
use crate::storage::TomlDocFile;
use async_trait::async_trait;
use marathon_core::error::{MarathonError, Result};
use marathon_core::question::{AptitudeQuestion, CodingQuestion, QuestionBankRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// On-disk document shape for `question_bank.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct QuestionBankDoc {
    #[serde(rename = "aptitude", default)]
    aptitude_bank: Vec<AptitudeQuestion>,
    #[serde(rename = "coding", default)]
    coding_bank: Vec<CodingQuestion>,
}

/// TOML-file implementation of [`QuestionBankRepository`].
#[derive(Clone)]
pub struct TomlQuestionBank {
    /// In-memory bank state.
    doc: Arc<RwLock<QuestionBankDoc>>,
    /// Document handle for persistence.
    file: Arc<TomlDocFile<QuestionBankDoc>>,
}

impl TomlQuestionBank {
    /// Opens the question bank; a missing file yields empty banks.
    pub fn new(paths: &MarathonPaths) -> Result<Self> {
        let file = TomlDocFile::new(paths.question_bank_file());
        let doc = file.load()?.unwrap_or_default();

        Ok(Self {
            doc: Arc::new(RwLock::new(doc)),
            file: Arc::new(file),
        })
    }

    async fn persist(&self, doc: QuestionBankDoc) -> Result<()> {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || file.save(&doc))
            .await
            .map_err(|e| MarathonError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl QuestionBankRepository for TomlQuestionBank {
    async fn aptitude_bank(&self) -> Result<Vec<AptitudeQuestion>> {
        Ok(self.doc.read().await.aptitude_bank.clone())
    }

    async fn replace_aptitude_bank(&self, questions: Vec<AptitudeQuestion>) -> Result<()> {
        let snapshot = {
            let mut doc = self.doc.write().await;
            doc.aptitude_bank = questions;
            doc.clone()
        };
        let count = snapshot.aptitude_bank.len();
        self.persist(snapshot).await?;
        tracing::info!(count, "Aptitude bank replaced");
        Ok(())
    }

    async fn coding_questions_for(&self, company_id: &str) -> Result<Vec<CodingQuestion>> {
        let doc = self.doc.read().await;
        Ok(doc
            .coding_bank
            .iter()
            .filter(|q| q.company_id == company_id)
            .cloned()
            .collect())
    }

    async fn add_coding_question(&self, question: &CodingQuestion) -> Result<()> {
        let snapshot = {
            let mut doc = self.doc.write().await;
            doc.coding_bank.push(question.clone());
            doc.clone()
        };
        self.persist(snapshot).await?;
        tracing::info!(question_id = %question.id, "Coding question added");
        Ok(())
    }

    async fn delete_coding_question(&self, question_id: &str) -> Result<()> {
        let snapshot = {
            let mut doc = self.doc.write().await;
            doc.coding_bank.retain(|q| q.id != question_id);
            doc.clone()
        };
        self.persist(snapshot).await?;
        Ok(())
    }

    async fn delete_coding_questions_for(&self, company_id: &str) -> Result<()> {
        let snapshot = {
            let mut doc = self.doc.write().await;
            doc.coding_bank.retain(|q| q.company_id != company_id);
            doc.clone()
        };
        self.persist(snapshot).await?;
        tracing::info!(company_id = %company_id, "Coding questions dropped with company");
        Ok(())
    }
}

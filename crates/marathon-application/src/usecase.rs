//! Marathon use case implementation.
//!
//! This module provides the `MarathonUseCase` which orchestrates the company
//! registry, the pure session transitions, the round executors, and snapshot
//! persistence. The session state machine itself never does I/O; this layer
//! applies a transition, persists the resulting snapshot, and hands the new
//! state back to the caller.

use marathon_core::company::{Company, CompanyRepository};
use marathon_core::error::{MarathonError, Result};
use marathon_core::executor::{RoundContext, RoundExecutor};
use marathon_core::question::{AptitudeQuestion, CodingQuestion, QuestionBankRepository};
use marathon_core::session::{Session, SessionPhase, transitions};
use marathon_core::snapshot::{AppSnapshot, SnapshotRepository};
use marathon_core::workflow::{InterviewRound, RoundType};
use marathon_infrastructure::{
    JsonSnapshotStore, MarathonPaths, TomlCompanyRegistry, TomlQuestionBank,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Use case for driving a candidate through a company's interview workflow.
///
/// # Responsibilities
///
/// - Resolving a company ID to its workflow (the external lookup the state
///   machine depends on)
/// - Applying the pure session transitions and persisting the snapshot
///   after every mutation
/// - Dispatching the active round to the executor registered for its type
/// - Deciding completion: the workflow-length comparison lives here, not in
///   the state machine
/// - CMS passthroughs for companies and question banks
///
/// # Thread Safety
///
/// Repositories are shared via `Arc`; the live snapshot sits behind a
/// `tokio::sync::RwLock`.
pub struct MarathonUseCase {
    /// Registry of companies and their workflows
    companies: Arc<dyn CompanyRepository>,
    /// CMS-managed question banks
    questions: Arc<dyn QuestionBankRepository>,
    /// Persistent snapshot backend
    snapshots: Arc<dyn SnapshotRepository>,
    /// One executor per round type
    executors: HashMap<RoundType, Arc<dyn RoundExecutor>>,
    /// Live application state (selected company + current session)
    state: Arc<RwLock<AppSnapshot>>,
}

impl MarathonUseCase {
    /// Creates a new `MarathonUseCase` over the given backends.
    ///
    /// Executors are registered separately with [`register_executor`]
    /// because the five round flows are built independently.
    ///
    /// [`register_executor`]: MarathonUseCase::register_executor
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        questions: Arc<dyn QuestionBankRepository>,
        snapshots: Arc<dyn SnapshotRepository>,
    ) -> Self {
        Self {
            companies,
            questions,
            snapshots,
            executors: HashMap::new(),
            state: Arc::new(RwLock::new(AppSnapshot::default())),
        }
    }

    /// Wires the use case over the file-backed stores under `paths`:
    /// the TOML company registry and question bank plus the JSON snapshot
    /// store. Seeds the preset companies on first run.
    pub fn with_file_backends(paths: &MarathonPaths) -> Result<Self> {
        Ok(Self::new(
            Arc::new(TomlCompanyRegistry::new(paths)?),
            Arc::new(TomlQuestionBank::new(paths)?),
            Arc::new(JsonSnapshotStore::new(paths)?),
        ))
    }

    /// Registers the executor that runs rounds of `round_type`.
    pub fn register_executor(&mut self, round_type: RoundType, executor: Arc<dyn RoundExecutor>) {
        self.executors.insert(round_type, executor);
    }

    /// Restores the persisted snapshot on startup (the reload semantic).
    pub async fn restore(&self) -> Result<()> {
        let snapshot = self.snapshots.load().await?;
        if let Some(session) = &snapshot.current_session {
            tracing::info!(
                company_id = %session.company_id,
                round_index = session.current_round_index,
                "Restored session from snapshot"
            );
        }
        *self.state.write().await = snapshot;
        Ok(())
    }

    /// The live session, if any.
    pub async fn current_session(&self) -> Option<Session> {
        self.state.read().await.current_session.clone()
    }

    /// The company the candidate last picked, if any.
    pub async fn selected_company_id(&self) -> Option<String> {
        self.state.read().await.selected_company_id.clone()
    }

    /// Records the candidate's company pick.
    pub async fn select_company(&self, company_id: &str) -> Result<()> {
        let snapshot = {
            let mut state = self.state.write().await;
            state.selected_company_id = Some(company_id.to_string());
            state.clone()
        };
        self.snapshots.save(&snapshot).await
    }

    /// Starts a fresh session against `company_id`'s workflow.
    ///
    /// An unknown company is a lookup failure (`NotFound`), and an empty
    /// workflow a `Config` error - both belong to this layer; the state
    /// machine itself never rejects anything. Calling this with a session
    /// already live replaces it (restart semantic).
    pub async fn start_session(&self, company_id: &str) -> Result<Session> {
        let company = self
            .companies
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| MarathonError::not_found("company", company_id))?;

        if company.workflow.is_empty() {
            return Err(MarathonError::config(format!(
                "Company '{}' has no interview rounds configured",
                company_id
            )));
        }

        let session = transitions::start_session(company_id);
        let snapshot = {
            let mut state = self.state.write().await;
            state.selected_company_id = Some(company_id.to_string());
            state.current_session = Some(session.clone());
            state.clone()
        };
        self.snapshots.save(&snapshot).await?;

        tracing::info!(
            company_id = %company_id,
            rounds = company.workflow_len(),
            "Session started"
        );
        Ok(session)
    }

    /// Records one proctoring violation against the live session.
    ///
    /// No-op without a session. Three warnings terminate the session.
    pub async fn record_warning(&self) -> Result<Option<Session>> {
        let session = self
            .apply(|session| transitions::add_warning(session))
            .await?;
        if let Some(s) = &session {
            if s.is_terminated {
                tracing::warn!(warnings = s.warnings, "Session terminated by proctoring");
            } else {
                tracing::warn!(warnings = s.warnings, "Proctoring warning recorded");
            }
        }
        Ok(session)
    }

    /// Records the active round's score and feedback. No-op without a
    /// session; re-submission overwrites (last write wins).
    pub async fn submit_round(&self, score: f64, feedback: &str) -> Result<Option<Session>> {
        let session = self
            .apply(|session| transitions::submit_round(session, score, feedback))
            .await?;
        if let Some(s) = &session {
            tracing::info!(
                round_index = s.current_round_index,
                score,
                "Round submitted"
            );
        }
        Ok(session)
    }

    /// Marks the current round's feedback as acknowledged.
    pub async fn view_feedback(&self) -> Result<Option<Session>> {
        self.apply(transitions::view_feedback).await
    }

    /// Advances to the next round. The caller checks [`session_phase`]
    /// before offering this; the core itself never refuses the advance.
    ///
    /// [`session_phase`]: MarathonUseCase::session_phase
    pub async fn next_round(&self) -> Result<Option<Session>> {
        let session = self.apply(transitions::next_round).await?;
        if let Some(s) = &session {
            tracing::info!(round_index = s.current_round_index, "Advanced to next round");
        }
        Ok(session)
    }

    /// Discards the session and the company pick, for both normal
    /// completion exit and user-initiated abandonment.
    pub async fn reset_session(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.current_session = transitions::reset_session();
            state.selected_company_id = None;
        }
        self.snapshots.clear().await?;
        tracing::info!("Session reset");
        Ok(())
    }

    /// The round the live session currently points at, or `None` when no
    /// session exists or the index has walked past the workflow's end.
    pub async fn active_round(&self) -> Result<Option<InterviewRound>> {
        let Some(session) = self.current_session().await else {
            return Ok(None);
        };
        let Some(company) = self.companies.find_by_id(&session.company_id).await? else {
            return Ok(None);
        };
        Ok(company.round_at(session.current_round_index).cloned())
    }

    /// Derives the session phase against the owning workflow's length.
    ///
    /// This is where "has the marathon been completed" is decided - the
    /// state machine only tracks position.
    pub async fn session_phase(&self) -> Result<Option<SessionPhase>> {
        let Some(session) = self.current_session().await else {
            return Ok(None);
        };
        let company = self
            .companies
            .find_by_id(&session.company_id)
            .await?
            .ok_or_else(|| MarathonError::not_found("company", session.company_id.clone()))?;
        Ok(Some(session.phase(company.workflow_len())))
    }

    /// Runs the active round through its registered executor and feeds the
    /// outcome into the session.
    ///
    /// Returns `Ok(None)` when there is nothing to run (no session, or the
    /// index is past the end). A missing executor registration is a
    /// `Config` error; executor failures propagate and leave the round
    /// un-submitted - there is no "failed round" session state.
    pub async fn run_active_round(&self) -> Result<Option<Session>> {
        let Some(round) = self.active_round().await? else {
            return Ok(None);
        };

        let executor = self.executors.get(&round.round_type).ok_or_else(|| {
            MarathonError::config(format!(
                "No executor registered for round type '{}'",
                round.round_type
            ))
        })?;

        tracing::info!(
            round_id = %round.id,
            round_type = %round.round_type,
            duration_seconds = round.duration_seconds(),
            "Running round"
        );

        let outcome = executor.run(RoundContext::for_round(&round)).await?;
        self.submit_round(outcome.score, &outcome.feedback).await
    }

    /// Applies a pure transition to the live session and persists the
    /// resulting snapshot.
    async fn apply<F>(&self, transition: F) -> Result<Option<Session>>
    where
        F: FnOnce(Option<Session>) -> Option<Session>,
    {
        let snapshot = {
            let mut state = self.state.write().await;
            state.current_session = transition(state.current_session.take());
            state.clone()
        };
        self.snapshots.save(&snapshot).await?;
        Ok(snapshot.current_session)
    }

    // ========================================================================
    // CMS surface
    // ========================================================================

    /// Lists all registered companies.
    pub async fn list_companies(&self) -> Result<Vec<Company>> {
        self.companies.list_all().await
    }

    /// Adds a company, generating its ID. Returns the stored record.
    pub async fn add_company(&self, mut company: Company) -> Result<Company> {
        company.id = Uuid::new_v4().to_string();
        self.companies.save(&company).await?;
        Ok(company)
    }

    /// Updates an existing company record.
    pub async fn update_company(&self, company: &Company) -> Result<()> {
        self.companies.save(company).await
    }

    /// Deletes a company and every coding question it owns.
    pub async fn delete_company(&self, company_id: &str) -> Result<()> {
        self.companies.delete(company_id).await?;
        self.questions
            .delete_coding_questions_for(company_id)
            .await?;
        Ok(())
    }

    /// Replaces the global aptitude bank wholesale (sheet import).
    pub async fn replace_aptitude_bank(&self, questions: Vec<AptitudeQuestion>) -> Result<()> {
        self.questions.replace_aptitude_bank(questions).await
    }

    /// Returns the global aptitude bank.
    pub async fn aptitude_bank(&self) -> Result<Vec<AptitudeQuestion>> {
        self.questions.aptitude_bank().await
    }

    /// Adds a coding question, generating its ID. Returns the stored record.
    pub async fn add_coding_question(&self, mut question: CodingQuestion) -> Result<CodingQuestion> {
        question.id = Uuid::new_v4().to_string();
        self.questions.add_coding_question(&question).await?;
        Ok(question)
    }

    /// Deletes a single coding question.
    pub async fn delete_coding_question(&self, question_id: &str) -> Result<()> {
        self.questions.delete_coding_question(question_id).await
    }

    /// Returns the coding questions configured for one company.
    pub async fn coding_questions_for(&self, company_id: &str) -> Result<Vec<CodingQuestion>> {
        self.questions.coding_questions_for(company_id).await
    }
}

//! Company repository trait.
//!
//! Defines the interface for the CMS-authored company/workflow registry.

use super::model::Company;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract registry of companies and their interview workflows.
///
/// This is the external collaborator the session state machine resolves a
/// `company_id` against. The registry is read-only from the session's point
/// of view; the mutating operations exist for the CMS surface.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Finds a company by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Company))`: Company found
    /// - `Ok(None)`: Company not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, company_id: &str) -> Result<Option<Company>>;

    /// Lists all registered companies.
    async fn list_all(&self) -> Result<Vec<Company>>;

    /// Inserts or updates a company record.
    async fn save(&self, company: &Company) -> Result<()>;

    /// Deletes a company. Succeeds whether or not the company existed.
    async fn delete(&self, company_id: &str) -> Result<()>;
}

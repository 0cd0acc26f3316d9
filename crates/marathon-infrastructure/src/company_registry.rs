//! TOML-backed company registry.
//!
//! Companies and their interview workflows are CMS-authored configuration,
//! stored as `[[company]]` tables in `companies.toml`. A fresh registry is
//! seeded with the preset companies so the product works out of the box.

use crate::paths::MarathonPaths;
use crate::storage::TomlDocFile;
use async_trait::async_trait;
use marathon_core::company::{Company, CompanyRepository, preset};
use marathon_core::error::{MarathonError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// On-disk document shape for `companies.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CompaniesDoc {
    #[serde(rename = "company", default)]
    companies: Vec<Company>,
}

/// TOML-file implementation of [`CompanyRepository`].
#[derive(Clone)]
pub struct TomlCompanyRegistry {
    /// In-memory registry state.
    companies: Arc<RwLock<Vec<Company>>>,
    /// Document handle for persistence.
    file: Arc<TomlDocFile<CompaniesDoc>>,
}

impl TomlCompanyRegistry {
    /// Opens the registry, seeding the preset companies when the file does
    /// not exist yet.
    pub fn new(paths: &MarathonPaths) -> Result<Self> {
        let file: TomlDocFile<CompaniesDoc> = TomlDocFile::new(paths.companies_file());

        let companies = match file.load()? {
            Some(doc) => doc.companies,
            None => {
                let seeded = preset::default_companies();
                file.save(&CompaniesDoc {
                    companies: seeded.clone(),
                })?;
                tracing::info!(count = seeded.len(), "Seeded default company registry");
                seeded
            }
        };

        Ok(Self {
            companies: Arc::new(RwLock::new(companies)),
            file: Arc::new(file),
        })
    }

    /// Persists the current in-memory state on the blocking pool.
    async fn persist(&self, companies: Vec<Company>) -> Result<()> {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || file.save(&CompaniesDoc { companies }))
            .await
            .map_err(|e| MarathonError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl CompanyRepository for TomlCompanyRegistry {
    async fn find_by_id(&self, company_id: &str) -> Result<Option<Company>> {
        let companies = self.companies.read().await;
        Ok(companies.iter().find(|c| c.id == company_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Company>> {
        Ok(self.companies.read().await.clone())
    }

    async fn save(&self, company: &Company) -> Result<()> {
        let snapshot = {
            let mut companies = self.companies.write().await;
            match companies.iter_mut().find(|c| c.id == company.id) {
                Some(existing) => *existing = company.clone(),
                None => companies.push(company.clone()),
            }
            companies.clone()
        };
        self.persist(snapshot).await?;
        tracing::info!(company_id = %company.id, "Company saved");
        Ok(())
    }

    async fn delete(&self, company_id: &str) -> Result<()> {
        let snapshot = {
            let mut companies = self.companies.write().await;
            companies.retain(|c| c.id != company_id);
            companies.clone()
        };
        self.persist(snapshot).await?;
        tracing::info!(company_id = %company_id, "Company deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marathon_core::workflow::RoundType;
    use tempfile::TempDir;

    fn registry_in(dir: &TempDir) -> TomlCompanyRegistry {
        let paths = MarathonPaths::new(Some(dir.path().to_path_buf())).unwrap();
        TomlCompanyRegistry::new(&paths).unwrap()
    }

    #[tokio::test]
    async fn test_fresh_registry_is_seeded() {
        let dir = TempDir::new().unwrap();
        let registry = registry_in(&dir);

        let companies = registry.list_all().await.unwrap();
        assert_eq!(companies.len(), 2);

        let google = registry.find_by_id("1").await.unwrap().unwrap();
        assert_eq!(google.name, "Google");
        assert_eq!(google.workflow_len(), 4);
        assert_eq!(google.round_at(0).unwrap().round_type, RoundType::Resume);
    }

    #[tokio::test]
    async fn test_find_unknown_company_is_none() {
        let dir = TempDir::new().unwrap();
        let registry = registry_in(&dir);
        assert!(registry.find_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let registry = registry_in(&dir);

        let mut company = registry.find_by_id("2").await.unwrap().unwrap();
        company.target_role = "Platform Engineer".to_string();
        registry.save(&company).await.unwrap();

        // Workflows survive the TOML round trip intact.
        let reopened = registry_in(&dir);
        let restored = reopened.find_by_id("2").await.unwrap().unwrap();
        assert_eq!(restored.target_role, "Platform Engineer");
        assert_eq!(restored.workflow, company.workflow);
    }

    #[tokio::test]
    async fn test_delete_company() {
        let dir = TempDir::new().unwrap();
        let registry = registry_in(&dir);

        registry.delete("1").await.unwrap();
        assert!(registry.find_by_id("1").await.unwrap().is_none());

        let reopened = registry_in(&dir);
        assert_eq!(reopened.list_all().await.unwrap().len(), 1);
    }
}

//! Unified path management for Mock Marathon data files.
//!
//! All persisted state lives under one base directory, `~/.marathon` by
//! default, with an override for tests and portable installs.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.marathon/
//! ├── app_state.json       # Session + selected company snapshot
//! ├── companies.toml       # CMS-authored company registry
//! └── question_bank.toml   # Aptitude and coding question banks
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Home directory could not be determined.
    #[error("Cannot find home directory")]
    HomeDirNotFound,
}

/// Unified path management for Mock Marathon.
#[derive(Debug, Clone)]
pub struct MarathonPaths {
    base_dir: PathBuf,
}

impl MarathonPaths {
    /// Creates path management rooted at `base_dir`, or at the default
    /// location (`~/.marathon`) when `None`.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self, PathError> {
        let base_dir = match base_dir {
            Some(dir) => dir,
            None => dirs::home_dir()
                .ok_or(PathError::HomeDirNotFound)?
                .join(".marathon"),
        };
        Ok(Self { base_dir })
    }

    /// Returns the base data directory.
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Returns the path to the application snapshot file.
    pub fn snapshot_file(&self) -> PathBuf {
        self.base_dir.join("app_state.json")
    }

    /// Returns the path to the company registry file.
    pub fn companies_file(&self) -> PathBuf {
        self.base_dir.join("companies.toml")
    }

    /// Returns the path to the question bank file.
    pub fn question_bank_file(&self) -> PathBuf {
        self.base_dir.join("question_bank.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_dir() {
        let paths = MarathonPaths::new(None).unwrap();
        assert!(paths.base_dir().ends_with(".marathon"));
    }

    #[test]
    fn test_files_live_under_base_dir() {
        let paths = MarathonPaths::new(Some(PathBuf::from("/tmp/marathon-test"))).unwrap();
        assert!(paths.snapshot_file().starts_with(paths.base_dir()));
        assert!(paths.snapshot_file().ends_with("app_state.json"));
        assert!(paths.companies_file().ends_with("companies.toml"));
        assert!(paths.question_bank_file().ends_with("question_bank.toml"));
    }
}

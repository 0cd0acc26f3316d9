pub mod company_registry;
pub mod paths;
pub mod question_bank;
pub mod snapshot_store;
pub mod storage;

pub use crate::company_registry::TomlCompanyRegistry;
pub use crate::paths::MarathonPaths;
pub use crate::question_bank::TomlQuestionBank;
pub use crate::snapshot_store::JsonSnapshotStore;

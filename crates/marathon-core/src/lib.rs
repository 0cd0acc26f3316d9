pub mod company;
pub mod error;
pub mod executor;
pub mod question;
pub mod session;
pub mod snapshot;
pub mod workflow;

// Re-export common error type
pub use error::MarathonError;

//! Workflow domain module.
//!
//! Contains the CMS-authored workflow definition types consumed by the
//! session state machine and round executors.

mod model;

pub use model::{InterviewRound, RoundConfig, RoundType};

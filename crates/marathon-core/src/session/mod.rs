//! Session domain module.
//!
//! This module contains the session state machine: the core Session value,
//! the pure transition functions that are its only mutation path, and the
//! derived phase used by callers to drive round/feedback/terminal views.
//!
//! # Module Structure
//!
//! - `model`: Core session domain value (`Session`, `SessionPhase`)
//! - `transitions`: Pure state transitions over `Option<Session>`

mod model;
pub mod transitions;

pub use model::{Session, SessionPhase, WARNING_LIMIT};

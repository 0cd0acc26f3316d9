//! Question bank domain module.
//!
//! # Module Structure
//!
//! - `model`: Aptitude and coding question entities
//! - `repository`: Store trait for the CMS-managed banks

mod model;
mod repository;

pub use model::{AptitudeQuestion, CodingQuestion};
pub use repository::QuestionBankRepository;

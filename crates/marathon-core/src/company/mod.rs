//! Company domain module.
//!
//! # Module Structure
//!
//! - `model`: Company entity with its embedded workflow
//! - `preset`: Seed companies for a fresh registry
//! - `repository`: Registry trait for company persistence

mod model;
pub mod preset;
mod repository;

pub use model::Company;
pub use repository::CompanyRepository;

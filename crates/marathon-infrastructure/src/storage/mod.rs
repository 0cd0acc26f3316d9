//! Low-level storage primitives.

pub mod atomic_json;
pub mod toml_doc;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use toml_doc::TomlDocFile;

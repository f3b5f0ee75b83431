//! The core data types shared by every stage of the project creation pipeline

pub mod errors;
pub mod language;
pub mod request;

pub use errors::{ProcessFailure, ScaffoldError, ValidationError};
pub use language::Language;
pub use request::ProjectRequest;

pub mod types;
pub mod operations;

// Re-export main types for easier access
pub use types::{CourseId, Registry, RegistryOptions, StudentId};

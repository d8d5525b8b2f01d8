pub mod types;
pub mod storage;
mod apply;

// Re-export main types and functions for easier access
pub use types::{CatalogFile, CatalogSettings, CourseEntry, EnrollmentEntry, GradeEntry, StudentEntry};
pub use storage::{CatalogFormat, CatalogStorage};
pub use apply::CatalogApplyStats;

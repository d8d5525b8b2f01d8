pub mod course;
pub mod student;
pub mod registry;
pub mod catalog;
pub mod report;
pub mod demo;

#[cfg(test)]
mod tests;

// Re-export main types and functions for easier access
pub use course::{Course, CourseStatistics, EnrollmentStatus, WaitlistPolicy};
pub use student::{Student, StudentRanking};
pub use registry::{CourseId, Registry, RegistryOptions, StudentId};

pub use catalog::{CatalogFile, CatalogSettings, CatalogStorage, CatalogApplyStats};
pub use report::RegistryReport;

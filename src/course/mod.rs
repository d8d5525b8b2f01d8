pub mod types;
mod enrollment;

// Re-export main types for easier access
pub use types::{Course, CourseStatistics, EnrollmentStatus, WaitlistPolicy};

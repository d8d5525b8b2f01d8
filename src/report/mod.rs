pub mod types;
mod render;

pub use types::{CourseSummary, RegistryReport, StudentSummary, TranscriptEntry};

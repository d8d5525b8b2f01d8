pub mod types;
mod grades;

pub use types::{Student, StudentRanking};

use serde::{Serialize, Deserialize};

use crate::course::WaitlistPolicy;
use crate::registry::RegistryOptions;

/// Settings section of a catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Keep each student on a waitlist at most once
    pub dedup_waitlist: bool,

    /// Number of students in the report's ranking
    pub top_students: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            dedup_waitlist: false,
            top_students: 2,
        }
    }
}

impl CatalogSettings {
    /// Registry options implied by these settings
    pub fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            waitlist_policy: if self.dedup_waitlist {
                WaitlistPolicy::Deduplicate
            } else {
                WaitlistPolicy::Append
            },
        }
    }
}

/// A course declared in a catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub code: String,
    pub name: String,
    pub instructor: String,
    /// Must be positive
    pub credits: u32,
    pub capacity: usize,
}

/// A student declared in a catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentEntry {
    pub student_id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub program: String,
}

/// An enrollment request, processed in file order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentEntry {
    pub student_id: String,
    pub course_code: String,
}

/// A grade recorded through the student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    pub student_id: String,
    pub course_code: String,
    pub grade: f64,
}

/// Declarative description of a registry run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub settings: CatalogSettings,
    pub courses: Vec<CourseEntry>,
    pub students: Vec<StudentEntry>,
    pub enrollments: Vec<EnrollmentEntry>,
    pub grades: Vec<GradeEntry>,
}

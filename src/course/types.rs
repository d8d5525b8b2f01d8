use std::collections::BTreeMap;
use std::fmt;
use serde::{Serialize, Deserialize};

/// Outcome of an enrollment request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    /// The student took a seat on the roster
    Enrolled,

    /// The course was full, the student was queued
    Waitlisted,

    /// The student already holds a seat; nothing changed
    AlreadyEnrolled,
}

impl EnrollmentStatus {
    /// Whether this outcome put the student on the roster
    pub fn is_enrolled(&self) -> bool {
        matches!(self, EnrollmentStatus::Enrolled)
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EnrollmentStatus::Enrolled => "Enrolled",
            EnrollmentStatus::Waitlisted => "Added to waitlist",
            EnrollmentStatus::AlreadyEnrolled => "Already enrolled",
        };
        f.write_str(label)
    }
}

/// How a full course treats a repeat request from a student already waiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitlistPolicy {
    /// Every request while full is appended, repeats included
    #[default]
    Append,

    /// A student appears on the waitlist at most once
    Deduplicate,
}

/// Grade statistics for a single course
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseStatistics {
    /// Mean grade, `None` when no grades are recorded
    pub average: Option<f64>,

    /// Lowest grade
    pub min: Option<f64>,

    /// Highest grade
    pub max: Option<f64>,

    /// Number of grades recorded
    pub count: usize,
}

impl CourseStatistics {
    /// Whether no grades contributed to these statistics
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// One course offering with its roster, waitlist and grade book
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    /// Unique course code, e.g. `MATH101`
    pub(crate) code: String,

    /// Course title
    pub name: String,

    /// Instructor name
    pub instructor: String,

    /// Credit hours, informational only
    pub credits: u32,

    /// Maximum number of enrolled students
    pub(crate) capacity: usize,

    /// Enrolled student ids in enrollment order
    pub(crate) enrolled: Vec<String>,

    /// Waiting student ids, first come first served
    pub(crate) waitlist: Vec<String>,

    /// Grade per student id, last write wins
    pub(crate) grades: BTreeMap<String, f64>,

    /// Treatment of repeat requests while full
    pub(crate) waitlist_policy: WaitlistPolicy,
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}) [{} credits]",
            self.code, self.name, self.instructor, self.credits
        )
    }
}

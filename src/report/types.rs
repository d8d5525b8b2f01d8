use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

use crate::course::CourseStatistics;
use crate::student::StudentRanking;

/// Snapshot of one course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub code: String,
    pub name: String,
    pub instructor: String,
    pub credits: u32,
    pub capacity: usize,
    pub enrolled: usize,
    pub waitlisted: usize,
    pub available_spots: usize,
    pub is_full: bool,
    pub statistics: CourseStatistics,
}

/// One graded course on a student's transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub course_code: String,
    pub grade: f64,
}

/// Snapshot of one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub student_id: String,
    pub name: String,
    pub program: String,
    pub gpa: f64,
    /// Grades in the order they were first recorded
    pub transcript: Vec<TranscriptEntry>,
}

/// Aggregate view over a registry, computed on demand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryReport {
    /// When this report was generated
    pub generated_at: DateTime<Utc>,

    pub total_students: usize,

    /// Seats taken across all courses
    pub total_enrollments: usize,

    /// Mean GPA over graded students
    pub average_gpa: f64,

    pub top_students: Vec<StudentRanking>,

    pub courses: Vec<CourseSummary>,

    pub students: Vec<StudentSummary>,
}

use std::collections::BTreeMap;
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::registry::CourseId;

/// A registered student
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    /// Unique student id, e.g. `S001`
    pub(crate) student_id: String,

    pub name: String,

    pub email: String,

    /// Degree program
    pub program: String,

    /// Course code to registry handle, for courses with a seat
    pub(crate) courses: BTreeMap<String, CourseId>,

    /// Course code and grade in recording order; codes are always a subset of `courses`
    pub(crate) grades: Vec<(String, f64)>,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.student_id, self.name, self.program)
    }
}

/// One row of a GPA ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRanking {
    pub student_id: String,
    pub name: String,
    pub gpa: f64,
}

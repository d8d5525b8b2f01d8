use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

use crate::course::{Course, WaitlistPolicy};
use crate::student::Student;

/// Handle to a course owned by a [`Registry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(usize);

impl CourseId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Handle to a student owned by a [`Registry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(usize);

impl StudentId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Options applied to courses as they are registered
#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    /// Waitlist treatment for every registered course
    pub waitlist_policy: WaitlistPolicy,
}

/// Owner of every course and student for one run.
///
/// Append-only: entries keep their registration order and their handles
/// stay valid for the lifetime of the registry.
#[derive(Debug)]
pub struct Registry {
    /// Registration options
    pub(crate) options: RegistryOptions,

    /// Courses in registration order
    pub(crate) courses: Vec<Course>,

    /// Course code to handle
    pub(crate) course_index: HashMap<String, CourseId>,

    /// Students in registration order
    pub(crate) students: Vec<Student>,

    /// Student id to handle
    pub(crate) student_index: HashMap<String, StudentId>,

    /// When this registry was created
    pub(crate) created_at: DateTime<Utc>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_options(RegistryOptions::default())
    }
}

use std::collections::BTreeMap;
use anyhow::{bail, Result};
use log::{debug, trace};

use crate::course::{Course, EnrollmentStatus};
use crate::registry::CourseId;
use super::types::Student;

impl Student {
    /// Create a new student
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        program: impl Into<String>,
    ) -> Result<Self> {
        let student_id = student_id.into();
        if student_id.trim().is_empty() {
            bail!("Student id must not be empty");
        }

        Ok(Self {
            student_id,
            name: name.into(),
            email: email.into(),
            program: program.into(),
            courses: BTreeMap::new(),
            grades: Vec::new(),
        })
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Ask `course` for a seat.
    ///
    /// The course decides the outcome; only a fresh `Enrolled` links the
    /// course handle into this student.
    pub(crate) fn enroll_in(&mut self, course: &mut Course, handle: CourseId) -> EnrollmentStatus {
        let status = course.enroll(&self.student_id);
        if status.is_enrolled() {
            self.courses.insert(course.code().to_string(), handle);
        }
        debug!("{} -> {}: {}", self.student_id, course.code(), status);
        status
    }

    pub fn is_enrolled_in(&self, course_code: &str) -> bool {
        self.courses.contains_key(course_code)
    }

    /// Codes of the courses this student holds a seat in
    pub fn enrolled_course_codes(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    pub(crate) fn course_handle(&self, course_code: &str) -> Option<CourseId> {
        self.courses.get(course_code).copied()
    }

    /// Record a grade on both the student and the course side.
    ///
    /// Ignored when the student holds no seat in `course_code`; returns
    /// whether the grade was written. A handle that resolves to a course
    /// with another code writes nothing.
    pub(crate) fn record_grade(&mut self, courses: &mut [Course], course_code: &str, grade: f64) -> bool {
        let Some(course) = self
            .course_handle(course_code)
            .and_then(|handle| courses.get_mut(handle.index()))
            .filter(|course| course.code() == course_code)
        else {
            debug!("Ignoring grade for {} in {}: not enrolled", self.student_id, course_code);
            return false;
        };

        match self.grades.iter_mut().find(|(code, _)| code == course_code) {
            Some(entry) => entry.1 = grade,
            None => self.grades.push((course_code.to_string(), grade)),
        }
        course.record_grade(&self.student_id, grade);
        trace!("{} graded {} in {}", self.student_id, grade, course_code);
        true
    }

    /// Mean of all recorded grades, `0.0` when there are none
    pub fn gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().map(|(_, grade)| grade).sum::<f64>() / self.grades.len() as f64
    }

    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }

    /// Whether this student holds no seat and no grade anywhere
    pub(crate) fn is_unlinked(&self) -> bool {
        self.courses.is_empty() && self.grades.is_empty()
    }

    /// Grade recorded for one course
    pub fn grade(&self, course_code: &str) -> Option<f64> {
        self.grades
            .iter()
            .find(|(code, _)| code == course_code)
            .map(|&(_, grade)| grade)
    }

    /// Copy of the course code to grade pairs, in the order first recorded
    pub fn transcript(&self) -> Vec<(String, f64)> {
        self.grades.clone()
    }
}

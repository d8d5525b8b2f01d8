use std::collections::BTreeMap;
use anyhow::{bail, Result};
use log::{debug, trace, warn};

use super::types::{Course, CourseStatistics, EnrollmentStatus, WaitlistPolicy};

impl Course {
    /// Create a new course offering
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        instructor: impl Into<String>,
        credits: u32,
        capacity: usize,
    ) -> Result<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            bail!("Course code must not be empty");
        }
        if capacity == 0 {
            bail!("Course {} must have a positive capacity", code);
        }
        if credits == 0 {
            bail!("Course {} must carry at least one credit", code);
        }

        Ok(Self {
            code,
            name: name.into(),
            instructor: instructor.into(),
            credits,
            capacity,
            enrolled: Vec::new(),
            waitlist: Vec::new(),
            grades: BTreeMap::new(),
            waitlist_policy: WaitlistPolicy::default(),
        })
    }

    /// Set how repeat requests are queued once the course is full
    pub fn with_waitlist_policy(mut self, policy: WaitlistPolicy) -> Self {
        self.waitlist_policy = policy;
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn waitlist_policy(&self) -> WaitlistPolicy {
        self.waitlist_policy
    }

    /// Enrolled student ids in enrollment order
    pub fn enrolled(&self) -> &[String] {
        &self.enrolled
    }

    /// Waiting student ids, oldest first
    pub fn waitlist(&self) -> &[String] {
        &self.waitlist
    }

    /// Course-side grade book
    pub fn grades(&self) -> &BTreeMap<String, f64> {
        &self.grades
    }

    /// Seats left before the course is full
    pub fn available_spots(&self) -> usize {
        self.capacity.saturating_sub(self.enrolled.len())
    }

    pub fn enrollment_count(&self) -> usize {
        self.enrolled.len()
    }

    pub fn waitlist_len(&self) -> usize {
        self.waitlist.len()
    }

    pub fn is_full(&self) -> bool {
        self.enrolled.len() >= self.capacity
    }

    pub fn is_enrolled(&self, student_id: &str) -> bool {
        self.enrolled.iter().any(|id| id == student_id)
    }

    pub fn is_waitlisted(&self, student_id: &str) -> bool {
        self.waitlist.iter().any(|id| id == student_id)
    }

    /// No roster, waitlist or grades yet
    pub(crate) fn is_pristine(&self) -> bool {
        self.enrolled.is_empty() && self.waitlist.is_empty() && self.grades.is_empty()
    }

    /// Request a seat for a student.
    ///
    /// The roster never grows past capacity; once full, requests go to the
    /// back of the waitlist. Nobody is ever promoted off the waitlist.
    pub fn enroll(&mut self, student_id: &str) -> EnrollmentStatus {
        if self.is_enrolled(student_id) {
            debug!("{} is already enrolled in {}", student_id, self.code);
            return EnrollmentStatus::AlreadyEnrolled;
        }

        if self.is_full() {
            let queued = self.waitlist_policy == WaitlistPolicy::Deduplicate
                && self.is_waitlisted(student_id);
            if !queued {
                self.waitlist.push(student_id.to_string());
            }
            warn!(
                "{} is full ({}/{}), {} waitlisted at position {}",
                self.code,
                self.enrolled.len(),
                self.capacity,
                student_id,
                self.waitlist.len()
            );
            return EnrollmentStatus::Waitlisted;
        }

        self.enrolled.push(student_id.to_string());
        trace!("{} enrolled in {} ({} spots left)", student_id, self.code, self.available_spots());
        EnrollmentStatus::Enrolled
    }

    /// Upsert a grade into the course grade book.
    ///
    /// Enrollment is not checked here; the student side enforces it.
    pub fn record_grade(&mut self, student_id: &str, grade: f64) {
        trace!("{}: grade {} for {}", self.code, grade, student_id);
        self.grades.insert(student_id.to_string(), grade);
    }

    /// Average, min and max over the course grade book
    pub fn statistics(&self) -> CourseStatistics {
        if self.grades.is_empty() {
            return CourseStatistics::default();
        }

        let count = self.grades.len();
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &grade in self.grades.values() {
            sum += grade;
            min = min.min(grade);
            max = max.max(grade);
        }

        CourseStatistics {
            average: Some(sum / count as f64),
            min: Some(min),
            max: Some(max),
            count,
        }
    }
}

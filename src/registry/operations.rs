use std::collections::HashMap;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::course::{Course, EnrollmentStatus};
use crate::student::{Student, StudentRanking};
use super::types::{CourseId, Registry, RegistryOptions, StudentId};

impl Registry {
    /// Create an empty registry with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given options
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            options,
            courses: Vec::new(),
            course_index: HashMap::new(),
            students: Vec::new(),
            student_index: HashMap::new(),
            created_at: Utc::now(),
        }
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Register a course, applying the registry's waitlist policy.
    ///
    /// The course must not have a roster, waitlist or grades yet.
    pub fn add_course(&mut self, course: Course) -> Result<CourseId> {
        if self.course_index.contains_key(course.code()) {
            bail!("Course {} is already registered", course.code());
        }
        if !course.is_pristine() {
            bail!("Course {} already has enrollments or grades", course.code());
        }

        let id = CourseId::new(self.courses.len());
        let course = course.with_waitlist_policy(self.options.waitlist_policy);
        debug!("Registered course {}", course);
        self.course_index.insert(course.code().to_string(), id);
        self.courses.push(course);
        Ok(id)
    }

    /// Register a student with no courses or grades
    pub fn add_student(&mut self, student: Student) -> Result<StudentId> {
        if self.student_index.contains_key(student.student_id()) {
            bail!("Student {} is already registered", student.student_id());
        }
        if !student.is_unlinked() {
            bail!("Student {} already has courses or grades", student.student_id());
        }

        let id = StudentId::new(self.students.len());
        debug!("Registered student {}", student);
        self.student_index.insert(student.student_id().to_string(), id);
        self.students.push(student);
        Ok(id)
    }

    pub fn course_id(&self, code: &str) -> Option<CourseId> {
        self.course_index.get(code).copied()
    }

    pub fn student_id(&self, student_id: &str) -> Option<StudentId> {
        self.student_index.get(student_id).copied()
    }

    /// Look up a course by code
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.course_id(code).map(|id| &self.courses[id.index()])
    }

    /// Look up a student by id
    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.student_id(student_id).map(|id| &self.students[id.index()])
    }

    /// Resolve a course handle
    pub fn course_by_id(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(id.index())
    }

    /// Resolve a student handle
    pub fn student_by_id(&self, id: StudentId) -> Option<&Student> {
        self.students.get(id.index())
    }

    /// Courses in registration order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Students in registration order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    fn resolve(&self, student_id: &str, course_code: &str) -> Result<(StudentId, CourseId)> {
        let student = self
            .student_id(student_id)
            .with_context(|| format!("Unknown student {}", student_id))?;
        let course = self
            .course_id(course_code)
            .with_context(|| format!("Unknown course {}", course_code))?;
        Ok((student, course))
    }

    /// Enroll a registered student in a registered course.
    ///
    /// Only unknown identifiers are errors; the enrollment outcome itself
    /// is returned as a status.
    pub fn enroll(&mut self, student_id: &str, course_code: &str) -> Result<EnrollmentStatus> {
        let (student, course) = self.resolve(student_id, course_code)?;
        self.enroll_by_id(student, course)
    }

    /// Enroll using handles previously returned by this registry
    pub fn enroll_by_id(&mut self, student: StudentId, course: CourseId) -> Result<EnrollmentStatus> {
        let Registry { courses, students, .. } = self;
        let student = students
            .get_mut(student.index())
            .with_context(|| format!("Unknown student handle {:?}", student))?;
        let target = courses
            .get_mut(course.index())
            .with_context(|| format!("Unknown course handle {:?}", course))?;
        Ok(student.enroll_in(target, course))
    }

    /// Record a grade through the student, mirrored into the course.
    ///
    /// Returns `Ok(false)` without touching either grade book when the
    /// student holds no seat in the course, registered or not.
    pub fn record_grade(&mut self, student_id: &str, course_code: &str, grade: f64) -> Result<bool> {
        let student = self
            .student_id(student_id)
            .with_context(|| format!("Unknown student {}", student_id))?;
        let Registry { courses, students, .. } = self;
        Ok(students[student.index()].record_grade(courses, course_code, grade))
    }

    /// Write a grade straight into a course's grade book.
    ///
    /// Bypasses the student record and does not check enrollment.
    pub fn record_course_grade(&mut self, course_code: &str, student_id: &str, grade: f64) -> Result<()> {
        let course = self
            .course_id(course_code)
            .with_context(|| format!("Unknown course {}", course_code))?;
        self.courses[course.index()].record_grade(student_id, grade);
        Ok(())
    }

    pub fn total_students(&self) -> usize {
        self.students.len()
    }

    pub fn total_courses(&self) -> usize {
        self.courses.len()
    }

    /// Seats taken across every registered course
    pub fn total_enrollments(&self) -> usize {
        self.courses.iter().map(Course::enrollment_count).sum()
    }

    /// Mean GPA over students with at least one grade, `0.0` when none have any
    pub fn average_gpa(&self) -> f64 {
        let gpas: Vec<f64> = self
            .students
            .iter()
            .filter(|student| student.has_grades())
            .map(Student::gpa)
            .collect();

        if gpas.is_empty() {
            return 0.0;
        }
        gpas.iter().sum::<f64>() / gpas.len() as f64
    }

    /// Graded students ranked by GPA, best first.
    ///
    /// Equal GPAs keep registration order.
    pub fn top_students(&self, n: usize) -> Vec<StudentRanking> {
        let mut ranked: Vec<StudentRanking> = self
            .students
            .iter()
            .filter(|student| student.has_grades())
            .map(|student| StudentRanking {
                student_id: student.student_id().to_string(),
                name: student.name.clone(),
                gpa: student.gpa(),
            })
            .collect();

        ranked.sort_by(|a, b| b.gpa.total_cmp(&a.gpa));
        ranked.truncate(n);
        ranked
    }

    /// Log a summary of the registry
    pub fn log_summary(&self) {
        info!("Registry summary:");
        info!("- Courses: {}", self.total_courses());
        info!("- Students: {}", self.total_students());
        info!("- Enrollments: {}", self.total_enrollments());
        info!("- Waitlisted: {}", self.courses.iter().map(Course::waitlist_len).sum::<usize>());
    }
}

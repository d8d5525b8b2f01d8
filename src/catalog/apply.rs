use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Serialize, Deserialize};

use crate::course::{Course, EnrollmentStatus};
use crate::registry::Registry;
use crate::student::Student;
use super::types::CatalogFile;

/// Counts gathered while applying a catalog
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogApplyStats {
    pub courses: usize,
    pub students: usize,
    pub enrolled: usize,
    pub waitlisted: usize,
    pub already_enrolled: usize,
    pub grades_recorded: usize,

    /// Grades dropped because the student had no seat
    pub grades_ignored: usize,
}

impl CatalogFile {
    /// Build a fresh registry from this catalog.
    ///
    /// Courses and students are registered first, then enrollments and
    /// grades are replayed in file order.
    pub fn build_registry(&self) -> Result<(Registry, CatalogApplyStats)> {
        let mut registry = Registry::with_options(self.settings.registry_options());
        let stats = self.apply_to(&mut registry)?;
        Ok((registry, stats))
    }

    /// Replay this catalog into an existing registry
    pub fn apply_to(&self, registry: &mut Registry) -> Result<CatalogApplyStats> {
        let mut stats = CatalogApplyStats::default();

        for entry in &self.courses {
            let course = Course::new(
                &entry.code,
                &entry.name,
                &entry.instructor,
                entry.credits,
                entry.capacity,
            )?;
            registry.add_course(course)?;
            stats.courses += 1;
        }

        for entry in &self.students {
            let student = Student::new(&entry.student_id, &entry.name, &entry.email, &entry.program)?;
            registry.add_student(student)?;
            stats.students += 1;
        }

        for (position, entry) in self.enrollments.iter().enumerate() {
            let status = registry
                .enroll(&entry.student_id, &entry.course_code)
                .with_context(|| format!("Enrollment #{} is invalid", position + 1))?;
            match status {
                EnrollmentStatus::Enrolled => stats.enrolled += 1,
                EnrollmentStatus::Waitlisted => stats.waitlisted += 1,
                EnrollmentStatus::AlreadyEnrolled => stats.already_enrolled += 1,
            }
        }

        for (position, entry) in self.grades.iter().enumerate() {
            let recorded = registry
                .record_grade(&entry.student_id, &entry.course_code, entry.grade)
                .with_context(|| format!("Grade #{} is invalid", position + 1))?;
            if recorded {
                stats.grades_recorded += 1;
            } else {
                warn!(
                    "Grade for {} in {} ignored: student is not enrolled",
                    entry.student_id, entry.course_code
                );
                stats.grades_ignored += 1;
            }
        }

        info!("Catalog applied:");
        info!("- Courses: {}", stats.courses);
        info!("- Students: {}", stats.students);
        info!("- Enrolled: {}", stats.enrolled);
        info!("- Waitlisted: {}", stats.waitlisted);
        info!("- Grades recorded: {}", stats.grades_recorded);

        Ok(stats)
    }
}

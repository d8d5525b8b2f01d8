use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};

use crate::registry::Registry;
use super::types::{CourseSummary, RegistryReport, StudentSummary, TranscriptEntry};

fn format_grade(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

impl RegistryReport {
    /// Compute a report from the current registry state
    pub fn build(registry: &Registry, top_n: usize) -> Self {
        let courses = registry
            .courses()
            .iter()
            .map(|course| CourseSummary {
                code: course.code().to_string(),
                name: course.name.clone(),
                instructor: course.instructor.clone(),
                credits: course.credits,
                capacity: course.capacity(),
                enrolled: course.enrollment_count(),
                waitlisted: course.waitlist_len(),
                available_spots: course.available_spots(),
                is_full: course.is_full(),
                statistics: course.statistics(),
            })
            .collect();

        let students = registry
            .students()
            .iter()
            .map(|student| StudentSummary {
                student_id: student.student_id().to_string(),
                name: student.name.clone(),
                program: student.program.clone(),
                gpa: student.gpa(),
                transcript: student
                    .transcript()
                    .into_iter()
                    .map(|(course_code, grade)| TranscriptEntry { course_code, grade })
                    .collect(),
            })
            .collect();

        debug!("Built report for {} courses", registry.total_courses());

        Self {
            generated_at: Utc::now(),
            total_students: registry.total_students(),
            total_enrollments: registry.total_enrollments(),
            average_gpa: registry.average_gpa(),
            top_students: registry.top_students(top_n),
            courses,
            students,
        }
    }

    /// Human-readable rendering
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(out, "Report generated at {}", self.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
        let _ = writeln!(out);
        let _ = writeln!(out, "Courses:");
        for course in &self.courses {
            let _ = writeln!(
                out,
                "  {} - {} ({}) [{} credits]",
                course.code, course.name, course.instructor, course.credits
            );
            let _ = writeln!(
                out,
                "    enrolled {}/{}, {} spots left, waitlist {}{}",
                course.enrolled,
                course.capacity,
                course.available_spots,
                course.waitlisted,
                if course.is_full { " (full)" } else { "" }
            );
            let stats = &course.statistics;
            let _ = writeln!(
                out,
                "    grades: count {}, average {}, min {}, max {}",
                stats.count,
                format_grade(stats.average),
                format_grade(stats.min),
                format_grade(stats.max)
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Students: {}", self.total_students);
        for student in self.students.iter().filter(|s| !s.transcript.is_empty()) {
            let transcript = student
                .transcript
                .iter()
                .map(|entry| format!("{}: {}", entry.course_code, entry.grade))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "  {} - {} ({}) GPA {:.2} [{}]",
                student.student_id, student.name, student.program, student.gpa, transcript
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Total enrollments across all courses: {}", self.total_enrollments);
        let _ = writeln!(out, "Average GPA: {:.2}", self.average_gpa);
        let _ = writeln!(out, "Top {} students:", self.top_students.len());
        for (rank, entry) in self.top_students.iter().enumerate() {
            let _ = writeln!(out, "  {}. {} - {} ({:.2})", rank + 1, entry.student_id, entry.name, entry.gpa);
        }

        out
    }

    /// Pretty JSON rendering
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    /// Write the report as JSON, creating parent directories as needed
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("Writing report to {}", path.display());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content = self.to_json()?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write report file {}", path.display()))?;

        info!("Saved report with {} courses to {}", self.courses.len(), path.display());
        Ok(())
    }
}

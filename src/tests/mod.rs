use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::course::{Course, EnrollmentStatus, WaitlistPolicy};
use crate::registry::{Registry, RegistryOptions};
use crate::student::{Student, StudentRanking};

// Helper to build a registry with one course and a set of students
fn registry_with(capacity: usize, student_ids: &[&str]) -> Result<Registry> {
    let mut registry = Registry::new();
    registry.add_course(Course::new("MATH101", "Calculus I", "Dr. Smith", 3, capacity)?)?;
    for id in student_ids {
        registry.add_student(Student::new(*id, format!("Student {}", id), "", "General")?)?;
    }
    Ok(registry)
}

fn add_student(registry: &mut Registry, id: &str, name: &str) -> Result<()> {
    registry.add_student(Student::new(id, name, format!("{}@university.edu", id), "General")?)?;
    Ok(())
}

#[test]
fn test_roster_never_exceeds_capacity() -> Result<()> {
    let ids: Vec<String> = (0..12).map(|i| format!("S{:03}", i)).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let mut registry = registry_with(5, &refs)?;

    for id in &refs {
        registry.enroll(id, "MATH101")?;
        registry.enroll(id, "MATH101")?;
        let course = registry.course("MATH101").unwrap();
        assert!(course.enrollment_count() <= course.capacity());
    }

    let course = registry.course("MATH101").unwrap();
    assert_eq!(course.enrollment_count(), 5);
    assert_eq!(course.enrolled(), &refs[..5]);
    Ok(())
}

#[test]
fn test_second_enrollment_reports_already_enrolled() -> Result<()> {
    let mut registry = registry_with(30, &["S001"])?;

    assert_eq!(registry.enroll("S001", "MATH101")?, EnrollmentStatus::Enrolled);
    assert_eq!(registry.enroll("S001", "MATH101")?, EnrollmentStatus::AlreadyEnrolled);
    assert_eq!(registry.course("MATH101").unwrap().enrollment_count(), 1);
    Ok(())
}

#[test]
fn test_full_course_waitlists_in_call_order() -> Result<()> {
    let mut registry = registry_with(1, &["S001", "S002", "S003"])?;

    registry.enroll("S001", "MATH101")?;
    assert_eq!(registry.enroll("S003", "MATH101")?, EnrollmentStatus::Waitlisted);
    assert_eq!(registry.enroll("S002", "MATH101")?, EnrollmentStatus::Waitlisted);

    let course = registry.course("MATH101").unwrap();
    assert_eq!(course.enrolled(), ["S001"]);
    assert_eq!(course.waitlist(), ["S003", "S002"]);
    assert!(!registry.student("S003").unwrap().is_enrolled_in("MATH101"));
    Ok(())
}

#[test]
fn test_registry_policy_reaches_courses() -> Result<()> {
    let mut registry = Registry::with_options(RegistryOptions {
        waitlist_policy: WaitlistPolicy::Deduplicate,
    });
    registry.add_course(Course::new("CS101", "Programming Basics", "Prof. Brown", 3, 1)?)?;
    add_student(&mut registry, "S001", "Alice Wilson")?;
    add_student(&mut registry, "S002", "Bob Davis")?;

    registry.enroll("S001", "CS101")?;
    registry.enroll("S002", "CS101")?;
    registry.enroll("S002", "CS101")?;

    let course = registry.course("CS101").unwrap();
    assert_eq!(course.waitlist_policy(), WaitlistPolicy::Deduplicate);
    assert_eq!(course.waitlist(), ["S002"]);
    Ok(())
}

#[test]
fn test_gpa_of_two_grades() -> Result<()> {
    let mut registry = Registry::new();
    registry.add_course(Course::new("MATH101", "Calculus I", "Dr. Smith", 3, 30)?)?;
    registry.add_course(Course::new("CS101", "Programming Basics", "Prof. Brown", 3, 20)?)?;
    add_student(&mut registry, "S001", "Alice Wilson")?;

    registry.enroll("S001", "MATH101")?;
    registry.enroll("S001", "CS101")?;
    assert!(registry.record_grade("S001", "MATH101", 85.5)?);
    assert!(registry.record_grade("S001", "CS101", 92.0)?);

    assert_eq!(registry.student("S001").unwrap().gpa(), 88.75);
    Ok(())
}

#[test]
fn test_grade_without_seat_changes_nothing() -> Result<()> {
    let mut registry = registry_with(1, &["S001", "S002"])?;
    registry.enroll("S001", "MATH101")?;
    registry.enroll("S002", "MATH101")?;

    // Waitlisted, unregistered course and unknown code alike
    assert!(!registry.record_grade("S002", "MATH101", 70.0)?);
    assert!(!registry.record_grade("S002", "NOPE999", 70.0)?);

    assert!(registry.student("S002").unwrap().transcript().is_empty());
    assert!(registry.course("MATH101").unwrap().grades().is_empty());
    Ok(())
}

#[test]
fn test_unknown_identifiers_are_errors() -> Result<()> {
    let mut registry = registry_with(5, &["S001"])?;

    assert!(registry.enroll("S999", "MATH101").is_err());
    assert!(registry.enroll("S001", "NOPE999").is_err());
    assert!(registry.record_grade("S999", "MATH101", 50.0).is_err());
    assert!(registry.record_course_grade("NOPE999", "S001", 50.0).is_err());
    Ok(())
}

#[test]
fn test_duplicate_registration_is_rejected() -> Result<()> {
    let mut registry = registry_with(5, &["S001"])?;

    assert!(registry.add_course(Course::new("MATH101", "Again", "Dr. Smith", 3, 5)?).is_err());
    assert!(registry.add_student(Student::new("S001", "Again", "", "")?).is_err());
    assert_eq!(registry.total_courses(), 1);
    assert_eq!(registry.total_students(), 1);
    Ok(())
}

#[test]
fn test_course_grade_is_unconditional() -> Result<()> {
    let mut registry = registry_with(5, &["S001"])?;
    registry.record_course_grade("MATH101", "S001", 64.0)?;

    let stats = registry.course("MATH101").unwrap().statistics();
    assert_eq!(stats.count, 1);
    assert_eq!(stats.average, Some(64.0));
    assert!(registry.student("S001").unwrap().transcript().is_empty());
    Ok(())
}

#[test]
fn test_aggregates_over_registry() -> Result<()> {
    let mut registry = Registry::new();
    registry.add_course(Course::new("MATH101", "Calculus I", "Dr. Smith", 3, 30)?)?;
    registry.add_course(Course::new("CS101", "Programming Basics", "Prof. Brown", 3, 20)?)?;
    add_student(&mut registry, "S001", "Alice Wilson")?;
    add_student(&mut registry, "S002", "Bob Davis")?;
    add_student(&mut registry, "S003", "Carol Lee")?;

    assert_eq!(registry.average_gpa(), 0.0);
    assert!(registry.top_students(2).is_empty());

    registry.enroll("S001", "MATH101")?;
    registry.enroll("S001", "CS101")?;
    registry.enroll("S002", "MATH101")?;
    registry.record_grade("S001", "MATH101", 85.5)?;
    registry.record_grade("S001", "CS101", 92.0)?;
    registry.record_grade("S002", "MATH101", 78.3)?;

    assert_eq!(registry.total_enrollments(), 3);
    assert!((registry.average_gpa() - 83.525).abs() < 1e-9);

    assert_eq!(
        registry.top_students(2),
        vec![
            StudentRanking { student_id: "S001".into(), name: "Alice Wilson".into(), gpa: 88.75 },
            StudentRanking { student_id: "S002".into(), name: "Bob Davis".into(), gpa: 78.3 },
        ]
    );
    assert_eq!(registry.top_students(1).len(), 1);
    Ok(())
}

#[test]
fn test_top_students_ties_keep_registration_order() -> Result<()> {
    let mut registry = registry_with(10, &["S003", "S001", "S002"])?;
    for id in ["S003", "S001", "S002"] {
        registry.enroll(id, "MATH101")?;
    }
    registry.record_grade("S003", "MATH101", 80.0)?;
    registry.record_grade("S001", "MATH101", 90.0)?;
    registry.record_grade("S002", "MATH101", 80.0)?;

    let order: Vec<String> = registry
        .top_students(10)
        .into_iter()
        .map(|ranking| ranking.student_id)
        .collect();
    assert_eq!(order, vec!["S001", "S003", "S002"]);
    Ok(())
}

#[test]
fn test_capacity_overflow_scenario() -> Result<()> {
    let mut registry = Registry::new();
    registry.add_course(Course::new("MATH101", "Calculus I", "Dr. Smith", 3, 30)?)?;

    for (id, name) in [("S001", "Alice Wilson"), ("S002", "Bob Davis"), ("S003", "Carol Lee")] {
        add_student(&mut registry, id, name)?;
        assert_eq!(registry.enroll(id, "MATH101")?, EnrollmentStatus::Enrolled);
    }
    for i in 0..25 {
        let id = format!("S100{}", i);
        add_student(&mut registry, &id, &format!("Student {}", i))?;
        registry.enroll(&id, "MATH101")?;
    }
    assert_eq!(registry.course("MATH101").unwrap().enrollment_count(), 28);
    assert!(!registry.course("MATH101").unwrap().is_full());

    let mut outcomes = Vec::new();
    for i in 25..28 {
        let id = format!("S100{}", i);
        add_student(&mut registry, &id, &format!("Student {}", i))?;
        outcomes.push(registry.enroll(&id, "MATH101")?);
    }

    assert_eq!(
        outcomes,
        vec![EnrollmentStatus::Enrolled, EnrollmentStatus::Enrolled, EnrollmentStatus::Waitlisted]
    );
    let course = registry.course("MATH101").unwrap();
    assert!(course.is_full());
    assert_eq!(course.waitlist(), ["S10027"]);
    Ok(())
}

#[test]
fn test_handle_from_larger_registry_is_an_error() -> Result<()> {
    let mut larger = Registry::new();
    larger.add_course(Course::new("MATH101", "Calculus I", "Dr. Smith", 3, 30)?)?;
    let foreign = larger.add_course(Course::new("CS101", "Programming Basics", "Prof. Brown", 3, 20)?)?;

    let mut registry = registry_with(5, &["S001"])?;
    let student = registry.student_id("S001").unwrap();

    let err = registry.enroll_by_id(student, foreign).unwrap_err();
    assert!(err.to_string().contains("Unknown course handle"));
    assert_eq!(registry.course("MATH101").unwrap().enrollment_count(), 0);

    let course = registry.course_id("MATH101").unwrap();
    assert_eq!(registry.enroll_by_id(student, course)?, EnrollmentStatus::Enrolled);
    Ok(())
}

#[test]
fn test_entities_with_prior_state_are_rejected() -> Result<()> {
    let mut registry = Registry::new();

    let mut enrolled = Course::new("CS101", "Programming Basics", "Prof. Brown", 3, 20)?;
    enrolled.enroll("S009");
    assert!(registry.add_course(enrolled).is_err());

    let mut graded = Course::new("PHYS101", "Physics I", "Dr. Johnson", 4, 25)?;
    graded.record_grade("S009", 50.0);
    assert!(registry.add_course(graded).is_err());

    let math = registry.add_course(Course::new("MATH101", "Calculus I", "Dr. Smith", 3, 30)?)?;
    let mut side_course = Course::new("CS101", "Programming Basics", "Prof. Brown", 3, 20)?;
    let mut student = Student::new("S009", "Dan Ortiz", "dan@university.edu", "General")?;
    student.enroll_in(&mut side_course, math);
    assert!(registry.add_student(student).is_err());
    assert_eq!(registry.total_courses(), 1);
    assert_eq!(registry.total_students(), 0);

    // Nothing leaked into the registered course's grade book
    add_student(&mut registry, "S009", "Dan Ortiz")?;
    assert!(!registry.record_grade("S009", "CS101", 50.0)?);
    assert!(registry.course("MATH101").unwrap().grades().is_empty());
    Ok(())
}

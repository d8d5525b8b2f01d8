//! Built-in walkthrough: three courses, three students, a handful of
//! grades, then a burst of synthetic students filling Calculus I.

use anyhow::Result;
use log::info;

use crate::course::Course;
use crate::registry::Registry;
use crate::student::Student;

/// Synthetic students enrolled into Calculus I at the end of the walkthrough
pub const SYNTHETIC_STUDENTS: usize = 25;

/// Register the demo courses and students
pub fn seed(registry: &mut Registry) -> Result<()> {
    registry.add_course(Course::new("MATH101", "Calculus I", "Dr. Smith", 3, 30)?)?;
    registry.add_course(Course::new("PHYS101", "Physics I", "Dr. Johnson", 4, 25)?)?;
    registry.add_course(Course::new("CS101", "Programming Basics", "Prof. Brown", 3, 20)?)?;

    registry.add_student(Student::new("S001", "Alice Wilson", "alice@university.edu", "Computer Science")?)?;
    registry.add_student(Student::new("S002", "Bob Davis", "bob@university.edu", "Mathematics")?)?;
    registry.add_student(Student::new("S003", "Carol Lee", "carol@university.edu", "Physics")?)?;
    Ok(())
}

/// Run the full walkthrough against `registry`
pub fn run(registry: &mut Registry) -> Result<()> {
    seed(registry)?;

    if let Some(math) = registry.course("MATH101") {
        info!("Course: {}", math);
        info!("Available spots in Math: {}", math.available_spots());
    }
    info!("Total students: {}", registry.total_students());

    let alice_math = registry.enroll("S001", "MATH101")?;
    registry.enroll("S001", "CS101")?;
    registry.enroll("S002", "MATH101")?;
    info!("Alice's enrollment in Math: {}", alice_math);

    registry.record_grade("S001", "MATH101", 85.5)?;
    registry.record_grade("S001", "CS101", 92.0)?;
    registry.record_grade("S002", "MATH101", 78.3)?;

    // Same values again, straight into the course grade book
    registry.record_course_grade("MATH101", "S001", 85.5)?;
    registry.record_course_grade("MATH101", "S002", 78.3)?;

    for i in 0..SYNTHETIC_STUDENTS {
        let student_id = format!("S100{}", i);
        registry.add_student(Student::new(
            &student_id,
            format!("Student {}", i),
            format!("student{}@uni.edu", i),
            "General",
        )?)?;
        registry.enroll(&student_id, "MATH101")?;
    }

    if let Some(math) = registry.course("MATH101") {
        info!("Course full status: {}", math.is_full());
        info!("Waitlist size: {}", math.waitlist_len());
    }
    registry.log_summary();
    Ok(())
}

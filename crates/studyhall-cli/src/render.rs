//! Table rendering for console listings.

use comfy_table::{Cell, Table};

use studyhall_core::catalog::Catalog;
use studyhall_core::model::{Course, Student, Subject};
use studyhall_core::results::{SubjectResult, Verdict};

/// Courses with their subjects, in catalog order.
pub fn courses_table(courses: &[Course]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Course", "Subjects"]);
    for course in courses {
        let subjects = if course.subjects().is_empty() {
            "-".to_string()
        } else {
            course
                .subjects()
                .iter()
                .map(|s| format!("{} ({})", s.name, s.id))
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            Cell::new(&course.id),
            Cell::new(&course.name),
            Cell::new(subjects),
        ]);
    }
    table
}

/// Subjects of a single course.
pub fn subjects_table(subjects: &[Subject]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Subject"]);
    for subject in subjects {
        table.add_row(vec![Cell::new(&subject.id), Cell::new(&subject.name)]);
    }
    table
}

/// The registered-students roster, with enrollments resolved to names.
pub fn students_table<'a>(
    students: impl Iterator<Item = &'a Student>,
    catalog: &Catalog,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Age", "Email", "Username", "Courses", "Subjects"]);
    for student in students {
        let courses = join_or_dash(
            student
                .enrolled_courses()
                .iter()
                .map(|id| resolve_course(catalog, id)),
        );
        let subjects = join_or_dash(
            student
                .enrolled_subjects()
                .iter()
                .map(|id| resolve_subject(catalog, id)),
        );
        table.add_row(vec![
            Cell::new(&student.student_id),
            Cell::new(&student.name),
            Cell::new(student.age),
            Cell::new(&student.email),
            Cell::new(&student.username),
            Cell::new(courses),
            Cell::new(subjects),
        ]);
    }
    table
}

/// One student's exam results.
pub fn results_table(rows: &[SubjectResult]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Subject", "Subject ID", "Score", "Status"]);
    for row in rows {
        let name = row.subject_name.as_deref().unwrap_or("Unknown Subject");
        let score = match row.out_of {
            Some(total) => format!("{}/{}", row.score, total),
            None => format!("{}/-", row.score),
        };
        let status = match row.verdict {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
            Verdict::NoExam => "NO EXAM",
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(&row.subject_id),
            Cell::new(score),
            Cell::new(status),
        ]);
    }
    table
}

fn join_or_dash(parts: impl Iterator<Item = String>) -> String {
    let joined = parts.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

fn resolve_course(catalog: &Catalog, course_id: &str) -> String {
    match catalog.course(course_id) {
        Some(course) => course.name.clone(),
        None => course_id.to_string(),
    }
}

fn resolve_subject(catalog: &Catalog, subject_id: &str) -> String {
    match catalog.subject_name(subject_id) {
        Some(name) => name.to_string(),
        None => subject_id.to_string(),
    }
}

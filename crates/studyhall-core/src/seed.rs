//! TOML seed parsing and application.
//!
//! A seed file declares the startup roster — admins, courses with their
//! subjects, students with their enrollments, and exams — referencing
//! courses and subjects by name, since stable identifiers only exist once
//! the seed is applied. Validation happens during application and aborts
//! startup with a contextual error; a half-applied school is never handed
//! to the caller.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::Question;
use crate::school::School;

/// The built-in demonstration roster.
pub const DEFAULT_SEED: &str = include_str!("../../../seeds/default.toml");

/// A parsed, not-yet-applied seed file.
#[derive(Debug, Deserialize)]
pub struct Seed {
    #[serde(default)]
    admins: Vec<SeedAdmin>,
    #[serde(default)]
    courses: Vec<SeedCourse>,
    #[serde(default)]
    students: Vec<SeedStudent>,
    #[serde(default)]
    exams: Vec<SeedExam>,
}

#[derive(Debug, Deserialize)]
struct SeedAdmin {
    username: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct SeedCourse {
    name: String,
    #[serde(default)]
    subjects: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SeedStudent {
    username: String,
    password: String,
    name: String,
    age: u32,
    email: String,
    #[serde(default)]
    courses: Vec<String>,
    #[serde(default)]
    subjects: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SeedExam {
    /// Subject name; must resolve to a seeded subject.
    subject: String,
    questions: Vec<SeedQuestion>,
}

#[derive(Debug, Deserialize)]
struct SeedQuestion {
    text: String,
    options: Vec<String>,
    /// Zero-based index into `options`.
    correct: usize,
}

/// Parse a seed from a TOML string. `source` names the origin for error
/// messages (a path, or "<built-in>").
pub fn parse_seed(content: &str, source: &str) -> Result<Seed> {
    toml::from_str(content).with_context(|| format!("failed to parse seed TOML: {source}"))
}

/// Read and parse a seed file.
pub fn load_seed(path: &Path) -> Result<Seed> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file: {}", path.display()))?;
    parse_seed(&content, &path.display().to_string())
}

impl Seed {
    /// Apply the seed onto a school, validating as it goes.
    pub fn apply(&self, school: &mut School) -> Result<()> {
        for admin in &self.admins {
            school
                .directory
                .add_admin(&admin.username, &admin.password)
                .with_context(|| format!("seeding admin '{}'", admin.username))?;
        }

        for course in &self.courses {
            let course_id = school
                .catalog
                .add_course(&course.name)
                .with_context(|| format!("seeding course '{}'", course.name))?
                .id
                .clone();
            for subject in &course.subjects {
                school
                    .catalog
                    .add_subject(&course_id, subject)
                    .with_context(|| {
                        format!("seeding subject '{subject}' of course '{}'", course.name)
                    })?;
            }
        }

        for student in &self.students {
            let username = school
                .directory
                .register_student(crate::directory::NewStudent {
                    name: student.name.clone(),
                    age: student.age,
                    email: student.email.clone(),
                    username: student.username.clone(),
                    password: student.password.clone(),
                })
                .with_context(|| format!("seeding student '{}'", student.username))?
                .username
                .clone();

            let mut course_ids = Vec::new();
            for course_name in &student.courses {
                let course = school
                    .catalog
                    .courses()
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(course_name))
                    .with_context(|| {
                        format!(
                            "student '{}' enrolls in unknown course '{course_name}'",
                            student.username
                        )
                    })?;
                course_ids.push(course.id.clone());
            }
            let mut subject_ids = Vec::new();
            for subject_name in &student.subjects {
                let subject = find_subject(school, subject_name).with_context(|| {
                    format!(
                        "student '{}' enrolls in unknown subject '{subject_name}'",
                        student.username
                    )
                })?;
                subject_ids.push(subject.0);
            }

            // Lookups are done; now mutate the student record.
            if let Some(record) = school.directory.student_mut(&username) {
                for course_id in &course_ids {
                    record.enroll_course(course_id);
                }
                for subject_id in &subject_ids {
                    record.enroll_subject(subject_id);
                }
            }
        }

        for exam in &self.exams {
            let (subject_id, subject_name) = find_subject(school, &exam.subject)
                .with_context(|| format!("exam references unknown subject '{}'", exam.subject))?;
            anyhow::ensure!(
                school.bank.find_exam(&subject_id).is_none(),
                "duplicate exam for subject '{}'",
                exam.subject
            );
            anyhow::ensure!(
                !exam.questions.is_empty(),
                "exam for subject '{}' has no questions",
                exam.subject
            );
            let questions = exam
                .questions
                .iter()
                .map(|q| {
                    anyhow::ensure!(
                        q.options.len() >= 2,
                        "question '{}' needs at least two options",
                        q.text
                    );
                    anyhow::ensure!(
                        q.correct < q.options.len(),
                        "question '{}' marks option {} correct but has only {} options",
                        q.text,
                        q.correct,
                        q.options.len()
                    );
                    Ok(Question {
                        text: q.text.clone(),
                        options: q.options.clone(),
                        correct: q.correct,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            school.bank.add_exam(&subject_id, &subject_name, questions);
        }

        tracing::info!(
            admins = self.admins.len(),
            courses = self.courses.len(),
            students = self.students.len(),
            exams = self.exams.len(),
            "seed applied"
        );
        Ok(())
    }
}

/// Resolve a subject by name across all courses, first match wins.
fn find_subject(school: &School, name: &str) -> Option<(String, String)> {
    school
        .catalog
        .courses()
        .iter()
        .flat_map(|c| c.subjects().iter())
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .map(|s| (s.id.clone(), s.name.clone()))
}

/// A school populated with the built-in roster.
pub fn default_school() -> Result<School> {
    let mut school = School::new();
    parse_seed(DEFAULT_SEED, "<built-in>")?.apply(&mut school)?;
    Ok(school)
}

//! Core data model types.
//!
//! Plain data with identity semantics: courses, subjects, questions, exams,
//! and the two user variants. Identifier allocation and all mutation rules
//! live with the owning components (`catalog`, `directory`, `bank`); a
//! student's links to courses and subjects are identifier keys, never shared
//! object references.

use std::collections::BTreeMap;

/// A unit of study that exams are attached to. Equality is by identifier.
#[derive(Debug, Clone)]
pub struct Subject {
    /// Unique identifier ("SUB...").
    pub id: String,
    /// Display name, unique within its course (case-insensitively).
    pub name: String,
}

impl PartialEq for Subject {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Subject {}

/// A named course owning an ordered list of subjects.
#[derive(Debug, Clone)]
pub struct Course {
    /// Unique identifier ("COU...").
    pub id: String,
    /// Display name, unique across the catalog (case-insensitively).
    pub name: String,
    pub(crate) subjects: Vec<Subject>,
}

impl Course {
    /// The course's subjects in insertion order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Case-insensitive lookup by subject name.
    pub fn subject_named(&self, name: &str) -> Option<&Subject> {
        self.subjects
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Remove the first subject with the given id, returning it.
    pub(crate) fn remove_subject(&mut self, subject_id: &str) -> Option<Subject> {
        let index = self.subjects.iter().position(|s| s.id == subject_id)?;
        Some(self.subjects.remove(index))
    }
}

/// A multiple-choice question. Immutable once created.
#[derive(Debug, Clone)]
pub struct Question {
    /// The question text.
    pub text: String,
    /// Answer options in display order.
    pub options: Vec<String>,
    /// Zero-based index of the correct option.
    pub correct: usize,
}

impl Question {
    /// Whether a zero-based answer index hits the correct option.
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct
    }
}

/// An exam for one subject: a fixed, ordered sequence of questions.
#[derive(Debug, Clone)]
pub struct Exam {
    /// Unique identifier ("EXAM...").
    pub id: String,
    /// The subject this exam belongs to.
    pub subject_id: String,
    /// Subject name, denormalized for display.
    pub subject_name: String,
    /// Questions in presentation order.
    pub questions: Vec<Question>,
}

/// An administrator account.
#[derive(Debug, Clone)]
pub struct Admin {
    pub username: String,
    pub password: String,
    /// Display name; seeded admins are simply "Admin".
    pub name: String,
}

/// A student account with enrollment state and exam scores.
#[derive(Debug, Clone)]
pub struct Student {
    pub username: String,
    pub password: String,
    pub name: String,
    /// Unique identifier ("STU...").
    pub student_id: String,
    pub age: u32,
    pub email: String,
    pub(crate) enrolled_courses: Vec<String>,
    pub(crate) enrolled_subjects: Vec<String>,
    pub(crate) scores: BTreeMap<String, u32>,
}

/// A registered account, dispatched by role.
#[derive(Debug, Clone)]
pub enum User {
    Admin(Admin),
    Student(Student),
}

impl User {
    pub fn username(&self) -> &str {
        match self {
            User::Admin(a) => &a.username,
            User::Student(s) => &s.username,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            User::Admin(a) => &a.password,
            User::Student(s) => &s.password,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            User::Admin(a) => &a.name,
            User::Student(s) => &s.name,
        }
    }
}

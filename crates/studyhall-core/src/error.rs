//! Component error types.
//!
//! Every fallible operation returns one of these instead of panicking or
//! threading stringly-typed failures across component boundaries. Each
//! variant maps to one user-visible condition; all of them are recovered at
//! the point of detection.

use thiserror::Error;

/// Errors from [`Catalog`](crate::catalog::Catalog) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A course with the same name (case-insensitively) already exists.
    #[error("a course named '{0}' already exists")]
    DuplicateCourse(String),

    /// The course already has a subject with this name (case-insensitively).
    #[error("subject '{subject}' already exists in course '{course}'")]
    DuplicateSubject { subject: String, course: String },

    /// No course with the given identifier.
    #[error("no course with id '{0}'")]
    CourseNotFound(String),

    /// No subject with the given identifier in the given course.
    #[error("no subject with id '{subject_id}' in course '{course}'")]
    SubjectNotFound { subject_id: String, course: String },
}

/// Errors from [`Directory`](crate::directory::Directory) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// No registered user matched both username and password exactly.
    #[error("invalid username or password")]
    AuthFailure,

    /// The username is already registered (case-insensitively).
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    /// Age outside the accepted 1..=100 range.
    #[error("age must be between 1 and 100, got {0}")]
    InvalidAge(u32),

    /// No student with the given student identifier.
    #[error("no student with id '{0}'")]
    StudentNotFound(String),
}

/// Errors from the exam-session protocol.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// None of the student's enrolled subjects has an exam in the bank.
    #[error("no enrolled subject has an exam available")]
    NoEligibleSubjects,

    /// The subject selection was numeric but outside the eligible list.
    #[error("selection {choice} is out of range 1..={count}")]
    SelectionOutOfRange { choice: i64, count: usize },

    /// The answer source closed mid-exam; nothing was committed.
    #[error("input stream closed before the exam finished")]
    InputClosed,
}

/// Errors from an input collaborator.
///
/// `Format` is always recoverable by re-prompting at the same step; `Closed`
/// unwinds the enclosing flow without touching state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadError {
    /// The line was not a number where a number was required.
    #[error("input was not a number")]
    Format,

    /// The input stream ended.
    #[error("input stream closed")]
    Closed,
}

impl ReadError {
    /// Returns `true` if re-prompting at the same step can recover.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ReadError::Format)
    }
}

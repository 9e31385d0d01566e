//! The user directory.
//!
//! Owns every registered account — admins and students alike — in a single
//! list, plus the student identifier sequence. Login matches username and
//! password exactly; username uniqueness is case-insensitive.

use crate::error::DirectoryError;
use crate::ids::IdSequence;
use crate::model::{Admin, Student, User};

/// Registration input for a new student.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// The owned collection of all users and login resolution.
#[derive(Debug)]
pub struct Directory {
    users: Vec<User>,
    student_ids: IdSequence,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            student_ids: IdSequence::new("STU", 1000),
        }
    }

    /// Register an administrator account (display name "Admin").
    pub fn add_admin(&mut self, username: &str, password: &str) -> Result<(), DirectoryError> {
        if self.is_username_taken(username) {
            return Err(DirectoryError::UsernameTaken(username.to_string()));
        }
        self.users.push(User::Admin(Admin {
            username: username.to_string(),
            password: password.to_string(),
            name: "Admin".to_string(),
        }));
        Ok(())
    }

    /// Resolve a login: exact, case-sensitive match on both fields against
    /// all registered users, first match wins.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&User, DirectoryError> {
        self.users
            .iter()
            .find(|u| u.username() == username && u.password() == password)
            .ok_or(DirectoryError::AuthFailure)
    }

    /// Case-insensitive check against all registered usernames.
    pub fn is_username_taken(&self, username: &str) -> bool {
        self.users
            .iter()
            .any(|u| u.username().eq_ignore_ascii_case(username))
    }

    /// Register a student, allocating the next "STU" identifier.
    ///
    /// Rejects taken usernames before construction and ages outside 1..=100.
    pub fn register_student(&mut self, new: NewStudent) -> Result<&Student, DirectoryError> {
        if self.is_username_taken(&new.username) {
            return Err(DirectoryError::UsernameTaken(new.username));
        }
        if new.age == 0 || new.age > 100 {
            return Err(DirectoryError::InvalidAge(new.age));
        }
        let student = Student {
            username: new.username,
            password: new.password,
            name: new.name,
            student_id: self.student_ids.next_id(),
            age: new.age,
            email: new.email,
            enrolled_courses: Vec::new(),
            enrolled_subjects: Vec::new(),
            scores: Default::default(),
        };
        tracing::info!(student_id = %student.student_id, username = %student.username, "student registered");
        let index = self.users.len();
        self.users.push(User::Student(student));
        match &self.users[index] {
            User::Student(s) => Ok(s),
            User::Admin(_) => unreachable!("just pushed a student"),
        }
    }

    /// All registered students, in registration order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.users.iter().filter_map(|u| match u {
            User::Student(s) => Some(s),
            User::Admin(_) => None,
        })
    }

    /// Lookup a student by student identifier, case-insensitively.
    pub fn find_student(&self, student_id: &str) -> Result<&Student, DirectoryError> {
        self.students()
            .find(|s| s.student_id.eq_ignore_ascii_case(student_id))
            .ok_or_else(|| DirectoryError::StudentNotFound(student_id.to_string()))
    }

    /// Mutable access to a student by username (exact match), for the
    /// logged-in session.
    pub fn student_mut(&mut self, username: &str) -> Option<&mut Student> {
        self.users.iter_mut().find_map(|u| match u {
            User::Student(s) if s.username == username => Some(s),
            _ => None,
        })
    }
}

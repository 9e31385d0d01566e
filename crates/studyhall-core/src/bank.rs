//! The exam bank.
//!
//! Owns every [`Exam`] and the "EXAM" identifier sequence. Exams are seeded
//! at startup and immutable afterwards; there is no admin tooling to create
//! or edit them. Lookup is first-match in creation order, which encodes the
//! one-exam-per-subject assumption — the seed loader is the only write path
//! and rejects a second exam for the same subject.

use crate::ids::IdSequence;
use crate::model::{Exam, Question};

/// The owned collection of exams and their questions.
#[derive(Debug)]
pub struct ExamBank {
    exams: Vec<Exam>,
    exam_ids: IdSequence,
}

impl Default for ExamBank {
    fn default() -> Self {
        Self::new()
    }
}

impl ExamBank {
    pub fn new() -> Self {
        Self {
            exams: Vec::new(),
            exam_ids: IdSequence::new("EXAM", 1),
        }
    }

    /// Add an exam for a subject, allocating its identifier.
    pub fn add_exam(
        &mut self,
        subject_id: &str,
        subject_name: &str,
        questions: Vec<Question>,
    ) -> &Exam {
        let exam = Exam {
            id: self.exam_ids.next_id(),
            subject_id: subject_id.to_string(),
            subject_name: subject_name.to_string(),
            questions,
        };
        tracing::debug!(exam_id = %exam.id, subject_id, "exam added");
        let index = self.exams.len();
        self.exams.push(exam);
        &self.exams[index]
    }

    /// The first exam (in creation order) for the given subject.
    pub fn find_exam(&self, subject_id: &str) -> Option<&Exam> {
        self.exams.iter().find(|e| e.subject_id == subject_id)
    }

    /// Number of questions in the subject's exam, if one exists.
    pub fn question_count(&self, subject_id: &str) -> Option<usize> {
        self.find_exam(subject_id).map(|e| e.questions.len())
    }

    /// All exams in creation order.
    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }
}

//! The exam-taking protocol.
//!
//! A session walks one student through one exam: eligibility, selection,
//! the retake gate, the question loop, and the final score commit. The
//! session never talks to the console directly — answers come from an
//! [`AnswerSource`] and progress goes to a [`SessionReporter`], so prompt
//! text stays with the presentation layer and tests can script both ends.

use crate::bank::ExamBank;
use crate::error::{ReadError, SessionError};
use crate::model::{Exam, Question, Student};

/// Input collaborator: yields one integer answer per call.
///
/// `ReadError::Format` marks non-numeric input and is recoverable (the
/// session re-asks the same question); `ReadError::Closed` aborts the
/// session without committing anything.
pub trait AnswerSource {
    fn read_answer(&mut self) -> Result<i64, ReadError>;
}

/// Output collaborator: receives session events. The session never depends
/// on any of these calls succeeding or doing anything.
pub trait SessionReporter {
    /// A question is being presented; `number` is 1-based.
    fn question(&mut self, number: usize, total: usize, question: &Question);
    /// The last answer was non-numeric or out of range; the same question
    /// will be asked again.
    fn invalid_answer(&mut self, option_count: usize);
    /// The last answer was correct.
    fn correct(&mut self);
    /// The last answer was wrong; reveals the zero-based correct index and
    /// its option text.
    fn incorrect(&mut self, correct_index: usize, correct_text: &str);
}

/// A validated subject choice. Only [`ExamSession::select`] can mint one,
/// so the question loop can never index outside the eligible list.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    index: usize,
}

/// The committed outcome of a completed exam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamScore {
    pub subject_id: String,
    pub subject_name: String,
    /// Count of correctly answered questions.
    pub correct: u32,
    /// Total number of questions asked.
    pub total: usize,
}

/// One exam-taking session for one student.
#[derive(Debug)]
pub struct ExamSession<'a> {
    student: &'a mut Student,
    eligible: Vec<&'a Exam>,
}

impl<'a> ExamSession<'a> {
    /// Start a session: collect the student's enrolled subjects that have an
    /// exam in the bank, in enrollment order.
    pub fn begin(student: &'a mut Student, bank: &'a ExamBank) -> Result<Self, SessionError> {
        let eligible: Vec<&Exam> = student
            .enrolled_subjects()
            .iter()
            .filter_map(|subject_id| bank.find_exam(subject_id))
            .collect();
        if eligible.is_empty() {
            return Err(SessionError::NoEligibleSubjects);
        }
        Ok(Self { student, eligible })
    }

    /// The exams the student may sit, in enrollment order.
    pub fn eligible(&self) -> &[&'a Exam] {
        &self.eligible
    }

    /// Validate a 1-based subject choice.
    pub fn select(&self, choice: i64) -> Result<Selection, SessionError> {
        let count = self.eligible.len();
        if choice < 1 || choice > count as i64 {
            return Err(SessionError::SelectionOutOfRange { choice, count });
        }
        Ok(Selection {
            index: (choice - 1) as usize,
        })
    }

    /// The exam behind a validated selection.
    pub fn exam(&self, selection: Selection) -> &'a Exam {
        self.eligible[selection.index]
    }

    /// The score already on record for the selected subject, if the student
    /// has completed this exam before. Callers must obtain an explicit
    /// affirmative before retaking; cancelling leaves all state untouched.
    pub fn previous_score(&self, selection: Selection) -> Option<u32> {
        self.student.score(&self.exam(selection).subject_id)
    }

    /// Run the question loop and commit the final score.
    ///
    /// Questions are asked strictly in stored order, exactly once each.
    /// Non-numeric or out-of-range answers re-ask the same question without
    /// counting as wrong. After the last question the score is written into
    /// the student's record, overwriting any prior value for the subject.
    pub fn take(
        self,
        selection: Selection,
        answers: &mut dyn AnswerSource,
        reporter: &mut dyn SessionReporter,
    ) -> Result<ExamScore, SessionError> {
        let exam = self.eligible[selection.index];
        let total = exam.questions.len();
        let mut correct = 0u32;

        for (i, question) in exam.questions.iter().enumerate() {
            reporter.question(i + 1, total, question);
            let answer = loop {
                match answers.read_answer() {
                    Ok(n) if n >= 1 && n <= question.options.len() as i64 => {
                        break (n - 1) as usize;
                    }
                    Ok(_) | Err(ReadError::Format) => {
                        reporter.invalid_answer(question.options.len());
                    }
                    Err(ReadError::Closed) => return Err(SessionError::InputClosed),
                }
            };
            if question.is_correct(answer) {
                correct += 1;
                reporter.correct();
            } else {
                reporter.incorrect(question.correct, &question.options[question.correct]);
            }
        }

        self.student.record_score(&exam.subject_id, correct);
        tracing::info!(
            student_id = %self.student.student_id,
            subject_id = %exam.subject_id,
            score = correct,
            total,
            "exam score recorded"
        );
        Ok(ExamScore {
            subject_id: exam.subject_id.clone(),
            subject_name: exam.subject_name.clone(),
            correct,
            total,
        })
    }
}

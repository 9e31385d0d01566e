//! Pass/fail reporting over recorded exam scores.
//!
//! A read-only join: each entry in a student's score map is resolved against
//! the catalog (for the subject name) and the exam bank (for the question
//! count), then classified against the 60% threshold. A subject whose exam
//! has since vanished from the bank is reported as [`Verdict::NoExam`]
//! rather than trivially passing against a zero question count.

use crate::bank::ExamBank;
use crate::catalog::Catalog;
use crate::model::Student;

/// The pass threshold: 60% of the exam's questions.
pub const PASS_THRESHOLD: f64 = 0.6;

/// Classification of one recorded score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
    /// The bank holds no exam for the subject, so there is nothing to
    /// measure the score against.
    NoExam,
}

/// One row of a student's results report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectResult {
    pub subject_id: String,
    /// Resolved through the catalog; `None` when the subject no longer
    /// exists there (rendered as "Unknown Subject").
    pub subject_name: Option<String>,
    /// The recorded score.
    pub score: u32,
    /// Question count of the subject's exam, when one exists.
    pub out_of: Option<usize>,
    pub verdict: Verdict,
}

/// Classify a score against an exam's question count.
pub fn classify(score: u32, out_of: usize) -> Verdict {
    if f64::from(score) >= PASS_THRESHOLD * out_of as f64 {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

/// Build the results report for one student, one row per recorded score.
pub fn report(student: &Student, catalog: &Catalog, bank: &ExamBank) -> Vec<SubjectResult> {
    student
        .scores()
        .iter()
        .map(|(subject_id, &score)| {
            let subject_name = catalog.subject_name(subject_id).map(str::to_string);
            let out_of = bank.question_count(subject_id);
            let verdict = match out_of {
                Some(total) => classify(score, total),
                None => Verdict::NoExam,
            };
            SubjectResult {
                subject_id: subject_id.clone(),
                subject_name,
                score,
                out_of,
                verdict,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::directory::{Directory, NewStudent};
    use crate::model::Question;

    use super::*;

    fn question() -> Question {
        Question {
            text: "?".into(),
            options: vec!["a".into(), "b".into()],
            correct: 0,
        }
    }

    #[test]
    fn threshold_is_sixty_percent() {
        assert_eq!(classify(3, 5), Verdict::Pass);
        assert_eq!(classify(2, 5), Verdict::Fail);
        assert_eq!(classify(5, 5), Verdict::Pass);
        assert_eq!(classify(0, 5), Verdict::Fail);
        // Exactly on the boundary passes: 6/10 == 0.6 * 10.
        assert_eq!(classify(6, 10), Verdict::Pass);
        assert_eq!(classify(0, 0), Verdict::Pass);
    }

    #[test]
    fn report_joins_names_counts_and_verdicts() {
        let mut catalog = Catalog::new();
        let course_id = catalog.add_course("Java Programming").unwrap().id.clone();
        let subject_id = catalog
            .add_subject(&course_id, "Core Java")
            .unwrap()
            .id
            .clone();

        let mut bank = ExamBank::new();
        bank.add_exam(&subject_id, "Core Java", vec![question(); 5]);

        let mut directory = Directory::new();
        directory
            .register_student(NewStudent {
                name: "Alice Smith".into(),
                age: 20,
                email: "alice@example.com".into(),
                username: "alice".into(),
                password: "pass123".into(),
            })
            .unwrap();
        let student = directory.student_mut("alice").unwrap();
        student.record_score(&subject_id, 3);
        let student = directory.find_student("STU1000").unwrap();

        let rows = report(student, &catalog, &bank);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].subject_name.as_deref(), Some("Core Java"));
        assert_eq!(rows[0].score, 3);
        assert_eq!(rows[0].out_of, Some(5));
        assert_eq!(rows[0].verdict, Verdict::Pass);
    }

    #[test]
    fn unknown_subject_and_missing_exam_are_surfaced() {
        let catalog = Catalog::new();
        let bank = ExamBank::new();

        let mut directory = Directory::new();
        directory
            .register_student(NewStudent {
                name: "Alice Smith".into(),
                age: 20,
                email: "alice@example.com".into(),
                username: "alice".into(),
                password: "pass123".into(),
            })
            .unwrap();
        let student = directory.student_mut("alice").unwrap();
        student.record_score("SUB404", 4);
        let student = directory.find_student("STU1000").unwrap();

        let rows = report(student, &catalog, &bank);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].subject_name, None);
        assert_eq!(rows[0].out_of, None);
        assert_eq!(rows[0].verdict, Verdict::NoExam);
    }

    #[test]
    fn empty_score_map_yields_empty_report() {
        let catalog = Catalog::new();
        let bank = ExamBank::new();
        let mut directory = Directory::new();
        directory
            .register_student(NewStudent {
                name: "Bob Johnson".into(),
                age: 22,
                email: "bob@example.com".into(),
                username: "bob".into(),
                password: "pass456".into(),
            })
            .unwrap();
        let student = directory.find_student("STU1000").unwrap();
        assert!(report(student, &catalog, &bank).is_empty());
    }
}

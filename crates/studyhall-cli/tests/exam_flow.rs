//! End-to-end exam-taking flows against the built-in seed roster.
//!
//! The seeded Core Java exam's correct options are, zero-based,
//! {0, 1, 1, 2, 2} — so the 1-based answers {1, 2, 2, 3, 3} score 5/5.

use assert_cmd::Command;
use predicates::prelude::*;

fn studyhall() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("studyhall").unwrap()
}

#[test]
fn perfect_exam_passes() {
    let script = "1\nalice\npass123\n\
                  3\n1\n1\n2\n2\n3\n3\n\
                  4\n5\n3\n";
    studyhall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Starting exam: Core Java ---"))
        .stdout(predicate::str::contains("Total questions: 5"))
        .stdout(predicate::str::contains("Final score for Core Java: 5/5"))
        .stdout(predicate::str::contains("PASS"));
}

#[test]
fn one_correct_answer_fails() {
    // Question 1's correct option is 1; answering 1 everywhere scores 1/5.
    let script = "1\nalice\npass123\n\
                  3\n1\n1\n1\n1\n1\n1\n\
                  4\n5\n3\n";
    studyhall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Final score for Core Java: 1/5"))
        .stdout(predicate::str::contains("FAIL"));
}

#[test]
fn wrong_answers_reveal_the_correct_option() {
    let script = "1\nalice\npass123\n\
                  3\n1\n2\n2\n2\n3\n3\n\
                  5\n3\n";
    studyhall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Incorrect. The correct answer was: 1. To hide implementation details",
        ))
        .stdout(predicate::str::contains("Final score for Core Java: 4/5"));
}

#[test]
fn invalid_answers_retry_the_same_question() {
    // "zero", 0, and 9 are all rejected before the valid answer lands; the
    // score is unaffected by the rejected attempts.
    let script = "1\nalice\npass123\n\
                  3\n1\nzero\n0\n9\n1\n2\n2\n3\n3\n\
                  5\n3\n";
    studyhall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Enter a number between 1 and 4:",
        ))
        .stdout(predicate::str::contains("Final score for Core Java: 5/5"));
}

#[test]
fn retake_shows_previous_score_and_overwrites_it() {
    let script = "1\nalice\npass123\n\
                  3\n1\n1\n1\n1\n1\n1\n\
                  3\n1\nyes\n1\n2\n2\n3\n3\n\
                  4\n5\n3\n";
    studyhall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You have already taken the exam for Core Java.",
        ))
        .stdout(predicate::str::contains("Previous score: 1/5"))
        .stdout(predicate::str::contains("Final score for Core Java: 5/5"))
        .stdout(predicate::str::contains("PASS"));
}

#[test]
fn declining_a_retake_keeps_the_old_score() {
    let script = "1\nalice\npass123\n\
                  3\n1\n1\n1\n1\n1\n1\n\
                  3\n1\nno\n\
                  4\n5\n3\n";
    studyhall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exam retake cancelled."))
        .stdout(predicate::str::contains("1/5"))
        .stdout(predicate::str::contains("FAIL"));
}

#[test]
fn selection_out_of_range_aborts_the_session() {
    let script = "1\nalice\npass123\n3\n9\n5\n3\n";
    studyhall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("selection 9 is out of range 1..=1"));
}

#[test]
fn non_numeric_selection_aborts_the_session() {
    let script = "1\nalice\npass123\n3\nx\n5\n3\n";
    studyhall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter a number."));
}

#[test]
fn student_without_exam_subjects_is_turned_away() {
    let script = "2\nNew Kid\n20\nkid@example.com\nkid\npw\n\
                  1\nkid\npw\n3\n5\n3\n";
    studyhall()
        .arg("--empty")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You are not enrolled in any subject with an available exam.",
        ));
}

#[test]
fn results_follow_the_student_to_the_admin_view() {
    let script = "1\nalice\npass123\n\
                  3\n1\n1\n2\n2\n3\n3\n\
                  5\n\
                  1\nadmin\nadmin123\n\
                  4\nSTU1000\n\
                  5\n3\n";
    studyhall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Exam results for Alice Smith (STU1000)",
        ))
        .stdout(predicate::str::contains("5/5"))
        .stdout(predicate::str::contains("PASS"));
}

#[test]
fn exam_interrupted_by_eof_commits_nothing() {
    // Input ends after two answers; the process exits cleanly without ever
    // reaching the commit step.
    let script = "1\nalice\npass123\n3\n1\n1\n2\n";
    studyhall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 3 of 5:"))
        .stdout(predicate::str::contains("Final score").not())
        .stdout(predicate::str::contains("Your result has been saved.").not());
}

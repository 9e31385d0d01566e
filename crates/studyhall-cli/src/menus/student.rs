//! The student menu.

use std::io::{self, Write};

use studyhall_core::enrollment::Enrollment;
use studyhall_core::error::{ReadError, SessionError};
use studyhall_core::model::Question;
use studyhall_core::school::School;
use studyhall_core::session::{ExamSession, SessionReporter};

use crate::console::Console;
use crate::render;

use super::print_student_results;

pub fn run(school: &mut School, console: &mut Console, username: &str) -> Result<(), ReadError> {
    loop {
        println!("\n--- Student Menu ---");
        println!("1. View available courses");
        println!("2. Enroll in a course");
        println!("3. Take an exam");
        println!("4. View my results");
        println!("5. Log out");
        let choice = console.menu_choice("Enter your choice: ")?;
        match choice {
            1 => view_courses(school),
            2 => enroll(school, console, username)?,
            3 => take_exam(school, console, username)?,
            4 => view_my_results(school, username),
            5 => {
                println!("Logged out.");
                return Ok(());
            }
            _ => println!("Invalid choice. Enter a number between 1 and 5."),
        }
    }
}

fn view_courses(school: &School) {
    if school.catalog.courses().is_empty() {
        println!("No courses available at the moment.");
        return;
    }
    println!("{}", render::courses_table(school.catalog.courses()));
}

fn enroll(school: &mut School, console: &mut Console, username: &str) -> Result<(), ReadError> {
    if school.catalog.courses().is_empty() {
        println!("No courses available to enroll in. Ask an admin to add some.");
        return Ok(());
    }

    println!();
    for (i, course) in school.catalog.courses().iter().enumerate() {
        println!("{}. {} (ID: {})", i + 1, course.name, course.id);
        for subject in course.subjects() {
            println!("     - {} (ID: {})", subject.name, subject.id);
        }
    }
    let choice = match console.prompt_int("Select a course to enroll in: ") {
        Ok(n) => n,
        Err(ReadError::Format) => {
            println!("Invalid input. Please enter a number.");
            return Ok(());
        }
        Err(ReadError::Closed) => return Err(ReadError::Closed),
    };
    let count = school.catalog.courses().len();
    if choice < 1 || choice > count as i64 {
        println!("Invalid course selection.");
        return Ok(());
    }
    // Detach the course data from the catalog borrow before mutating the
    // student record.
    let course = school.catalog.courses()[(choice - 1) as usize].clone();

    let Some(student) = school.directory.student_mut(username) else {
        return Ok(());
    };
    match student.enroll_course(&course.id) {
        Enrollment::Enrolled => println!("Enrolled in course '{}'.", course.name),
        Enrollment::AlreadyEnrolled => {
            println!("Already enrolled in course '{}'.", course.name);
        }
    }

    if course.subjects().is_empty() {
        println!("'{}' has no subjects yet.", course.name);
        return Ok(());
    }

    loop {
        println!("\nSubjects in {}:", course.name);
        for (i, subject) in course.subjects().iter().enumerate() {
            println!("{}. {} (ID: {})", i + 1, subject.name, subject.id);
        }
        let input = console.prompt_line(
            "Enter subject numbers to enroll in (space-separated), or 0 to finish: ",
        )?;
        if input == "0" {
            println!("Finished subject selection.");
            return Ok(());
        }

        let mut tokens_ok = true;
        let mut picks = Vec::new();
        for token in input.split_whitespace() {
            match token.parse::<usize>() {
                Ok(n) => picks.push(n),
                Err(_) => {
                    tokens_ok = false;
                    break;
                }
            }
        }
        if !tokens_ok || picks.is_empty() {
            println!("Invalid input. Enter numbers separated by spaces, or 0.");
            continue;
        }

        let Some(student) = school.directory.student_mut(username) else {
            return Ok(());
        };
        for pick in picks {
            match pick.checked_sub(1).and_then(|i| course.subjects().get(i)) {
                Some(subject) => match student.enroll_subject(&subject.id) {
                    Enrollment::Enrolled => {
                        println!("Enrolled in subject '{}'.", subject.name);
                    }
                    Enrollment::AlreadyEnrolled => {
                        println!("Already enrolled in subject '{}'.", subject.name);
                    }
                },
                None => println!("Ignoring invalid subject number {pick}."),
            }
        }
    }
}

/// Prints questions and feedback for an interactive exam.
struct ConsoleReporter;

impl SessionReporter for ConsoleReporter {
    fn question(&mut self, number: usize, total: usize, question: &Question) {
        println!("\nQuestion {number} of {total}:");
        println!("{}", question.text);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }
        print!("Enter your answer (1-{}): ", question.options.len());
        let _ = io::stdout().flush();
    }

    fn invalid_answer(&mut self, option_count: usize) {
        print!("Invalid input. Enter a number between 1 and {option_count}: ");
        let _ = io::stdout().flush();
    }

    fn correct(&mut self) {
        println!("Correct!");
    }

    fn incorrect(&mut self, correct_index: usize, correct_text: &str) {
        println!(
            "Incorrect. The correct answer was: {}. {correct_text}",
            correct_index + 1
        );
    }
}

fn take_exam(school: &mut School, console: &mut Console, username: &str) -> Result<(), ReadError> {
    let Some(student) = school.directory.student_mut(username) else {
        return Ok(());
    };
    let session = match ExamSession::begin(student, &school.bank) {
        Ok(session) => session,
        Err(SessionError::NoEligibleSubjects) => {
            println!("You are not enrolled in any subject with an available exam.");
            println!("Enroll in subjects first, or wait for an exam to be added.");
            return Ok(());
        }
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    println!("\n--- Subjects with available exams ---");
    for (i, exam) in session.eligible().iter().enumerate() {
        println!("{}. {}", i + 1, exam.subject_name);
    }
    let choice = match console.prompt_int("Select a subject: ") {
        Ok(n) => n,
        Err(ReadError::Format) => {
            println!("Invalid input. Please enter a number.");
            return Ok(());
        }
        Err(ReadError::Closed) => return Err(ReadError::Closed),
    };
    let selection = match session.select(choice) {
        Ok(selection) => selection,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    let exam = session.exam(selection);
    let subject_name = exam.subject_name.clone();
    let total = exam.questions.len();
    if let Some(previous) = session.previous_score(selection) {
        println!("You have already taken the exam for {subject_name}.");
        println!("Previous score: {previous}/{total}");
        let answer = console.prompt_line("Retake the exam? (yes/no): ")?;
        if !answer.eq_ignore_ascii_case("yes") {
            println!("Exam retake cancelled.");
            return Ok(());
        }
    }

    println!("\n--- Starting exam: {subject_name} ---");
    println!("Total questions: {total}");
    match session.take(selection, console, &mut ConsoleReporter) {
        Ok(score) => {
            println!("\n--- Exam completed ---");
            println!(
                "Final score for {}: {}/{}",
                score.subject_name, score.correct, score.total
            );
            println!("Your result has been saved.");
            Ok(())
        }
        Err(SessionError::InputClosed) => Err(ReadError::Closed),
        Err(e) => {
            println!("{e}");
            Ok(())
        }
    }
}

fn view_my_results(school: &School, username: &str) {
    if let Some(student) = school.directory.students().find(|s| s.username == username) {
        print_student_results(student, &school.catalog, &school.bank);
    }
}

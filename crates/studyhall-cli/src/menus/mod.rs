//! Interactive menu loops.
//!
//! Every function here returns `Result<(), ReadError>`; the only error that
//! propagates is [`ReadError::Closed`], which unwinds to `main` for a clean
//! exit. Recoverable conditions are printed and re-prompted in place.

use studyhall_core::bank::ExamBank;
use studyhall_core::catalog::Catalog;
use studyhall_core::directory::NewStudent;
use studyhall_core::error::ReadError;
use studyhall_core::model::{Student, User};
use studyhall_core::results;
use studyhall_core::school::School;

use crate::console::Console;
use crate::render;

pub mod admin;
pub mod student;

/// The login/register/exit loop. Returns when the user exits.
pub fn top_level(school: &mut School, console: &mut Console) -> Result<(), ReadError> {
    loop {
        println!("\n=== Studyhall ===");
        println!("1. Log in");
        println!("2. Register as a student");
        println!("3. Exit");
        let choice = console.menu_choice("Enter your choice: ")?;
        match choice {
            1 => login(school, console)?,
            2 => register(school, console)?,
            3 => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice. Enter 1, 2, or 3."),
        }
    }
}

/// Role resolved by a successful login, detached from the directory borrow.
enum Login {
    Admin { name: String },
    Student { username: String },
    Denied,
}

fn login(school: &mut School, console: &mut Console) -> Result<(), ReadError> {
    let username = console.prompt_line("Username: ")?;
    let password = console.prompt_line("Password: ")?;

    let outcome = match school.directory.authenticate(&username, &password) {
        Ok(User::Admin(a)) => Login::Admin {
            name: a.name.clone(),
        },
        Ok(User::Student(s)) => Login::Student {
            username: s.username.clone(),
        },
        Err(e) => {
            println!("{e}");
            Login::Denied
        }
    };

    match outcome {
        Login::Admin { name } => {
            println!("Login successful. Welcome, {name}!");
            admin::run(school, console)
        }
        Login::Student { username } => {
            greet_student(school, &username);
            student::run(school, console, &username)
        }
        Login::Denied => Ok(()),
    }
}

fn greet_student(school: &School, username: &str) {
    if let Some(student) = school.directory.students().find(|s| s.username == username) {
        println!(
            "Login successful. Welcome, {} ({})!",
            student.name, student.student_id
        );
    }
}

fn register(school: &mut School, console: &mut Console) -> Result<(), ReadError> {
    let name = console.prompt_line("Full name: ")?;

    let age = loop {
        match console.prompt_int("Age: ") {
            Ok(n) if (1..=100).contains(&n) => break n as u32,
            Ok(_) => println!("Age must be between 1 and 100."),
            Err(ReadError::Format) => {
                println!("Invalid input. Please enter a numerical age.");
            }
            Err(ReadError::Closed) => return Err(ReadError::Closed),
        }
    };

    let email = console.prompt_line("Email address: ")?;

    let username = loop {
        let candidate = console.prompt_line("Choose a username: ")?;
        if school.directory.is_username_taken(&candidate) {
            println!("That username is already taken. Choose another.");
        } else {
            break candidate;
        }
    };

    let password = console.prompt_line("Choose a password: ")?;

    match school.directory.register_student(NewStudent {
        name: name.clone(),
        age,
        email,
        username,
        password,
    }) {
        Ok(student) => {
            println!("\nStudent '{}' registered successfully.", student.name);
            println!("Your student ID is: {}", student.student_id);
            println!(
                "You can now log in with username '{}' and your chosen password.",
                student.username
            );
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// Shared by the admin results view and the student's own results view.
pub(crate) fn print_student_results(student: &Student, catalog: &Catalog, bank: &ExamBank) {
    println!(
        "\n--- Exam results for {} ({}) ---",
        student.name, student.student_id
    );
    let rows = results::report(student, catalog, bank);
    if rows.is_empty() {
        println!("No exam results recorded for {} yet.", student.name);
    } else {
        println!("{}", render::results_table(&rows));
    }
}

//! The administrator menu.

use studyhall_core::error::ReadError;
use studyhall_core::school::School;

use crate::console::Console;
use crate::render;

use super::print_student_results;

pub fn run(school: &mut School, console: &mut Console) -> Result<(), ReadError> {
    loop {
        println!("\n--- Admin Menu ---");
        println!("1. Add course");
        println!("2. Manage course subjects");
        println!("3. View registered students");
        println!("4. View student exam results");
        println!("5. Log out");
        let choice = console.menu_choice("Enter your choice: ")?;
        match choice {
            1 => add_course(school, console)?,
            2 => manage_subjects(school, console)?,
            3 => view_students(school),
            4 => view_results(school, console)?,
            5 => {
                println!("Logged out.");
                return Ok(());
            }
            _ => println!("Invalid choice. Enter a number between 1 and 5."),
        }
    }
}

fn add_course(school: &mut School, console: &mut Console) -> Result<(), ReadError> {
    let name = console.prompt_line("Course name: ")?;
    match school.catalog.add_course(&name) {
        Ok(course) => println!("Course '{}' (ID: {}) added.", course.name, course.id),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn manage_subjects(school: &mut School, console: &mut Console) -> Result<(), ReadError> {
    if school.catalog.courses().is_empty() {
        println!("No courses available yet. Add a course first.");
        return Ok(());
    }

    println!();
    for (i, course) in school.catalog.courses().iter().enumerate() {
        println!("{}. {} (ID: {})", i + 1, course.name, course.id);
    }
    let choice = match console.prompt_int("Select a course: ") {
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
    let course_id = school.catalog.courses()[(choice - 1) as usize].id.clone();

    loop {
        let Some(course) = school.catalog.course(&course_id) else {
            return Ok(());
        };
        let course_name = course.name.clone();
        println!("\n--- Managing {course_name} ---");
        println!("1. Add subject");
        println!("2. Remove subject");
        println!("3. List subjects");
        println!("4. Back");
        let action = console.menu_choice("Enter your choice: ")?;
        match action {
            1 => {
                let name = console.prompt_line("Subject name: ")?;
                match school.catalog.add_subject(&course_id, &name) {
                    Ok(subject) => println!(
                        "Subject '{}' (ID: {}) added to '{course_name}'.",
                        subject.name, subject.id
                    ),
                    Err(e) => println!("{e}"),
                }
            }
            2 => {
                let subjects = match school.catalog.course(&course_id) {
                    Some(c) if !c.subjects().is_empty() => c.subjects().to_vec(),
                    _ => {
                        println!("No subjects in '{course_name}'.");
                        continue;
                    }
                };
                println!("{}", render::subjects_table(&subjects));
                let subject_id = console.prompt_line("Subject ID to remove: ")?;
                match school.catalog.remove_subject(&course_id, &subject_id) {
                    Ok(subject) => println!("Subject '{}' removed.", subject.name),
                    Err(e) => println!("{e}"),
                }
            }
            3 => match school.catalog.course(&course_id) {
                Some(c) if !c.subjects().is_empty() => {
                    println!("{}", render::subjects_table(c.subjects()));
                }
                _ => println!("No subjects in '{course_name}'."),
            },
            4 => return Ok(()),
            _ => println!("Invalid choice. Enter a number between 1 and 4."),
        }
    }
}

fn view_students(school: &School) {
    if school.directory.students().next().is_none() {
        println!("No students registered yet.");
        return;
    }
    println!(
        "{}",
        render::students_table(school.directory.students(), &school.catalog)
    );
}

fn view_results(school: &School, console: &mut Console) -> Result<(), ReadError> {
    if school.directory.students().next().is_none() {
        println!("No students registered yet.");
        return Ok(());
    }

    println!("\n--- Registered students ---");
    for student in school.directory.students() {
        println!("ID: {}  Name: {}", student.student_id, student.name);
    }
    let input = console.prompt_line("Student ID to view (or 'all'): ")?;

    if input.eq_ignore_ascii_case("all") {
        for student in school.directory.students() {
            print_student_results(student, &school.catalog, &school.bank);
        }
    } else {
        match school.directory.find_student(&input) {
            Ok(student) => print_student_results(student, &school.catalog, &school.bank),
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}

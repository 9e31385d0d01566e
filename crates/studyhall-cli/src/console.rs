//! Console input.
//!
//! All reads funnel through [`Console`], which turns end-of-input into
//! [`ReadError::Closed`] so every menu loop can unwind to a clean process
//! exit instead of spinning on a dead stdin.

use std::io::{self, BufRead, Write};

use studyhall_core::error::ReadError;
use studyhall_core::session::AnswerSource;

/// Line-oriented input over stdin (or any buffered reader, for tests).
pub struct Console {
    input: Box<dyn BufRead>,
}

impl Console {
    /// A console reading from the process's stdin.
    pub fn stdin() -> Self {
        Self {
            input: Box::new(io::BufReader::new(io::stdin())),
        }
    }

    #[cfg(test)]
    fn from_script(script: &str) -> Self {
        Self {
            input: Box::new(io::Cursor::new(script.to_string())),
        }
    }

    fn read_trimmed_line(&mut self) -> Result<String, ReadError> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(ReadError::Closed),
            Ok(_) => Ok(line.trim().to_string()),
        }
    }

    /// Print a prompt (no trailing newline) and read one line.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, ReadError> {
        print!("{prompt}");
        let _ = io::stdout().flush();
        self.read_trimmed_line()
    }

    /// Print a prompt and read one integer. Non-numeric input is a
    /// recoverable [`ReadError::Format`]; the caller decides whether to
    /// re-prompt or abort.
    pub fn prompt_int(&mut self, prompt: &str) -> Result<i64, ReadError> {
        let line = self.prompt_line(prompt)?;
        line.parse::<i64>().map_err(|_| ReadError::Format)
    }

    /// Menu choice: re-prompt on non-numeric input until a number arrives.
    pub fn menu_choice(&mut self, prompt: &str) -> Result<i64, ReadError> {
        loop {
            match self.prompt_int(prompt) {
                Ok(n) => return Ok(n),
                Err(ReadError::Format) => {
                    println!("Invalid input. Please enter a number.");
                }
                Err(ReadError::Closed) => return Err(ReadError::Closed),
            }
        }
    }
}

impl AnswerSource for Console {
    // The question prompt is printed by the session reporter; this only
    // consumes the answer line.
    fn read_answer(&mut self) -> Result<i64, ReadError> {
        let line = self.read_trimmed_line()?;
        line.parse::<i64>().map_err(|_| ReadError::Format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace_from_lines() {
        let mut console = Console::from_script("  hello  \n");
        assert_eq!(console.prompt_line("> ").unwrap(), "hello");
    }

    #[test]
    fn eof_reports_closed() {
        let mut console = Console::from_script("");
        assert_eq!(console.prompt_line("> ").unwrap_err(), ReadError::Closed);
    }

    #[test]
    fn non_numeric_input_is_a_format_error() {
        let mut console = Console::from_script("seven\n7\n");
        assert_eq!(console.prompt_int("> ").unwrap_err(), ReadError::Format);
        assert_eq!(console.prompt_int("> ").unwrap(), 7);
    }

    #[test]
    fn menu_choice_skips_non_numeric_lines() {
        let mut console = Console::from_script("abc\n\n3\n");
        assert_eq!(console.menu_choice("> ").unwrap(), 3);
    }

    #[test]
    fn answers_parse_like_integers() {
        let mut console = Console::from_script("2\nnope\n");
        assert_eq!(console.read_answer().unwrap(), 2);
        assert_eq!(console.read_answer().unwrap_err(), ReadError::Format);
        assert_eq!(console.read_answer().unwrap_err(), ReadError::Closed);
    }
}

//! studyhall CLI — the interactive console front-end.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use studyhall_core::error::ReadError;
use studyhall_core::school::School;
use studyhall_core::seed;

mod console;
mod menus;
mod render;

use console::Console;

#[derive(Parser)]
#[command(
    name = "studyhall",
    version,
    about = "Console student management and examination tool"
)]
struct Cli {
    /// Path to a TOML seed file (defaults to the built-in roster)
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Start with no seeded users, courses, or exams
    #[arg(long, conflicts_with = "seed")]
    empty: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("studyhall=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut school = if cli.empty {
        School::new()
    } else if let Some(path) = &cli.seed {
        let mut school = School::new();
        seed::load_seed(path)?.apply(&mut school)?;
        school
    } else {
        seed::default_school()?
    };
    tracing::debug!(
        courses = school.catalog.courses().len(),
        exams = school.bank.exams().len(),
        "school initialized"
    );

    let mut console = Console::stdin();
    match menus::top_level(&mut school, &mut console) {
        Ok(()) => Ok(()),
        // End of input anywhere is a clean exit, not an error.
        Err(ReadError::Closed) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

//! Interactive read-eval-print loop.
//!
//! Reads one command per line, executes it against the book, and prints
//! the reply. The loop owns all terminal I/O; command semantics live in
//! [`crate::commands`].

use crate::book::AddressBook;
use crate::commands::{self, Command};
use crate::config::Config;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};

/// Run the assistant bot over stdin/stdout until `exit`/`close` or EOF.
pub fn run(book: &mut AddressBook, config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let today = Local::now().date_naive();
    run_with(
        stdin.lock(),
        stdout.lock(),
        book,
        config.birthday_window_days as i64,
        today,
    )
}

/// Drive the loop over an arbitrary reader/writer pair.
///
/// Split out from [`run`] so tests can feed scripted input and capture
/// the output.
pub fn run_with<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    book: &mut AddressBook,
    window_days: i64,
    today: NaiveDate,
) -> io::Result<()> {
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF (Ctrl+D): finish the prompt line and say goodbye.
            writeln!(output)?;
            writeln!(output, "Good bye!")?;
            break;
        }

        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            // Blank line, prompt again.
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        let Ok(command) = verb.parse::<Command>() else {
            writeln!(output, "Invalid command.")?;
            continue;
        };

        let reply = commands::execute(command, &args, book, window_days, today);
        writeln!(output, "{}", reply)?;

        if command == Command::Exit {
            break;
        }
    }
    Ok(())
}

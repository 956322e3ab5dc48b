use std::io;
use std::ops::ControlFlow;

use log::info;
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::session::Session;
use crate::DynResult;

pub const BANNER: &str = "Simple Language Interpreter (type 'exit' to quit)";
const PROMPT: &str = ">> ";
const EXIT_COMMAND: &str = "exit";

pub fn run(session: &mut Session) -> DynResult {
    info!("Running in REPL mode");

    let mut rl = DefaultEditor::new()?;
    session.print_line(BANNER)?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }
                if handle_line(session, &line)?.is_break() {
                    break;
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}

/// Evaluates one interactive line and prints its value. Failed lines print
/// `0` after their diagnostic.
pub fn handle_line(session: &mut Session, line: &str) -> io::Result<ControlFlow<()>> {
    if line.trim_end() == EXIT_COMMAND {
        return Ok(ControlFlow::Break(()));
    }

    let value = session.evaluate_line(line);
    session.print_value(value)?;
    Ok(ControlFlow::Continue(()))
}

use std::cell::RefCell;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::rc::Rc;

use log::{debug, error, info, trace};

use crate::error::Error;
use crate::interpret::{self, DisplayNumber, Environment};
use crate::parse;

/// Counts of what happened to the lines of one file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub evaluated: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// One interpreting session: a variable environment shared by every line,
/// plus the channels results and diagnostics are written to.
pub struct Session {
    environment: Environment,
    print_writer: Rc<RefCell<dyn Write>>,
    error_writer: Rc<RefCell<dyn Write>>,
}

impl Session {
    pub fn new(
        print_writer: Rc<RefCell<dyn Write>>,
        error_writer: Rc<RefCell<dyn Write>>,
    ) -> Self {
        Self {
            environment: Environment::new(),
            print_writer,
            error_writer,
        }
    }

    pub fn stdio() -> Self {
        Self::new(
            Rc::new(RefCell::new(io::stdout())),
            Rc::new(RefCell::new(io::stderr())),
        )
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Runs one line through lex, parse and evaluate. Unknown characters are
    /// reported to the error channel but do not fail the line.
    pub fn try_evaluate_line(&mut self, line: &str) -> Result<f64, Error> {
        let lexed = parse::lex(line);
        for err in &lexed.errors {
            self.report(err);
        }

        for li in &lexed.items {
            trace!("{} - {:?}: {:?}", li.span, li.token, li.lexeme);
        }

        let expr = match parse::parse(&lexed.items) {
            Ok(expr) => expr,
            Err(err) => {
                trace!("parse failed at {:?}", err.get_source_start());
                return Err(err.into());
            }
        };
        trace!("{:?}", &expr);

        let value = interpret::evaluate(&expr, &mut self.environment)?;
        debug!("{:?} => {}", line, value);
        Ok(value)
    }

    /// Like `try_evaluate_line`, but reports the error and yields `0` instead.
    pub fn evaluate_line(&mut self, line: &str) -> f64 {
        match self.try_evaluate_line(line) {
            Ok(value) => value,
            Err(err) => {
                error!("Evaluate error: {}", err);
                self.report(format_args!("Error: {}", err));
                0.0
            }
        }
    }

    pub fn print_value(&self, value: f64) -> io::Result<()> {
        writeln!(self.print_writer.borrow_mut(), "{}", DisplayNumber(value))
    }

    pub fn print_line(&self, line: &str) -> io::Result<()> {
        writeln!(self.print_writer.borrow_mut(), "{}", line)
    }

    /// Evaluates every line of `reader`. Blank lines and `#` comments are
    /// skipped but still counted for line numbers.
    pub fn run_reader(&mut self, reader: impl BufRead) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    self.report(format_args!(
                        "Could not read line {}: {}",
                        line_number, err
                    ));
                    break;
                }
            };

            if line.trim().is_empty() || line.starts_with('#') {
                summary.skipped += 1;
                continue;
            }

            match self.try_evaluate_line(&line) {
                Ok(value) => {
                    summary.evaluated += 1;
                    writeln!(
                        self.print_writer.borrow_mut(),
                        "Line {}: {}",
                        line_number,
                        DisplayNumber(value)
                    )?;
                }
                Err(err) => {
                    summary.failed += 1;
                    error!("Evaluate error at line {}: {}", line_number, err);
                    self.report(format_args!("Error at line {}: {}", line_number, err));
                }
            }
        }

        Ok(summary)
    }

    /// Runs a file in this session. A file that cannot be opened is reported
    /// and yields `None`.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> io::Result<Option<RunSummary>> {
        let path = path.as_ref();
        info!("Read from file {}", path.display());

        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                error!("open {} failed: {}", path.display(), err);
                self.report(format_args!("Could not open file: {}", path.display()));
                return Ok(None);
            }
        };

        let summary = self.run_reader(BufReader::new(file))?;
        debug!("{} finished: {:?}", path.display(), summary);
        Ok(Some(summary))
    }

    fn report(&self, message: impl fmt::Display) {
        if let Err(err) = writeln!(self.error_writer.borrow_mut(), "{}", message) {
            error!("writing diagnostic failed: {}", err);
        }
    }
}

use thiserror::Error;

use crate::interpret;
use crate::parse::ParseError;

/// Anything that stops a single line from producing a value.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Interpret(#[from] interpret::Error),
}

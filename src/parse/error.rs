use crate::span::Span;
use thiserror::Error;

/// Recoverable problems found while tokenizing. The lexer skips the offending
/// input and keeps going, so these are collected rather than returned.
#[derive(Debug, Error, PartialEq)]
pub enum LexError {
    #[error("Unknown character: {0}")]
    UnknownCharacter(char, Span),
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Unable to parse `{0}` to number at position {1}")]
    ParseToNumber(String, Span),

    #[error("Number literal `{0}` at position {1} is out of range")]
    NumberOutOfRange(String, Span),

    #[error("Unexpected token: `{0}` at position {1}")]
    UnexpectedToken(String, Span),

    #[error("Expected closing parenthesis for `(` at position {0}, found `{1}` at position {2}")]
    UnclosedParen(Span, String, Span),

    #[error("Unable to parse the next value because of EOF")]
    Eof,
}

impl ParseError {
    pub fn get_source_start(&self) -> Option<usize> {
        use ParseError::*;
        match self {
            ParseToNumber(_, s) => Some(s.start),
            NumberOutOfRange(_, s) => Some(s.start),
            UnexpectedToken(_, s) => Some(s.start),
            UnclosedParen(_, _, s) => Some(s.start),
            Eof => None,
        }
    }
}

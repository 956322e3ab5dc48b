use thiserror::Error;

use crate::token::Token;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Undefined variable: `{0}`")]
    UndefinedVariable(String),

    #[error("Division by zero")]
    DivideByZero,

    #[error("Unknown operator `{0}`")]
    UnknownOperation(Token),
}

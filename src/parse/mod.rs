mod context;
mod error;
mod lex;
mod parser;

pub use error::{LexError, ParseError};
pub use lex::{lex, LexItem, Lexed};
pub use parser::parse;

pub mod ast;
pub mod cli;
mod error;
pub mod interpret;
pub mod parse;
pub mod repl;
pub mod session;
pub mod span;
pub mod token;

pub use error::Error;
pub use session::{RunSummary, Session};

pub type DynResult = Result<(), Box<dyn std::error::Error>>;

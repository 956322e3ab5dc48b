mod environment;
mod error;
mod interpreter;
mod number;

pub use environment::Environment;
pub use error::Error;
pub use interpreter::{evaluate, Interpreter};
pub use number::DisplayNumber;

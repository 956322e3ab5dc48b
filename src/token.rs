use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Token {
    #[display("number")]
    Number,
    #[display("identifier")]
    Identifier,

    #[display("+")]
    Plus,
    #[display("-")]
    Minus,
    #[display("*")]
    Star,
    #[display("/")]
    Slash,

    #[display("(")]
    LeftParen,
    #[display(")")]
    RightParen,

    #[display("=")]
    Equal,

    #[display("end of input")]
    EndOfInput,
}

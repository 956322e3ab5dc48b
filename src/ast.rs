use crate::token::Token;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    BinaryOp(Box<Expression>, Token, Box<Expression>),
    Identifier(String),
    Assign(String, Box<Expression>),
}

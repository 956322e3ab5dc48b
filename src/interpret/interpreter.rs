use super::environment::Environment;
use super::error::Error;
use crate::ast::Expression;
use crate::token::Token;
use log::trace;

pub struct Interpreter<'cl> {
    pub(super) environment: &'cl mut Environment,
}

impl<'cl> Interpreter<'cl> {
    pub fn new(environment: &'cl mut Environment) -> Self {
        Self { environment }
    }

    pub fn interpret(&mut self, expr: &Expression) -> Result<f64, Error> {
        match expr {
            Expression::Number(value) => Ok(*value),
            Expression::BinaryOp(lhs, op, rhs) => self.interpret_binary_op(lhs, *op, rhs),
            Expression::Identifier(name) => self.interpret_identifier(name),
            Expression::Assign(name, value) => self.interpret_assign(name, value),
        }
    }

    fn interpret_binary_op(
        &mut self,
        lhs: &Expression,
        op: Token,
        rhs: &Expression,
    ) -> Result<f64, Error> {
        let lhs_val = self.interpret(lhs)?;
        let rhs_val = self.interpret(rhs)?;
        binary_number(lhs_val, op, rhs_val)
    }

    fn interpret_identifier(&self, name: &str) -> Result<f64, Error> {
        self.environment
            .get(name)
            .ok_or_else(|| Error::UndefinedVariable(name.to_string()))
    }

    fn interpret_assign(&mut self, name: &str, value: &Expression) -> Result<f64, Error> {
        let value = self.interpret(value)?;
        if let Some(old) = self.environment.set(name, value) {
            trace!("{} reassigned from {} to {}", name, old, value);
        }
        Ok(value)
    }
}

fn binary_number(l: f64, op: Token, r: f64) -> Result<f64, Error> {
    let v = match op {
        Token::Plus => l + r,
        Token::Minus => l - r,
        Token::Star => l * r,
        Token::Slash => {
            if r == 0.0 {
                return Err(Error::DivideByZero);
            }
            l / r
        }
        _ => return Err(Error::UnknownOperation(op)),
    };
    Ok(v)
}

/// Evaluates `expr`, reading and assigning variables in `environment`.
pub fn evaluate(expr: &Expression, environment: &mut Environment) -> Result<f64, Error> {
    Interpreter::new(environment).interpret(expr)
}

use crate::token::Token;

use super::error::ParseError;
use super::lex::LexItem;

pub struct Context<'a> {
    items: &'a [LexItem],
    curr_pos: usize,
}

impl<'a> Context<'a> {
    pub fn new(items: &'a [LexItem]) -> Self {
        Self { items, curr_pos: 0 }
    }

    pub fn advance(&mut self) {
        self.curr_pos += 1;
    }

    pub fn peek(&self, match_tokens: &'static [Token]) -> bool {
        self.items
            .get(self.curr_pos)
            .map(|li| match_tokens.contains(&li.token))
            .unwrap_or(false)
    }

    pub fn get_curr(&self) -> Result<&'a LexItem, ParseError> {
        match self.items.get(self.curr_pos) {
            Some(li) => Ok(li),
            None => Err(ParseError::Eof),
        }
    }

    /// Items after the current position that are not the end marker.
    pub fn remaining(&self) -> &'a [LexItem] {
        let rest = self.items.get(self.curr_pos..).unwrap_or(&[]);
        match rest.split_last() {
            Some((last, init)) if last.token == Token::EndOfInput => init,
            _ => rest,
        }
    }
}

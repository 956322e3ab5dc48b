use std::iter::Peekable;
use std::str::CharIndices;

use log::warn;
use phf::phf_map;

use super::error::LexError;
use crate::span::Span;
use crate::token::Token;

static SINGLE_CHAR_TOKENS: phf::Map<char, Token> = phf_map! {
    '+' => Token::Plus,
    '-' => Token::Minus,
    '*' => Token::Star,
    '/' => Token::Slash,
    '(' => Token::LeftParen,
    ')' => Token::RightParen,
    '=' => Token::Equal,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LexItem {
    pub token: Token,
    pub lexeme: String,
    pub span: Span,
}

impl LexItem {
    pub fn new(token: Token, lexeme: impl Into<String>, span: Span) -> Self {
        LexItem {
            token,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Text used when reporting this item, falls back to the token name for
    /// items without source text.
    pub fn describe(&self) -> String {
        if self.lexeme.is_empty() {
            self.token.to_string()
        } else {
            self.lexeme.clone()
        }
    }
}

#[derive(Debug, Default)]
pub struct Lexed {
    pub items: Vec<LexItem>,
    pub errors: Vec<LexError>,
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_identifier_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Tokenizes one line. Always ends with a single `EndOfInput` item; unknown
/// characters are skipped and recorded in `Lexed::errors`.
pub fn lex(input: &str) -> Lexed {
    let mut chars = input.char_indices().peekable();
    let mut result = Lexed::default();

    while let Some(&(offset, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c.is_ascii_digit() {
            chars.next();
            result.items.push(lex_number(input, &mut chars, offset));
        } else if is_identifier_start(c) {
            chars.next();
            result.items.push(lex_identifier(input, &mut chars, offset));
        } else if let Some(token) = SINGLE_CHAR_TOKENS.get(&c) {
            chars.next();
            result
                .items
                .push(LexItem::new(*token, c.to_string(), Span::one(offset)));
        } else {
            chars.next();
            warn!("skipping unknown character {:?} at {}", c, offset);
            result
                .errors
                .push(LexError::UnknownCharacter(c, Span::one(offset)));
        }
    }

    result
        .items
        .push(LexItem::new(Token::EndOfInput, "", Span::end_of(input)));
    result
}

fn consume_while(
    chars: &mut Peekable<CharIndices>,
    mut end: usize,
    pred: impl Fn(char) -> bool,
) -> usize {
    while let Some(&(offset, c)) = chars.peek() {
        if !pred(c) {
            break;
        }
        end = offset;
        chars.next();
    }
    end
}

fn lex_number(input: &str, chars: &mut Peekable<CharIndices>, start_offset: usize) -> LexItem {
    let mut end = consume_while(chars, start_offset, |c| c.is_ascii_digit());
    if let Some(&(offset, '.')) = chars.peek() {
        chars.next();
        end = consume_while(chars, offset, |c| c.is_ascii_digit());
    }

    let span = Span::new(start_offset, end);
    LexItem::new(Token::Number, span.str_from_source(input), span)
}

fn lex_identifier(
    input: &str,
    chars: &mut Peekable<CharIndices>,
    start_offset: usize,
) -> LexItem {
    let end = consume_while(chars, start_offset, is_identifier_char);

    let span = Span::new(start_offset, end);
    LexItem::new(Token::Identifier, span.str_from_source(input), span)
}

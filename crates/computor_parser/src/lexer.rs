//! Lazy tokenizer.
//!
//! Patterns are tried in priority order at each position: number, `-`, `+`,
//! `*`, `^`, `=`, the variable letter. Whitespace is skipped. The first
//! unrecognized character ends the stream with an error.

use computor_ast::{Span, Token, TokenKind};
use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{opt, recognize, value},
    sequence::pair,
    IResult,
};

use crate::error::ParseError;

// Digits with at most one decimal point: 12, 1.5, 3.
fn number(input: &str) -> IResult<&str, TokenKind> {
    value(
        TokenKind::Number,
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
    )(input)
}

fn symbol(input: &str) -> IResult<&str, TokenKind> {
    alt((
        value(TokenKind::Minus, char('-')),
        value(TokenKind::Plus, char('+')),
        value(TokenKind::Star, char('*')),
        value(TokenKind::Caret, char('^')),
        value(TokenKind::Equals, char('=')),
        value(TokenKind::Variable, one_of("xX")),
    ))(input)
}

fn token_kind(input: &str) -> IResult<&str, TokenKind> {
    alt((number, symbol))(input)
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

/// Single-pass token stream over an equation.
///
/// Yields `Err` at most once; after that it is exhausted.
#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    offset: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            failed: false,
        }
    }

    /// Byte length of the source, where end-of-input errors point.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let rest = &self.source[self.offset..];
        let trimmed = whitespace(rest).map_or(rest, |(remaining, _)| remaining);
        self.offset += rest.len() - trimmed.len();

        let ch = trimmed.chars().next()?;
        match token_kind(trimmed) {
            Ok((remaining, kind)) => {
                let start = self.offset;
                self.offset += trimmed.len() - remaining.len();
                let span = Span::new(start, self.offset);
                Some(Ok(Token::new(kind, &self.source[start..self.offset], span)))
            }
            Err(_) => {
                self.failed = true;
                let span = Span::new(self.offset, self.offset + ch.len_utf8());
                Some(Err(ParseError::Tokenize { ch, span }))
            }
        }
    }
}

/// Tokenize `text` lazily.
pub fn tokenize(text: &str) -> Lexer<'_> {
    Lexer::new(text)
}

//! Recursive-descent equation parser with one token of lookahead.
//!
//! ```text
//! equation  := expr '=' expr
//! expr      := term { ('+' | '-') term }
//! term      := factor { ['*'] factor }
//! factor    := NUMBER | '-' NUMBER | ['-'] power
//! power     := VARIABLE [ '^' ['-'] NUMBER | NUMBER ]
//! ```
//!
//! Without an explicit `*`, a following factor must start with a number or
//! the variable. A `-` after a complete factor is always the binary operator
//! of `expr`, so `2 -X` reads as `2 - X`.

use computor_ast::{Exponent, Monomial, Span, SparsePolynomial, Token, TokenKind, MAX_EXPONENT};
use tracing::debug;

use crate::error::ParseError;
use crate::lexer::tokenize;

/// Parser position: the token stream plus the single lookahead token.
///
/// Lives for exactly one `parse_tokens` call.
struct Cursor<'a, I> {
    tokens: I,
    lookahead: Option<Token<'a>>,
    /// Source range covered by the tokens consumed so far.
    consumed: Option<Span>,
}

impl<'a, I> Cursor<'a, I>
where
    I: Iterator<Item = Result<Token<'a>, ParseError>>,
{
    fn new(mut tokens: I) -> Result<Self, ParseError> {
        let lookahead = tokens.next().transpose()?;
        Ok(Self {
            tokens,
            lookahead,
            consumed: None,
        })
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.lookahead.map(|t| t.kind)
    }

    /// Consume the lookahead if it has the given kind.
    fn accept_token(&mut self, kind: TokenKind) -> Result<Option<Token<'a>>, ParseError> {
        match self.lookahead {
            Some(token) if token.kind == kind => {
                self.consumed = Some(self.consumed.map_or(token.span, |s| s.join(token.span)));
                self.lookahead = self.tokens.next().transpose()?;
                Ok(Some(token))
            }
            _ => Ok(None),
        }
    }

    fn accept(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        Ok(self.accept_token(kind)?.is_some())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, ParseError> {
        match self.accept_token(kind)? {
            Some(token) => Ok(token),
            None => Err(self.unexpected(kind.to_string())),
        }
    }

    fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let expected = expected.into();
        match self.lookahead {
            Some(token) => ParseError::UnexpectedToken {
                expected,
                found: token.to_string(),
                span: token.span,
            },
            None => ParseError::UnexpectedToken {
                expected,
                found: "end of input".to_string(),
                span: Span::at(self.consumed.map_or(0, |s| s.end)),
            },
        }
    }
}

/// Parse an equation into `left - right` as a sparse polynomial.
pub fn parse(text: &str) -> Result<SparsePolynomial, ParseError> {
    parse_tokens(tokenize(text))
}

/// Parse a token stream, such as the one produced by [`tokenize`].
///
/// The stream is consumed once; a tokenization error stops parsing at the
/// point it is reached.
pub fn parse_tokens<'a, I>(tokens: I) -> Result<SparsePolynomial, ParseError>
where
    I: IntoIterator<Item = Result<Token<'a>, ParseError>>,
{
    let mut cursor = Cursor::new(tokens.into_iter())?;
    let poly = equation(&mut cursor)?;

    if let Some(token) = cursor.lookahead {
        return Err(ParseError::TrailingInput {
            found: token.to_string(),
            span: token.span,
        });
    }
    if !poly.is_finite() {
        return Err(out_of_range(cursor.consumed.unwrap_or_default()));
    }

    debug!(?poly, "parsed equation");
    Ok(poly)
}

fn equation<'a, I>(cursor: &mut Cursor<'a, I>) -> Result<SparsePolynomial, ParseError>
where
    I: Iterator<Item = Result<Token<'a>, ParseError>>,
{
    let lhs = expr(cursor)?;
    cursor.expect(TokenKind::Equals)?;
    let rhs = expr(cursor)?;
    Ok(lhs.subtract(&rhs))
}

fn expr<'a, I>(cursor: &mut Cursor<'a, I>) -> Result<SparsePolynomial, ParseError>
where
    I: Iterator<Item = Result<Token<'a>, ParseError>>,
{
    let mut poly = SparsePolynomial::new();
    poly.add_monomial(term(cursor)?);

    loop {
        if cursor.accept(TokenKind::Plus)? {
            poly.add_monomial(term(cursor)?);
        } else if cursor.accept(TokenKind::Minus)? {
            poly.add_monomial(term(cursor)?.negated());
        } else {
            break;
        }
    }

    Ok(poly)
}

fn term<'a, I>(cursor: &mut Cursor<'a, I>) -> Result<Monomial, ParseError>
where
    I: Iterator<Item = Result<Token<'a>, ParseError>>,
{
    let (mut product, mut span) = factor(cursor)?;

    loop {
        let explicit = cursor.accept(TokenKind::Star)?;
        let implicit = matches!(
            cursor.peek_kind(),
            Some(TokenKind::Number | TokenKind::Variable)
        );
        if !explicit && !implicit {
            break;
        }

        let (next, next_span) = factor(cursor)?;
        span = span.join(next_span);
        product = match product.checked_mul(next) {
            Some(product) => product,
            None if product.exponent.checked_add(next.exponent).is_none() => {
                return Err(too_large(span))
            }
            None => return Err(out_of_range(span)),
        };
    }

    Ok(product)
}

fn factor<'a, I>(cursor: &mut Cursor<'a, I>) -> Result<(Monomial, Span), ParseError>
where
    I: Iterator<Item = Result<Token<'a>, ParseError>>,
{
    if let Some(minus) = cursor.accept_token(TokenKind::Minus)? {
        let (monomial, span) = unsigned_factor(cursor)?;
        return Ok((monomial.negated(), minus.span.join(span)));
    }
    unsigned_factor(cursor)
}

fn unsigned_factor<'a, I>(cursor: &mut Cursor<'a, I>) -> Result<(Monomial, Span), ParseError>
where
    I: Iterator<Item = Result<Token<'a>, ParseError>>,
{
    if let Some(token) = cursor.accept_token(TokenKind::Number)? {
        return Ok((Monomial::constant(number_value(&token)?), token.span));
    }
    power(cursor)
}

fn power<'a, I>(cursor: &mut Cursor<'a, I>) -> Result<(Monomial, Span), ParseError>
where
    I: Iterator<Item = Result<Token<'a>, ParseError>>,
{
    let variable = match cursor.accept_token(TokenKind::Variable)? {
        Some(token) => token,
        None => return Err(cursor.unexpected("a number or 'X'")),
    };

    if cursor.accept(TokenKind::Caret)? {
        let minus = cursor.accept_token(TokenKind::Minus)?;
        let digits = cursor.expect(TokenKind::Number)?;
        let exponent = exponent_value(&digits, minus.is_some())?;
        return Ok((Monomial::new(1.0, exponent), variable.span.join(digits.span)));
    }

    if let Some(digits) = cursor.accept_token(TokenKind::Number)? {
        let exponent = exponent_value(&digits, false)?;
        return Ok((Monomial::new(1.0, exponent), variable.span.join(digits.span)));
    }

    Ok((Monomial::power(1.0, 1), variable.span))
}

fn number_value(token: &Token<'_>) -> Result<f64, ParseError> {
    match token.text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::semantic(
            format!("number {} is out of range", token.text),
            token.span,
        )),
    }
}

// Zero and negative powers fold into the constant term.
fn exponent_value(token: &Token<'_>, negative: bool) -> Result<Exponent, ParseError> {
    if token.text.contains('.') {
        return Err(ParseError::semantic(
            "power must be an integer",
            token.span,
        ));
    }
    if negative {
        return Ok(Exponent::Folded);
    }
    match token.text.parse::<u32>() {
        Ok(0) => Ok(Exponent::Folded),
        Ok(p) if p <= MAX_EXPONENT => Ok(Exponent::Power(p)),
        _ => Err(too_large(token.span)),
    }
}

fn out_of_range(span: Span) -> ParseError {
    ParseError::semantic("coefficient is out of range", span)
}

fn too_large(span: Span) -> ParseError {
    ParseError::semantic(
        format!("power is too large (maximum is {MAX_EXPONENT})"),
        span,
    )
}

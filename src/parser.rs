//! Recursive-descent parser for formula text.
//!
//! Operator precedence, loosest first: `iff`, `implies`, `or`, `and`,
//! `not`. Chains at one binary level fold left-to-right into nested
//! binary nodes, so `a implies b implies c` parses as
//! `(a implies b) implies c`. `not` is right-recursive and binds
//! tighter than every binary operator; parentheses reset precedence.
//!
//! ```text
//! formula     := iff
//! iff         := implication ( "iff" implication )*
//! implication := disjunction ( "implies" disjunction )*
//! disjunction := conjunction ( "or" conjunction )*
//! conjunction := negation ( "and" negation )*
//! negation    := "not" negation | atom
//! atom        := Variable | "0" | "1" | "(" formula ")"
//! ```

use crate::ast::Expr;
use crate::error::{Error, SyntaxError};
use crate::token::{tokenize, Token};

/// Tokenizes and parses formula text.
pub fn parse(input: &str) -> Result<Expr, Error> {
    let tokens = tokenize(input)?;
    let expr = parse_tokens(&tokens)?;
    Ok(expr)
}

/// Parses a complete formula from a token sequence.
///
/// The whole sequence must form one formula; leftover tokens are a
/// `SyntaxError::TrailingInput`.
pub fn parse_tokens(tokens: &[Token]) -> Result<Expr, SyntaxError> {
    if tokens.is_empty() {
        return Err(SyntaxError::EmptyFormula);
    }
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.formula()?;
    if let Some(&token) = parser.peek() {
        return Err(SyntaxError::TrailingInput {
            token,
            position: parser.pos,
        });
    }
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the next token if it equals `expected`.
    fn eat(&mut self, expected: Token) -> bool {
        if self.peek() == Some(&expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn formula(&mut self) -> Result<Expr, SyntaxError> {
        self.iff()
    }

    fn iff(&mut self) -> Result<Expr, SyntaxError> {
        let mut lhs = self.implication()?;
        while self.eat(Token::Iff) {
            let rhs = self.implication()?;
            lhs = Expr::iff(lhs, rhs);
        }
        Ok(lhs)
    }

    fn implication(&mut self) -> Result<Expr, SyntaxError> {
        let mut lhs = self.disjunction()?;
        while self.eat(Token::Implies) {
            let rhs = self.disjunction()?;
            lhs = Expr::implies(lhs, rhs);
        }
        Ok(lhs)
    }

    fn disjunction(&mut self) -> Result<Expr, SyntaxError> {
        let mut lhs = self.conjunction()?;
        while self.eat(Token::Or) {
            let rhs = self.conjunction()?;
            lhs = Expr::or(lhs, rhs);
        }
        Ok(lhs)
    }

    fn conjunction(&mut self) -> Result<Expr, SyntaxError> {
        let mut lhs = self.negation()?;
        while self.eat(Token::And) {
            let rhs = self.negation()?;
            lhs = Expr::and(lhs, rhs);
        }
        Ok(lhs)
    }

    fn negation(&mut self) -> Result<Expr, SyntaxError> {
        if self.eat(Token::Not) {
            Ok(Expr::not(self.negation()?))
        } else {
            self.atom()
        }
    }

    fn atom(&mut self) -> Result<Expr, SyntaxError> {
        match self.advance() {
            None => Err(SyntaxError::UnexpectedEnd),
            Some(Token::Var(v)) => Ok(Expr::Var(v)),
            Some(Token::Lit(b)) => Ok(Expr::Const(b)),
            Some(Token::LParen) => {
                let inner = self.formula()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    Some(token) => Err(SyntaxError::UnexpectedToken {
                        token,
                        position: self.pos - 1,
                    }),
                    None => Err(SyntaxError::UnclosedParenthesis),
                }
            }
            Some(token) => Err(SyntaxError::UnexpectedToken {
                token,
                position: self.pos - 1,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_variable() {
        assert_eq!(parse("a").unwrap(), Expr::var('a'));
    }

    #[test]
    fn test_parse_literal_atom() {
        assert_eq!(parse("1").unwrap(), Expr::Const(true));
        assert_eq!(parse("0").unwrap(), Expr::Const(false));
    }

    #[test]
    fn test_precedence_and_over_or() {
        // a or b and c == a or (b and c)
        let expected = Expr::or(Expr::var('a'), Expr::and(Expr::var('b'), Expr::var('c')));
        assert_eq!(parse("a or b and c").unwrap(), expected);
    }

    #[test]
    fn test_precedence_iff_loosest() {
        // a implies b iff c == (a implies b) iff c
        let expected = Expr::iff(Expr::implies(Expr::var('a'), Expr::var('b')), Expr::var('c'));
        assert_eq!(parse("a implies b iff c").unwrap(), expected);
    }

    #[test]
    fn test_binary_chains_fold_left() {
        let expected = Expr::implies(
            Expr::implies(Expr::var('a'), Expr::var('b')),
            Expr::var('c'),
        );
        assert_eq!(parse("a implies b implies c").unwrap(), expected);

        let expected = Expr::or(Expr::or(Expr::var('a'), Expr::var('b')), Expr::var('c'));
        assert_eq!(parse("a or b or c").unwrap(), expected);
    }

    #[test]
    fn test_not_is_right_recursive() {
        let expected = Expr::not(Expr::not(Expr::var('a')));
        assert_eq!(parse("not not a").unwrap(), expected);
    }

    #[test]
    fn test_not_binds_tighter_than_and() {
        // not a and b == (not a) and b
        let expected = Expr::and(Expr::not(Expr::var('a')), Expr::var('b'));
        assert_eq!(parse("not a and b").unwrap(), expected);
    }

    #[test]
    fn test_parentheses_reset_precedence() {
        let expected = Expr::and(Expr::var('a'), Expr::or(Expr::var('b'), Expr::var('c')));
        assert_eq!(parse("a and (b or c)").unwrap(), expected);
    }

    #[test]
    fn test_empty_formula() {
        assert_eq!(parse("").unwrap_err(), SyntaxError::EmptyFormula.into());
        assert_eq!(parse("  ").unwrap_err(), SyntaxError::EmptyFormula.into());
    }

    #[test]
    fn test_unclosed_parenthesis() {
        assert_eq!(
            parse("(a and b").unwrap_err(),
            SyntaxError::UnclosedParenthesis.into()
        );
    }

    #[test]
    fn test_unexpected_token() {
        assert_eq!(
            parse("a and or b").unwrap_err(),
            SyntaxError::UnexpectedToken {
                token: Token::Or,
                position: 2,
            }
            .into()
        );
    }

    #[test]
    fn test_unexpected_end() {
        assert_eq!(parse("a and").unwrap_err(), SyntaxError::UnexpectedEnd.into());
        assert_eq!(parse("not").unwrap_err(), SyntaxError::UnexpectedEnd.into());
    }

    #[test]
    fn test_trailing_input() {
        assert_eq!(
            parse("a b").unwrap_err(),
            SyntaxError::TrailingInput {
                token: Token::Var(crate::types::Var::new('b')),
                position: 1,
            }
            .into()
        );
    }

    #[test]
    fn test_equals_is_not_part_of_a_formula() {
        assert_eq!(
            parse("a = 1").unwrap_err(),
            SyntaxError::TrailingInput {
                token: Token::Equals,
                position: 1,
            }
            .into()
        );
    }
}

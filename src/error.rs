//! Error types for tokenizing, parsing, evaluation, and analysis.

use thiserror::Error;

use crate::token::Token;
use crate::types::Var;

/// Errors produced while turning formula text into tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Character outside the accepted alphabet.
    #[error("illegal character {ch:?} at offset {offset}")]
    IllegalCharacter { ch: char, offset: usize },

    /// Letter run longer than one character that is not a reserved word.
    #[error("unknown identifier {word:?} at offset {offset}")]
    UnknownIdentifier { word: String, offset: usize },
}

/// Errors produced while parsing a token sequence into a formula.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The input contained no tokens at all.
    #[error("empty formula")]
    EmptyFormula,

    /// Token cannot extend the current production.
    ///
    /// The position is the token's index in the token sequence.
    #[error("unexpected token `{token}` at position {position}")]
    UnexpectedToken { token: Token, position: usize },

    /// Input ended in the middle of a production.
    #[error("unexpected end of formula")]
    UnexpectedEnd,

    /// An opening `(` has no matching `)`.
    #[error("unclosed parenthesis")]
    UnclosedParenthesis,

    /// Tokens remain after a complete formula.
    #[error("trailing input starting with `{token}` at position {position}")]
    TrailingInput { token: Token, position: usize },
}

/// Errors produced while evaluating a formula.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The assignment has no value for a variable the formula uses.
    #[error("no value assigned to variable `{0}`")]
    MissingVariable(Var),
}

/// Any error the text-level analysis functions can return.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Inference query was not `<formula> = <0|1>`.
    #[error("invalid inference target: {0}")]
    InvalidTarget(String),

    /// Formula references more distinct variables than the engine
    /// is willing to enumerate.
    #[error("formula uses {count} variables, exceeding the enumeration limit of {max}")]
    VariableLimitExceeded { count: usize, max: usize },
}

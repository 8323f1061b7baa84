//! # proplogic-rs: Propositional Logic in Rust
//!
//! **`proplogic-rs`** parses, evaluates, and analyzes propositional-logic formulas
//! over boolean variables named by single lowercase letters.
//!
//! ## The formula language
//!
//! Formulas are written with the word operators `not`, `and`, `or`, `implies`,
//! and `iff`, plus parentheses and the literals `0` and `1`.
//! Precedence from loosest to tightest: `iff`, `implies`, `or`, `and`, `not`;
//! binary chains associate to the left, so `a implies b implies c` means
//! `(a implies b) implies c`.
//!
//! Formula text is never executed --- it is tokenized and parsed into an explicit
//! syntax tree, and a dedicated evaluator walks the tree under an assignment.
//!
//! ## Key Features
//!
//! - **Real parser**: a tokenizer and recursive-descent parser with positioned errors; malformed input is always a typed [`Error`][crate::error::Error], never a panic.
//! - **Canonical truth tables**: rows enumerate in binary-counter order over the sorted variables, so column meaning and row positions are stable and comparable.
//! - **Analysis on top**: tautology checking, logical equivalence, and inference (all assignments producing a target value) are thin layers over one enumeration engine.
//! - **Bounded enumeration**: table size is capped by an explicit, documented [`Limits`][crate::limits::Limits] policy instead of unbounded blow-up.
//!
//! ## Quick Start
//!
//! ```rust
//! use proplogic_rs::analysis::{are_equivalent, infer, is_tautology, truth_table};
//!
//! // Tautology: every row of the table is true.
//! assert!(is_tautology("(a and b) implies a").unwrap());
//! assert!(!is_tautology("p iff q").unwrap());
//!
//! // De Morgan's law, checked by enumeration.
//! assert!(are_equivalent("not (a and b)", "not a or not b").unwrap());
//!
//! // All assignments making `a and b` true, as rows of [a, b] values.
//! let result = infer("a and b = 1").unwrap();
//! assert_eq!(result.assignments, vec![vec![true, true]]);
//!
//! // The full table: 2^n rows.
//! let table = truth_table("a or b").unwrap();
//! assert_eq!(table.len(), 4);
//! ```
//!
//! ## Core Components
//!
//! - **[`token`]**: token vocabulary and the tokenizer.
//! - **[`parser`]**: recursive-descent parser producing an [`Expr`][crate::ast::Expr] tree.
//! - **[`ast`]**: the formula tree, structural helpers, and the variable collector.
//! - **[`eval`]**: evaluation of a tree under an [`Assignment`][crate::eval::Assignment].
//! - **[`table`]**: canonical truth-table enumeration.
//! - **[`analysis`]**: the text-level functions an interactive front end consumes.

pub mod analysis;
pub mod ast;
pub mod error;
pub mod eval;
pub mod limits;
pub mod parser;
pub mod table;
pub mod token;
pub mod types;

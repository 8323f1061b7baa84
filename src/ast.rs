//! Formula trees.
//!
//! This module provides the `Expr` type representing propositional
//! formulas as immutable trees with exclusively owned children, plus
//! structural helpers and the variable collector.

use std::collections::BTreeSet;
use std::fmt;

use crate::types::Var;

/// A propositional formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Constant truth value (`0` or `1` in formula text).
    Const(bool),
    /// Variable reference.
    Var(Var),
    /// Negation.
    Not(Box<Expr>),
    /// Conjunction.
    And(Box<Expr>, Box<Expr>),
    /// Disjunction.
    Or(Box<Expr>, Box<Expr>),
    /// Material implication.
    Implies(Box<Expr>, Box<Expr>),
    /// Biconditional.
    Iff(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Variable reference by name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a lowercase ASCII letter.
    pub fn var(name: char) -> Self {
        Expr::Var(Var::new(name))
    }

    pub fn not(e: Self) -> Self {
        Expr::Not(Box::new(e))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Expr::Iff(Box::new(lhs), Box::new(rhs))
    }

    /// Depth of the formula tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 0,
            Expr::Not(e) => 1 + e.depth(),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) | Expr::Iff(l, r) => {
                1 + l.depth().max(r.depth())
            }
        }
    }

    /// Size of the formula tree (number of nodes).
    pub fn size(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) | Expr::Iff(l, r) => {
                1 + l.size() + r.size()
            }
        }
    }

    /// The distinct variables this formula references, in ascending
    /// name order.
    pub fn variables(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, out: &mut BTreeSet<Var>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(v) => {
                out.insert(*v);
            }
            Expr::Not(e) => e.collect_variables(out),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) | Expr::Iff(l, r) => {
                l.collect_variables(out);
                r.collect_variables(out);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(false) => write!(f, "0"),
            Expr::Const(true) => write!(f, "1"),
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Not(e) => write!(f, "not {}", e),
            Expr::And(l, r) => write!(f, "({} and {})", l, r),
            Expr::Or(l, r) => write!(f, "({} or {})", l, r),
            Expr::Implies(l, r) => write!(f, "({} implies {})", l, r),
            Expr::Iff(l, r) => write!(f, "({} iff {})", l, r),
        }
    }
}
